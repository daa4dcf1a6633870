//! CSF lint rules
//!
//! Rules ported from eslint-plugin-storybook

pub mod default_exports;
pub mod meta_inline_properties;
pub mod no_redundant_story_name;
pub mod no_stories_of;

// Re-export rule structs
pub use default_exports::DefaultExports;
pub use meta_inline_properties::{MetaInlineProperties, MetaInlinePropertiesConfig};
pub use no_redundant_story_name::NoRedundantStoryName;
pub use no_stories_of::NoStoriesOf;
