//! Content templating: idea hooks, hashtag sets, and captions.

pub mod caption;
pub mod hashtags;
pub mod idea;

pub use caption::{CaptionOptions, DEFAULT_CTA, generate_caption, tone_hint};
pub use hashtags::{BASE_HASHTAGS, MAX_HASHTAGS, generate_hashtags};
pub use idea::{FixedPicker, HOOK_COUNT, HookPicker, RandomPicker, generate_idea, hook_catalog};
