mod duration;
mod example;
pub mod insights;
mod isrc;
pub mod market_content;
mod single;
mod validation;

pub use duration::{format_iso_8601, parse_duration};
pub use example::{example_single_fields, EXAMPLE_ISRC, EXAMPLE_TITLE};
pub use isrc::Isrc;
pub use single::{DurationInput, MusicSingleRelease, SingleFields};
pub use validation::{ValidationError, ValidationResult};
