// emoji-strip: remove or replace Unicode emojis and ASCII emoticons in text.
//
// This is the library root. `filter` runs the strip pipeline, `tables` holds
// the static code-point and emoticon data it matches against, and `config`
// and `output` back the command-line binary.

pub mod config;
pub mod error;
pub mod filter;
pub mod options;
pub mod output;
pub mod placeholder;
pub mod tables;

pub use error::StripError;
pub use filter::{contains_emoji, find_emojis, strip, strip_value, ScanReport, Stripper};
pub use options::StripOptions;
pub use tables::emoticons::find_emoticons;
pub use tables::ranges::is_emoji;
