// Static match data: emoji code-point ranges and ASCII emoticons.

pub mod emoticons;
pub mod ranges;
