// ASCII emoticons and the matcher compiled from them.
//
// Entries are plain literals; they are escaped when the alternation is
// built, so `^`, `.`, `(`, `|` and `*` carry no regex meaning. The matcher is
// leftmost-first: the earliest starting match wins, and among matches that
// start at the same position the entry listed first wins.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex_lite::Regex;

pub static EMOTICONS: &[&str] = &[
    // Basic
    ":)", ":')", ":(", ":'(", ":D", ":P", ":|", ":*", ";)", ";D", "XD", "xD", "<3", "^_^",
    ">.<", "T_T", "o.o", "O.O", "o_O", "O_o", "-_-", "u_u", "v_v",
    // With a nose
    ":-)", ":^)", ":-(", ":^(", ";-)", ";^)", ":-D", ":^D", ":-P", ":^P", ":-|", ":^|", ":-*",
    ":^*",
    // Reversed and alternate eyes
    "(:", "(-:", "=)", "=(", ":}", ":{", ":3", ":B", ":J",
];

/// Alternation of every escaped emoticon, in table order.
pub fn pattern() -> String {
    EMOTICONS
        .iter()
        .map(|e| regex_lite::escape(e))
        .collect::<Vec<_>>()
        .join("|")
}

pub static EMOTICON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&pattern()).expect("escaped emoticon table is a valid pattern"));

/// Byte ranges of every emoticon in `text`, left to right, non-overlapping.
pub fn find_emoticons(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    EMOTICON_RE.find_iter(text).map(|m| m.start()..m.end())
}
