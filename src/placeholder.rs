// Placeholder tokens that shield preserved substrings from the strip passes.
//
// A token is `<marker><index><marker>`, where the marker is a private-use
// code point that occurs in neither the input nor the replacement string and
// the index points into the preserve list. Private-use code points sit
// outside the emoji table and ASCII digits cannot complete an emoticon after
// a marker or digit, so neither pass can split or consume a token. Because the
// marker is absent from everything else, every marker left in the processed
// text belongs to a token and restoring is a plain split.

use std::collections::HashSet;

use tracing::warn;

const PRIVATE_USE: [(u32, u32); 2] = [(0xE000, 0xF8FF), (0xF0000, 0xFFFFD)];

fn is_private_use(c: char) -> bool {
    let cp = c as u32;
    PRIVATE_USE.iter().any(|&(lo, hi)| lo <= cp && cp <= hi)
}

/// Pick a private-use code point absent from all of `haystacks`.
///
/// Probing starts at a random offset so the marker varies between calls.
/// Returns `None` only if every private-use code point is taken.
pub fn pick_marker(haystacks: &[&str]) -> Option<char> {
    let taken: HashSet<char> = haystacks
        .iter()
        .flat_map(|h| h.chars())
        .filter(|&c| is_private_use(c))
        .collect();

    let offset = rand::random::<u32>();
    for &(lo, hi) in &PRIVATE_USE {
        let span = hi - lo + 1;
        for step in 0..span {
            let cp = lo + offset.wrapping_add(step) % span;
            if let Some(c) = char::from_u32(cp) {
                if !taken.contains(&c) {
                    return Some(c);
                }
            }
        }
    }
    None
}

/// Input text with every preserved substring swapped for a token.
#[derive(Debug)]
pub struct Shielded<'p> {
    text: String,
    marker: Option<char>,
    originals: &'p [String],
    hits: usize,
}

impl<'p> Shielded<'p> {
    /// Replace each occurrence of a `preserve` entry in `text` with a token.
    ///
    /// `preserve` must hold distinct non-empty entries ordered longest first;
    /// at each position the first entry that matches wins, so the longest
    /// candidate is taken. Matching is literal.
    pub fn new(text: &str, preserve: &'p [String], replace_with: &str) -> Self {
        if preserve.is_empty() {
            return Self::passthrough(text, preserve);
        }

        let Some(marker) = pick_marker(&[text, replace_with]) else {
            warn!("No free private-use code point for placeholders; preserve list ignored");
            return Self::passthrough(text, preserve);
        };

        let mut out = String::with_capacity(text.len());
        let mut hits = 0;
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            match preserve.iter().position(|p| rest.starts_with(p.as_str())) {
                Some(idx) => {
                    out.push(marker);
                    out.push_str(&idx.to_string());
                    out.push(marker);
                    rest = &rest[preserve[idx].len()..];
                    hits += 1;
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        Self {
            text: out,
            marker: Some(marker),
            originals: preserve,
            hits,
        }
    }

    fn passthrough(text: &str, preserve: &'p [String]) -> Self {
        Self {
            text: text.to_string(),
            marker: None,
            originals: preserve,
            hits: 0,
        }
    }

    /// The shielded text the strip passes operate on.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many preserved occurrences were replaced by tokens.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Swap every token in `processed` back to the string it shielded.
    pub fn restore(&self, processed: &str) -> String {
        let Some(marker) = self.marker else {
            return processed.to_string();
        };
        if self.hits == 0 {
            return processed.to_string();
        }

        let mut out = String::with_capacity(processed.len());
        for (i, part) in processed.split(marker).enumerate() {
            if i % 2 == 0 {
                out.push_str(part);
                continue;
            }
            match part.parse::<usize>().ok().and_then(|idx| self.originals.get(idx)) {
                Some(original) => out.push_str(original),
                None => {
                    out.push(marker);
                    out.push_str(part);
                    out.push(marker);
                }
            }
        }
        out
    }
}
