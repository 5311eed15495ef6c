// The strip pipeline.
//
// shield preserved literals -> emoji runs -> emoticons -> restore
//
// Emojis are always handled before emoticons, so an emoticon that only
// appears once an emoji between its characters is removed (`:😀)`) is
// caught by the second pass.

use std::ops::Range;

use serde_json::Value;
use tracing::debug;

use crate::error::StripError;
use crate::options::StripOptions;
use crate::placeholder::Shielded;
use crate::tables::emoticons::find_emoticons;
use crate::tables::ranges::is_emoji;

/// What a strip pass found, without producing the stripped text's contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Maximal runs of emoji code points that were (or would be) replaced
    pub emoji_runs: usize,
    /// Code points inside those runs, joiners included
    pub emoji_chars: usize,
    /// Emoticons that were (or would be) replaced
    pub emoticons: usize,
    /// Preserved occurrences shielded from both passes
    pub preserved: usize,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.emoji_runs == 0 && self.emoticons == 0
    }
}

/// A compiled set of options, reusable across many inputs.
///
/// `Stripper` is `Send + Sync`; share one behind an `Arc` rather than
/// rebuilding it per call.
#[derive(Debug, Clone)]
pub struct Stripper {
    options: StripOptions,
    /// Distinct non-empty preserve entries, longest first
    preserve: Vec<String>,
}

impl Stripper {
    pub fn new(options: StripOptions) -> Self {
        let mut preserve: Vec<String> = options
            .preserve
            .iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect();
        preserve.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        preserve.dedup();

        Self { options, preserve }
    }

    pub fn options(&self) -> &StripOptions {
        &self.options
    }

    /// Remove (or replace) emojis and emoticons from `text`.
    pub fn strip(&self, text: &str) -> String {
        self.strip_with_report(text).0
    }

    /// Report what `strip` would remove from `text`.
    pub fn scan(&self, text: &str) -> ScanReport {
        self.strip_with_report(text).1
    }

    /// Strip `text` and report what was removed in one pass.
    pub fn strip_with_report(&self, text: &str) -> (String, ScanReport) {
        let mut report = ScanReport::default();
        if self.options.is_noop() || text.is_empty() {
            return (text.to_string(), report);
        }

        let replacement = self.options.replace_with.as_str();
        let shielded = Shielded::new(text, &self.preserve, replacement);
        report.preserved = shielded.hits();

        let mut working = shielded.text().to_string();

        if self.options.remove_emojis {
            let runs: Vec<Range<usize>> = find_emojis(&working).collect();
            report.emoji_runs = runs.len();
            report.emoji_chars = runs.iter().map(|r| working[r.clone()].chars().count()).sum();
            working = replace_spans(&working, &runs, replacement);
        }

        if self.options.remove_emoticons {
            let (stripped, count) = strip_emoticons(working, replacement);
            report.emoticons = count;
            working = stripped;
        }

        let output = shielded.restore(&working);

        debug!(
            emoji_runs = report.emoji_runs,
            emoji_chars = report.emoji_chars,
            emoticons = report.emoticons,
            preserved = report.preserved,
            "Stripped text"
        );

        (output, report)
    }
}

impl Default for Stripper {
    fn default() -> Self {
        Self::new(StripOptions::default())
    }
}

/// Strip `text` with one-off options.
pub fn strip(text: &str, options: &StripOptions) -> String {
    Stripper::new(options.clone()).strip(text)
}

/// Strip a dynamically typed value.
///
/// Fails with [`StripError::InvalidArgument`] unless `text` is a JSON string;
/// `null` stands in for a missing argument. `options` that are absent or not
/// an object resolve to the defaults.
pub fn strip_value(text: &Value, options: Option<&Value>) -> Result<String, StripError> {
    let text = text.as_str().ok_or_else(StripError::not_a_string)?;
    let options = options.map(StripOptions::from_value).unwrap_or_default();
    Ok(strip(text, &options))
}

/// True if `text` holds at least one emoji code point.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

/// Glues emoji into one sequence; only part of a run when emoji follow it.
const ZWJ: char = '\u{200D}';

/// Byte ranges of every maximal run of emoji code points in `text`.
///
/// A run starts at an emoji code point and carries on through further emoji.
/// A zero-width joiner extends the run only when an emoji comes right after
/// it, so joiners used by Indic and other scripts stay where they are.
pub fn find_emojis(text: &str) -> EmojiRuns<'_> {
    EmojiRuns { text, pos: 0 }
}

/// Iterator returned by [`find_emojis`].
pub struct EmojiRuns<'t> {
    text: &'t str,
    pos: usize,
}

impl Iterator for EmojiRuns<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let Some((offset, _)) = rest.char_indices().find(|&(_, c)| is_emoji(c)) else {
            self.pos = self.text.len();
            return None;
        };

        let start = self.pos + offset;
        let mut end = start;
        loop {
            let mut chars = self.text[end..].chars();
            match chars.next() {
                Some(c) if is_emoji(c) => end += c.len_utf8(),
                Some(ZWJ) => match chars.next() {
                    Some(next) if is_emoji(next) => end += ZWJ.len_utf8() + next.len_utf8(),
                    _ => break,
                },
                _ => break,
            }
        }

        self.pos = end;
        Some(start..end)
    }
}

/// Remove emoticons until none are left, returning the text and how many
/// were replaced.
///
/// Removing `:)` from `::))` leaves a new `:)`, so one pass is not enough.
/// A replacement that is itself an emoticon would match forever; that case
/// gets a single pass. Passes are capped at the input length.
fn strip_emoticons(mut text: String, replacement: &str) -> (String, usize) {
    let passes = if find_emoticons(replacement).next().is_none() {
        text.len().max(1)
    } else {
        1
    };

    let mut count = 0;
    for _ in 0..passes {
        let found: Vec<Range<usize>> = find_emoticons(&text).collect();
        if found.is_empty() {
            break;
        }
        count += found.len();
        let next = replace_spans(&text, &found, replacement);
        if next == text {
            break;
        }
        text = next;
    }
    (text, count)
}

/// Rebuild `text` with each span (sorted, non-overlapping) swapped for `with`.
fn replace_spans(text: &str, spans: &[Range<usize>], with: &str) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        out.push_str(with);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}
