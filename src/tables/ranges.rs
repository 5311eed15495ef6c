// Unicode code-point ranges treated as emoji.
//
// The table is sorted and non-overlapping so membership is a binary search.
// Ranges are inclusive on both ends. Besides the pictograph blocks it covers
// the modifiers of emoji sequences (variation selectors, keycap combiner,
// tag characters) so a subdivision flag disappears as one run. The
// zero-width joiner is not listed: Indic scripts need it for shaping, so it
// only counts as emoji between two emoji code points (see `find_emojis`).
//
// ASCII is deliberately absent: `#`, `*` and `0-9` are emoji bases in
// keycap sequences but far more often plain text, so `1️⃣` strips to `1`.

use std::cmp::Ordering;

/// One inclusive range of emoji code points, labelled with its block name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    pub start: u32,
    pub end: u32,
    pub name: &'static str,
}

impl CodePointRange {
    const fn new(start: u32, end: u32, name: &'static str) -> Self {
        Self { start, end, name }
    }

    const fn single(cp: u32, name: &'static str) -> Self {
        Self::new(cp, cp, name)
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }

    /// Number of code points covered by this range.
    pub fn size(&self) -> u32 {
        self.end - self.start + 1
    }
}

pub static EMOJI_RANGES: &[CodePointRange] = &[
    CodePointRange::single(0x20E3, "Combining Enclosing Keycap"),
    CodePointRange::new(0x2190, 0x21FF, "Arrows"),
    CodePointRange::new(0x2300, 0x23FF, "Miscellaneous Technical"),
    CodePointRange::new(0x2460, 0x24FF, "Enclosed Alphanumerics"),
    CodePointRange::new(0x25A0, 0x25FF, "Geometric Shapes"),
    CodePointRange::new(0x2600, 0x26FF, "Miscellaneous Symbols"),
    CodePointRange::new(0x2700, 0x27BF, "Dingbats"),
    CodePointRange::new(0x2900, 0x297F, "Supplemental Arrows-B"),
    CodePointRange::new(0x2B00, 0x2BFF, "Miscellaneous Symbols and Arrows"),
    CodePointRange::single(0x3030, "Wavy Dash"),
    CodePointRange::single(0x303D, "Part Alternation Mark"),
    CodePointRange::single(0x3297, "Circled Ideograph Congratulation"),
    CodePointRange::single(0x3299, "Circled Ideograph Secret"),
    CodePointRange::new(0xFE00, 0xFE0F, "Variation Selectors"),
    CodePointRange::new(0x1F000, 0x1F02F, "Mahjong Tiles"),
    CodePointRange::new(0x1F0A0, 0x1F0FF, "Playing Cards"),
    CodePointRange::new(0x1F100, 0x1F1E5, "Enclosed Alphanumeric Supplement"),
    CodePointRange::new(0x1F1E6, 0x1F1FF, "Regional Indicator Symbols"),
    CodePointRange::new(0x1F200, 0x1F2FF, "Enclosed Ideographic Supplement"),
    CodePointRange::new(0x1F300, 0x1F5FF, "Miscellaneous Symbols and Pictographs"),
    CodePointRange::new(0x1F600, 0x1F64F, "Emoticons"),
    CodePointRange::new(0x1F650, 0x1F67F, "Ornamental Dingbats"),
    CodePointRange::new(0x1F680, 0x1F6FF, "Transport and Map Symbols"),
    CodePointRange::new(0x1F700, 0x1F77F, "Alchemical Symbols"),
    CodePointRange::new(0x1F780, 0x1F7FF, "Geometric Shapes Extended"),
    CodePointRange::new(0x1F800, 0x1F8FF, "Supplemental Arrows-C"),
    CodePointRange::new(0x1F900, 0x1F9FF, "Supplemental Symbols and Pictographs"),
    CodePointRange::new(0x1FA00, 0x1FA6F, "Chess Symbols"),
    CodePointRange::new(0x1FA70, 0x1FAFF, "Symbols and Pictographs Extended-A"),
    CodePointRange::new(0xE0020, 0xE007F, "Tags"),
];

/// Find the table entry covering `c`, if any.
pub fn lookup(c: char) -> Option<&'static CodePointRange> {
    let cp = c as u32;
    EMOJI_RANGES
        .binary_search_by(|range| {
            if range.end < cp {
                Ordering::Less
            } else if range.start > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|idx| &EMOJI_RANGES[idx])
}

/// Whether `c` falls inside any emoji range.
pub fn is_emoji(c: char) -> bool {
    lookup(c).is_some()
}
