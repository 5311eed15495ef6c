// Unit tests for the strip pipeline.
//
// Covers the public strip contract: defaults, each removal category on its
// own and combined, replacement, multi-code-point sequences, the preserve
// list, and the dynamic type guard.

use emoji_strip::{strip, strip_value, StripError, StripOptions};
use serde_json::json;

fn both() -> StripOptions {
    StripOptions::new().with_emojis(true).with_emoticons(true)
}

fn neither() -> StripOptions {
    StripOptions::new().with_emojis(false).with_emoticons(false)
}

// ============================================================
// Defaults and identity
// ============================================================

#[test]
fn removes_emojis_by_default() {
    let result = strip("Hello, world! 😀🌍", &StripOptions::default());
    assert_eq!(result, "Hello, world! ");
}

#[test]
fn emoticons_kept_by_default() {
    let text = "Hello :) World :(";
    assert_eq!(strip(text, &StripOptions::default()), text);
}

#[test]
fn disabled_is_identity() {
    for text in [
        "",
        "plain",
        "Hello, world! 😀🌍",
        "Hello :) World :(",
        "👨‍👩‍👧‍👦 <3 ^_^",
        "\u{E000}1\u{E000}",
    ] {
        assert_eq!(strip(text, &neither()), text);
    }
}

#[test]
fn disabled_ignores_preserve_and_replacement() {
    let opts = neither().preserve(["😀"]).replace_with("[x]");
    assert_eq!(strip("a 😀 :) b", &opts), "a 😀 :) b");
}

#[test]
fn empty_input() {
    assert_eq!(strip("", &StripOptions::default()), "");
    assert_eq!(strip("", &both().replace_with("x")), "");
}

#[test]
fn plain_text_untouched() {
    let text = "naïve café, 日本語 and Ελληνικά; 12:00 sharp";
    assert_eq!(strip(text, &StripOptions::default()), text);
}

// ============================================================
// Emoticons
// ============================================================

#[test]
fn removes_emoticons_only() {
    let opts = StripOptions::new().with_emojis(false).with_emoticons(true);
    assert_eq!(strip("Hello :) World :(", &opts), "Hello  World ");
}

#[test]
fn emoticons_only_leaves_emojis() {
    let opts = StripOptions::new().with_emojis(false).with_emoticons(true);
    assert_eq!(strip("nice 😀 :D", &opts), "nice 😀 ");
}

#[test]
fn nose_variants_removed_whole() {
    let opts = both();
    assert_eq!(strip("sure :-) ok ;-) fine :^(", &opts), "sure  ok  fine ");
}

#[test]
fn reversed_smileys_removed() {
    assert_eq!(strip("(: and (-:", &both()), " and ");
}

#[test]
fn dash_paren_alone_is_not_an_emoticon() {
    assert_eq!(strip("(a-)", &both()), "(a-)");
}

#[test]
fn adjacent_emoticons_each_replaced() {
    let opts = both().replace_with("_");
    assert_eq!(strip(":):(<3", &opts), "___");
}

// ============================================================
// Combined and replacement
// ============================================================

#[test]
fn removes_both_categories() {
    assert_eq!(strip("Happy :) 😄", &both()), "Happy  ");
    assert_eq!(strip("Happy coding! 😄 :)", &both()), "Happy coding!  ");
}

#[test]
fn replacement_substituted() {
    let opts = StripOptions::new().replace_with("[x]");
    assert_eq!(strip("Hi 😀", &opts), "Hi [x]");
}

#[test]
fn replacement_once_per_emoji_run() {
    let opts = StripOptions::new().replace_with("[x]");
    assert_eq!(strip("Hi 😀😀😀!", &opts), "Hi [x]!");
    assert_eq!(strip("😀 and 😀", &opts), "[x] and [x]");
}

#[test]
fn replacement_applies_to_emoticons() {
    let opts = both().replace_with("*");
    assert_eq!(strip("a :) b 🎉", &opts), "a * b *");
}

#[test]
fn replacement_with_dollar_is_literal() {
    let opts = both().replace_with("$0");
    assert_eq!(strip("x :) y", &opts), "x $0 y");
}

#[test]
fn astral_code_point_is_one_unit() {
    let opts = StripOptions::new().replace_with("X");
    assert_eq!(strip("🦀", &opts), "X");
}

// ============================================================
// Multi-code-point sequences
// ============================================================

#[test]
fn zwj_family_removed_entirely() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
    assert_eq!(strip(family, &StripOptions::default()), "");
    assert_eq!(
        strip(&format!("We are {family}!"), &StripOptions::default()),
        "We are !"
    );
}

#[test]
fn joiner_without_emoji_untouched() {
    let opts = both().replace_with("[x]");
    for text in ["क्\u{200D}ष", "ර්\u{200D}ය", "a\u{200D}b", "\u{200D}"] {
        assert_eq!(strip(text, &opts), text);
    }
}

#[test]
fn joiner_at_edge_of_emoji_kept() {
    let opts = StripOptions::default();
    assert_eq!(strip("\u{200D}😀\u{200D}", &opts), "\u{200D}\u{200D}");
    assert_eq!(strip("😀\u{200D}a", &opts), "\u{200D}a");
    assert_eq!(strip("क्\u{200D}ष 😀", &opts), "क्\u{200D}ष ");
}

#[test]
fn nested_emoticons_removed() {
    assert_eq!(strip("::))", &both()), "");
    assert_eq!(strip("((::", &both()), "");
    assert_eq!(strip("so <<33 much", &both()), "so  much");
}

#[test]
fn flags_removed() {
    assert_eq!(strip("Go 🇺🇸 go", &StripOptions::default()), "Go  go");

    let scotland = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}";
    assert_eq!(strip(scotland, &StripOptions::default()), "");
}

#[test]
fn skin_tone_and_variation_selector_removed() {
    assert_eq!(strip("👍🏽", &StripOptions::default()), "");
    assert_eq!(strip("I ❤️ it", &StripOptions::default()), "I  it");
}

#[test]
fn keycap_keeps_ascii_base() {
    assert_eq!(strip("1\u{FE0F}\u{20E3}", &StripOptions::default()), "1");
}

// ============================================================
// Preserve
// ============================================================

#[test]
fn preserved_emoji_survives() {
    let opts = StripOptions::new().preserve(["🦀"]);
    assert_eq!(strip("I ❤️ Rust 🦀", &opts), "I  Rust 🦀");
}

#[test]
fn preserved_emoticon_survives() {
    let opts = both().preserve([":)"]);
    assert_eq!(strip("ok :) fine :(", &opts), "ok :) fine ");
}

#[test]
fn preserved_survives_replacement() {
    let opts = StripOptions::new().preserve(["🦀"]).replace_with("_");
    assert_eq!(strip("🦀 and 😀", &opts), "🦀 and _");
}

#[test]
fn preserve_is_literal_not_pattern() {
    // An unescaped `.` would also shield `😀x`
    let opts = StripOptions::new().preserve(["😀."]);
    assert_eq!(strip("😀x 😀.", &opts), "x 😀.");
}

#[test]
fn preserve_metacharacter_emoticon() {
    let opts = both().preserve(["(:"]);
    assert_eq!(strip("(: and (-:", &opts), "(: and ");
}

#[test]
fn preserve_part_of_sequence_only_keeps_that_part() {
    // Preserving the bare heart keeps it; the trailing variation selector is
    // its own code point and still goes.
    let opts = StripOptions::new().preserve(["❤"]);
    assert_eq!(strip("❤\u{FE0F}", &opts), "❤");
}

#[test]
fn preserve_longest_entry_wins() {
    let family = "\u{1F468}\u{200D}\u{1F469}";
    let opts = StripOptions::new().preserve(["\u{1F468}", family]);
    assert_eq!(strip(&format!("{family} 😀"), &opts), format!("{family} "));
}

#[test]
fn empty_preserve_entries_ignored() {
    let opts = StripOptions {
        preserve: vec![String::new()],
        ..StripOptions::default()
    };
    assert_eq!(strip("a😀", &opts), "a");
}

#[test]
fn existing_private_use_text_not_confused_with_placeholders() {
    let opts = StripOptions::new().preserve(["😀"]);
    let text = "\u{E000}0\u{E000} 😀 \u{F8FF}";
    assert_eq!(strip(text, &opts), text);
}

#[test]
fn no_placeholder_leaks() {
    let opts = both().preserve(["🦀", ":)"]).replace_with("-");
    let result = strip("🦀 :) 😀 :( 🦀", &opts);
    assert_eq!(result, "🦀 :) - - 🦀");
    assert!(!result.chars().any(|c| ('\u{E000}'..='\u{F8FF}').contains(&c)));
}

// ============================================================
// Dynamic entry point and the type guard
// ============================================================

#[test]
fn non_string_input_rejected() {
    for value in [json!(123), json!(null), json!({}), json!([]), json!(true)] {
        let err = strip_value(&value, None).unwrap_err();
        assert!(
            matches!(err, StripError::InvalidArgument(_)),
            "{value} should be rejected"
        );
    }
}

#[test]
fn invalid_argument_message() {
    let err = strip_value(&json!(123), None).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: input must be a string");
}

#[test]
fn string_value_accepted_with_json_options() {
    let result = strip_value(&json!("Hi 😀"), Some(&json!({ "replaceWith": "[x]" })));
    assert_eq!(result.unwrap(), "Hi [x]");

    let result = strip_value(
        &json!("Happy :) 😄"),
        Some(&json!({ "removeEmojis": true, "removeEmoticons": true })),
    );
    assert_eq!(result.unwrap(), "Happy  ");
}

#[test]
fn non_object_options_use_defaults() {
    let result = strip_value(&json!("Hi 😀 :)"), Some(&json!("nonsense")));
    assert_eq!(result.unwrap(), "Hi  :)");
}
