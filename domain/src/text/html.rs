//! HTML cleaning for WordPress-rendered fields.
//!
//! WordPress escapes punctuation in `*.rendered` fields (`&#038;`, `&#8217;`,
//! `&hellip;`) and leaves markup in place. [`clean_html`] turns such a string
//! into plain text with a fixed, locale-independent entity table.

use crate::core::string::truncate_chars;
use regex::Regex;
use std::sync::OnceLock;

/// Default maximum excerpt length in characters
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

/// Words read per minute when estimating reading time
const WORDS_PER_MINUTE: usize = 200;

/// Entity table applied in order. `&amp;` is last so a single pass never
/// decodes text that an earlier entry produced.
const ENTITIES: &[(&str, &str)] = &[
    ("&#038;", "&"),
    ("&#38;", "&"),
    ("&lt;", "<"),
    ("&#060;", "<"),
    ("&gt;", ">"),
    ("&#062;", ">"),
    ("&quot;", "\""),
    ("&#034;", "\""),
    ("&#039;", "'"),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&#8216;", "'"),
    ("&#8217;", "'"),
    ("&lsquo;", "'"),
    ("&rsquo;", "'"),
    ("&#8220;", "\""),
    ("&#8221;", "\""),
    ("&ldquo;", "\""),
    ("&rdquo;", "\""),
    ("&nbsp;", " "),
    ("&#160;", " "),
    ("&#8211;", "–"),
    ("&ndash;", "–"),
    ("&#8212;", "—"),
    ("&mdash;", "—"),
    ("&#8230;", "..."),
    ("&hellip;", "..."),
    ("&amp;", "&"),
];

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

fn decode_entities(text: &str) -> String {
    let mut decoded = text.to_string();
    for (entity, replacement) in ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }
    decoded
}

fn clean_once(text: &str) -> String {
    let decoded = decode_entities(text);
    tag_pattern().replace_all(&decoded, "").trim().to_string()
}

/// Decode known entities, strip every `<...>` span, and trim.
///
/// Applied until the text stops changing, so double-escaped input
/// (`&amp;lt;b&amp;gt;`) ends up as clean as single-escaped input and
/// `clean_html(clean_html(s)) == clean_html(s)` holds for every `s`.
/// Each pass only ever shortens the text, so the loop terminates.
pub fn clean_html(text: &str) -> String {
    let mut current = clean_once(text);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Null-safe variant of [`clean_html`]: `None` yields an empty string.
pub fn clean_html_content(text: Option<&str>) -> String {
    text.map(clean_html).unwrap_or_default()
}

/// Clean `content` and cut it to `max_len` characters.
///
/// `...` is appended only when something was actually cut off.
pub fn get_excerpt(content: &str, max_len: usize) -> String {
    let cleaned = clean_html(content);
    match truncate_chars(&cleaned, max_len) {
        (head, true) => format!("{}...", head),
        (_, false) => cleaned,
    }
}

/// Estimated reading time in whole minutes (200 words/minute, rounded up,
/// never below one minute).
pub fn read_time(content: &str) -> u32 {
    let words = clean_html(content).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_wordpress_ampersand_and_strips_tags() {
        assert_eq!(
            clean_html("Smith &#038; Sons <b>Inc</b>"),
            "Smith & Sons Inc"
        );
    }

    #[test]
    fn test_decodes_smart_quotes_and_dashes() {
        assert_eq!(
            clean_html("We&#8217;re &#8220;fast&#8221; &ndash; really&hellip;"),
            "We're \"fast\" – really..."
        );
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(clean_html_content(None), "");
        assert_eq!(clean_html_content(Some("  <p></p> ")), "");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let samples = [
            "Smith &#038; Sons <b>Inc</b>",
            "&amp;lt;script&amp;gt;alert(1)&amp;lt;/script&amp;gt;",
            "a &lt; b &gt; c",
            "&amp;amp;nbsp;",
            "<p>Hello&nbsp;<em>world</em></p>\n",
            "plain text",
            "",
            "   ",
            "< unclosed",
        ];
        for sample in samples {
            let once = clean_html(sample);
            assert_eq!(clean_html(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_clean_text_is_unchanged() {
        assert_eq!(clean_html("Already clean"), "Already clean");
    }

    #[test]
    fn test_excerpt_truncates_with_ellipsis() {
        let long = "A".repeat(200);
        let excerpt = get_excerpt(&long, 150);
        assert_eq!(excerpt.chars().count(), 153);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_excerpt_short_text_has_no_ellipsis() {
        assert_eq!(get_excerpt("short", DEFAULT_EXCERPT_LENGTH), "short");
    }

    #[test]
    fn test_excerpt_cleans_before_measuring() {
        let html = format!("<p>{}</p>", "B".repeat(150));
        assert_eq!(get_excerpt(&html, 150), "B".repeat(150));
    }

    #[test]
    fn test_read_time_rounds_up() {
        let words = vec!["word"; 201].join(" ");
        assert_eq!(read_time(&words), 2);
        assert_eq!(read_time(&vec!["word"; 200].join(" ")), 1);
        assert_eq!(read_time(""), 1);
    }
}
