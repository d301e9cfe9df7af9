use once_cell::sync::Lazy;
use regex::Regex;

static SPECIAL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"["'@{}\[\]]"#).expect("special character pattern is valid")
});

/// Length in characters, not bytes, so Hangul text is measured the way a reader would.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn has_special_chars(text: &str) -> bool {
    SPECIAL_CHARS.is_match(text)
}
