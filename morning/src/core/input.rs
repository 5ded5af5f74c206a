//! Normalization and parsing of typed answers.

use crate::core::types::Answer;

/// Strip every whitespace character and lowercase the rest.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `yes` / `no` after normalization; anything else is [`Answer::Invalid`].
pub fn parse_yes_no(text: &str) -> Answer {
    match normalize(text).as_str() {
        "yes" => Answer::Yes,
        "no" => Answer::No,
        _ => Answer::Invalid,
    }
}

/// Integer after normalization, or `None` when it does not parse.
pub fn parse_int(text: &str) -> Option<i64> {
    normalize(text).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_inner_whitespace() {
        assert_eq!(normalize("  Under wear\t"), "underwear");
    }

    #[test]
    fn yes_no_is_case_and_whitespace_insensitive() {
        assert_eq!(parse_yes_no("yes"), Answer::Yes);
        assert_eq!(parse_yes_no("YES  "), Answer::Yes);
        assert_eq!(parse_yes_no(" n O "), Answer::No);
    }

    #[test]
    fn yes_no_rejects_abbreviations() {
        assert_eq!(parse_yes_no("y"), Answer::Invalid);
        assert_eq!(parse_yes_no("nope"), Answer::Invalid);
        assert_eq!(parse_yes_no(""), Answer::Invalid);
    }

    #[test]
    fn parse_int_accepts_signed_numbers() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("4 2"), Some(42));
    }

    #[test]
    fn parse_int_rejects_text() {
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("1.5"), None);
    }
}
