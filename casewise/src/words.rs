//! Input validation and word splitting shared by the camelCase and dot.case
//! conversions.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;

/// Pattern for numeric literals: optional sign, digits with an optional
/// single decimal point, optional exponent.
static NUMERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Validate the input and split it into an ordered sequence of word tokens.
///
/// Words break at camelCase boundaries (a lowercase letter directly followed
/// by an uppercase one) and at runs of underscores, hyphens, or whitespace.
/// Every other non-alphanumeric character is stripped without starting a new
/// word. Tokens keep their original casing; see [`is_acronym`] for the
/// normalization applied when they are rendered.
pub(crate) fn split_words(input: &str) -> Result<Vec<String>, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::InvalidInput);
    }
    if NUMERIC_PATTERN.is_match(trimmed) {
        return Err(ConvertError::NumericInput);
    }

    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_was_lower = false;

    for ch in input.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            // separator → close the current word
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_was_lower = false;
        } else if ch.is_ascii_alphanumeric() {
            if ch.is_ascii_uppercase() && prev_was_lower && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(ch);
            prev_was_lower = ch.is_ascii_lowercase();
        } else {
            // stripped character: not a separator, but it does break the
            // lowercase/uppercase adjacency a camelCase boundary needs
            prev_was_lower = false;
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    if words.is_empty() {
        return Err(ConvertError::NoValidWords);
    }

    Ok(words)
}

/// Whether a token is an acronym: entirely ASCII uppercase letters and/or
/// digits. Acronym tokens are rendered fully lowercase.
pub(crate) fn is_acronym(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_boundaries_and_separators() {
        assert_eq!(split_words("fooBar").unwrap(), ["foo", "Bar"]);
        assert_eq!(split_words("user_id").unwrap(), ["user", "id"]);
        assert_eq!(split_words("mobile-number").unwrap(), ["mobile", "number"]);
        assert_eq!(split_words("first   name").unwrap(), ["first", "name"]);
        assert_eq!(split_words("_-  mixed__separators").unwrap(), ["mixed", "separators"]);
    }

    #[test]
    fn stripped_characters_do_not_split_words() {
        assert_eq!(split_words("foo@bar").unwrap(), ["foobar"]);
        // the '@' also breaks the camelCase adjacency, so no boundary either
        assert_eq!(split_words("foo@Bar").unwrap(), ["fooBar"]);
        assert_eq!(split_words("foo@ bar").unwrap(), ["foo", "bar"]);
    }

    #[test]
    fn consecutive_uppercase_stays_in_one_word() {
        assert_eq!(split_words("XMLHttpRequest").unwrap(), ["XMLHttp", "Request"]);
        assert_eq!(split_words("SCREEN_NAME").unwrap(), ["SCREEN", "NAME"]);
    }

    #[test]
    fn rejects_empty_and_whitespace_input() {
        assert_eq!(split_words(""), Err(ConvertError::InvalidInput));
        assert_eq!(split_words("   "), Err(ConvertError::InvalidInput));
        assert_eq!(split_words("\t\n"), Err(ConvertError::InvalidInput));
    }

    #[test]
    fn rejects_numeric_literals() {
        for input in ["123", "-42", "+7", "12.5", ".5", "5.", "1e9", "2.5E-3", " 12 "] {
            assert_eq!(split_words(input), Err(ConvertError::NumericInput), "{input:?}");
        }
    }

    #[test]
    fn loose_numeric_forms_are_not_numeric() {
        // accepted by loose coercion, rejected by the explicit grammar
        assert!(split_words("Infinity").is_ok());
        assert!(split_words("NaN").is_ok());
        assert!(split_words("0x1F").is_ok());
        assert!(split_words("12abc").is_ok());
    }

    #[test]
    fn rejects_inputs_with_no_words() {
        assert_eq!(split_words("!!!"), Err(ConvertError::NoValidWords));
        assert_eq!(split_words("@#$%"), Err(ConvertError::NoValidWords));
        assert_eq!(split_words("é ü"), Err(ConvertError::NoValidWords));
    }

    #[test]
    fn acronym_detection() {
        assert!(is_acronym("SCREEN"));
        assert!(is_acronym("HTTP2"));
        assert!(is_acronym("123"));
        assert!(!is_acronym("Screen"));
        assert!(!is_acronym("XMLHttp"));
        assert!(!is_acronym(""));
    }
}
