use crate::error::ConvertError;
use crate::words::{is_acronym, split_words};

/// Convert a string to camelCase.
///
/// The input is split into words at camelCase boundaries and at underscores,
/// hyphens, and whitespace. The first word starts lowercase, every later
/// word starts uppercase, and acronym words (all uppercase and/or digits)
/// are lowercased before those rules apply. Other words keep their internal
/// casing.
///
/// ```
/// use casewise::to_camel_case;
///
/// assert_eq!(to_camel_case("first name").unwrap(), "firstName");
/// assert_eq!(to_camel_case("user_id").unwrap(), "userId");
/// assert_eq!(to_camel_case("SCREEN_NAME").unwrap(), "screenName");
/// assert_eq!(to_camel_case("mobile-number").unwrap(), "mobileNumber");
/// ```
///
/// # Errors
///
/// Fails with [`ConvertError::InvalidInput`] for empty or whitespace-only
/// input, [`ConvertError::NumericInput`] for numeric literals, and
/// [`ConvertError::NoValidWords`] when cleaning leaves no words.
pub fn to_camel_case(input: &str) -> Result<String, ConvertError> {
    let words = split_words(input)?;

    let mut out = String::with_capacity(input.len());
    for (idx, word) in words.into_iter().enumerate() {
        let word = if is_acronym(&word) { word.to_ascii_lowercase() } else { word };

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if idx == 0 {
                out.push(first.to_ascii_lowercase());
            } else {
                out.push(first.to_ascii_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }

    Ok(out)
}

/// Convert a string to dot.case.
///
/// Splits like [`to_camel_case`], then renders every word fully lowercase
/// and joins them with `.`.
///
/// ```
/// use casewise::to_dot_case;
///
/// assert_eq!(to_dot_case("first name").unwrap(), "first.name");
/// assert_eq!(to_dot_case("SCREEN_NAME").unwrap(), "screen.name");
/// assert_eq!(to_dot_case("mobileNumber").unwrap(), "mobile.number");
/// ```
///
/// # Errors
///
/// Same failure modes as [`to_camel_case`].
pub fn to_dot_case(input: &str) -> Result<String, ConvertError> {
    let words = split_words(input)?;

    Ok(words
        .iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("."))
}
