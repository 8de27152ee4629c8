/// Convert a string to a URL-friendly slug.
///
/// camelCase boundaries and runs of whitespace or hyphens become a single
/// hyphen, the string is lowercased, and every remaining character outside
/// `a-z`, `0-9`, and `-` is dropped. Leading and trailing hyphens are
/// stripped, so the result matches `^[a-z0-9]+(-[a-z0-9]+)*$` or is empty.
///
/// This is a total function: any input, including the empty string, produces
/// a (possibly empty) slug.
///
/// ```
/// use casewise::to_slug;
///
/// assert_eq!(to_slug("Hello World"), "hello-world");
/// assert_eq!(to_slug("camelCaseString"), "camel-case-string");
/// assert_eq!(to_slug("  Leading and trailing   "), "leading-and-trailing");
/// ```
pub fn to_slug(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut prev_was_lower = false;
    let mut pending_hyphen = false;

    for ch in input.chars() {
        // a lowercase letter directly followed by an uppercase one is a
        // camelCase boundary, checked against the original casing
        let boundary = ch.is_ascii_uppercase() && prev_was_lower;
        prev_was_lower = ch.is_ascii_lowercase();

        if ch == '-' || ch.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        if boundary {
            pending_hyphen = true;
        }

        for lowered in ch.to_lowercase() {
            if lowered.is_ascii_lowercase() || lowered.is_ascii_digit() {
                // one flush per run; nothing is flushed while the slug is
                // still empty, so hyphens never lead or trail
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(lowered);
            }
        }
    }

    slug
}
