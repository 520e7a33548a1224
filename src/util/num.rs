/// Converts an evaluated repeat count into a number of iterations.
///
/// Zero and negative counts both mean "do nothing"; they are never an error.
///
/// ## Example
/// ```
/// use robotscript::util::num::repeat_count;
///
/// assert_eq!(repeat_count(4), 4);
/// assert_eq!(repeat_count(0), 0);
/// assert_eq!(repeat_count(-3), 0);
/// ```
#[must_use]
pub fn repeat_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

/// Returns `true` for text shaped like an integer: an optional `-` followed by
/// one or more ASCII digits.
///
/// Used to tell malformed literals such as `007` or `-0` (which the lexer does
/// not accept as numbers) apart from other unknown words.
///
/// ## Example
/// ```
/// use robotscript::util::num::looks_numeric;
///
/// assert!(looks_numeric("007"));
/// assert!(looks_numeric("-0"));
/// assert!(!looks_numeric("-"));
/// assert!(!looks_numeric("12ab"));
/// ```
#[must_use]
pub fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
