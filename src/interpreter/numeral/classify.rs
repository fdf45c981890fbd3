/// Identifies the numeral system a token is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    /// Standard base-10 digit representation, e.g. `7`.
    Arabic,
    /// Letter-based representation using `I V X L C D M`, e.g. `VII`.
    Roman,
}

/// Checks whether a token reads as an Arabic numeral.
///
/// True iff the token parses as a base-10 `i64`, sign included per standard
/// integer parsing. No range check happens here; the evaluator enforces the
/// 1–10 window later.
///
/// # Example
/// ```
/// use numera::interpreter::numeral::classify::is_arabic_numeral;
///
/// assert!(is_arabic_numeral("7"));
/// assert!(is_arabic_numeral("-7"));
/// assert!(!is_arabic_numeral("VII"));
///
/// // Parsing fails for values that overflow i64.
/// assert!(!is_arabic_numeral("99999999999999999999"));
/// ```
#[must_use]
pub fn is_arabic_numeral(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

/// Checks whether a token reads as a Roman numeral.
///
/// This is the liberal character-set check: one or more characters from the
/// full Roman alphabet `I V X L C D M`. Whether the token is a well-formed
/// numeral ("IV" yes, "IIII" no) is a separate, stricter question answered
/// by the Roman converter's structural validation.
///
/// # Example
/// ```
/// use numera::interpreter::numeral::classify::is_roman_numeral;
///
/// assert!(is_roman_numeral("VII"));
/// assert!(is_roman_numeral("IIII")); // liberal: structure is not checked
/// assert!(!is_roman_numeral("7"));
/// assert!(!is_roman_numeral(""));
/// ```
#[must_use]
pub fn is_roman_numeral(token: &str) -> bool {
    !token.is_empty()
    && token.chars()
            .all(|c| matches!(c, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'))
}

/// Classifies a token into a numeral system.
///
/// Returns `Some` only when exactly one of the liberal checks accepts the
/// token. `None` covers tokens satisfying neither check, such as an Arabic
/// literal too large for `i64`. A token satisfying both checks would also
/// resolve to `None`, though no such token exists for this grammar: Arabic
/// tokens are all digits and Roman tokens are all letters.
///
/// # Example
/// ```
/// use numera::interpreter::numeral::classify::{NumeralSystem, classify};
///
/// assert_eq!(classify("7"), Some(NumeralSystem::Arabic));
/// assert_eq!(classify("VII"), Some(NumeralSystem::Roman));
/// assert_eq!(classify("7VII"), None);
/// ```
#[must_use]
pub fn classify(token: &str) -> Option<NumeralSystem> {
    match (is_arabic_numeral(token), is_roman_numeral(token)) {
        (true, false) => Some(NumeralSystem::Arabic),
        (false, true) => Some(NumeralSystem::Roman),
        _ => None,
    }
}
