/// The classify module decides which numeral system a token belongs to.
///
/// Classification is liberal by design: an Arabic token is anything that
/// parses as a base-10 integer, and a Roman token is any run of Roman
/// characters, canonical or not. Structural validity is checked separately,
/// and only for operands that classified as Roman.
///
/// # Responsibilities
/// - Defines the [`NumeralSystem`](classify::NumeralSystem) enumeration.
/// - Provides the per-system membership checks.
/// - Resolves a token to at most one numeral system.
pub mod classify;
/// The roman module converts between Roman numerals and integers.
///
/// Conversion is bidirectional and strict: only numerals in canonical
/// ordered-group form are accepted, and formatting always produces the
/// canonical spelling.
///
/// # Responsibilities
/// - Validates canonical Roman structure.
/// - Converts a validated Roman numeral to its integer value.
/// - Formats a positive integer as a canonical Roman numeral.
pub mod roman;
