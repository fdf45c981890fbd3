/// The descending table of values and symbols used to format Roman
/// numerals. Subtractive pairs such as `CM` and `IV` are entries of their
/// own, so greedy subtraction can never emit a non-canonical repetition
/// like `DCCCC` or `IIII`.
const ROMAN_TABLE: [(i64, &str); 13] = [(1000, "M"),
                                        (900, "CM"),
                                        (500, "D"),
                                        (400, "CD"),
                                        (100, "C"),
                                        (90, "XC"),
                                        (50, "L"),
                                        (40, "XL"),
                                        (10, "X"),
                                        (9, "IX"),
                                        (5, "V"),
                                        (4, "IV"),
                                        (1, "I")];

/// Looks up the integer value of a single Roman digit.
///
/// Characters outside the Roman alphabet map to zero; callers validate
/// tokens before scanning them.
const fn digit_value(c: char) -> i64 {
    match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// Consumes one positional group from the front of a Roman token.
///
/// A group is the nine-form (e.g. `CM`), the four-form (e.g. `CD`), or an
/// optional five-symbol (e.g. `D`) followed by at most three unit symbols
/// (e.g. `C`). An absent group consumes nothing.
///
/// # Parameters
/// - `token`: The remaining suffix of the candidate numeral.
/// - `nine`: The subtractive nine-form of this group.
/// - `four`: The subtractive four-form of this group.
/// - `five`: The five-symbol of this group.
/// - `unit`: The unit symbol of this group.
///
/// # Returns
/// The suffix left after the group.
fn strip_group<'a>(token: &'a str, nine: &str, four: &str, five: char, unit: char) -> &'a str {
    if let Some(rest) = token.strip_prefix(nine) {
        return rest;
    }
    if let Some(rest) = token.strip_prefix(four) {
        return rest;
    }

    let mut rest = token.strip_prefix(five).unwrap_or(token);
    for _ in 0..3 {
        match rest.strip_prefix(unit) {
            Some(r) => rest = r,
            None => break,
        }
    }
    rest
}

/// Checks whether a token is a structurally valid Roman numeral.
///
/// Validity means conformance to the canonical ordered-group grammar:
/// thousands (`M{0,3}`), hundreds (`CM`, `CD` or `D?C{0,3}`), tens (`XC`,
/// `XL` or `L?X{0,3}`) and units (`IX`, `IV` or `V?I{0,3}`), concatenated
/// in that order with nothing left over. Non-canonical repetitions and
/// subtractive pairs (`IIII`, `VX`, `IC`) are rejected. The empty string is
/// rejected explicitly, since every group may legally contribute zero
/// characters.
///
/// # Parameters
/// - `token`: The candidate Roman numeral.
///
/// # Returns
/// `true` iff the token is in canonical form.
///
/// # Example
/// ```
/// use numera::interpreter::numeral::roman::is_valid_roman_structure;
///
/// assert!(is_valid_roman_structure("IV"));
/// assert!(is_valid_roman_structure("MMXXVI"));
/// assert!(!is_valid_roman_structure("IIII"));
/// assert!(!is_valid_roman_structure("VX"));
/// assert!(!is_valid_roman_structure(""));
/// ```
#[must_use]
pub fn is_valid_roman_structure(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let mut rest = token;
    for _ in 0..3 {
        match rest.strip_prefix('M') {
            Some(r) => rest = r,
            None => break,
        }
    }
    rest = strip_group(rest, "CM", "CD", 'D', 'C');
    rest = strip_group(rest, "XC", "XL", 'L', 'X');
    rest = strip_group(rest, "IX", "IV", 'V', 'I');

    rest.is_empty()
}

/// Converts a structurally valid Roman numeral to its integer value.
///
/// The token is scanned left to right while tracking the value of the
/// previous digit. A digit larger than its predecessor marks a subtractive
/// pair; the predecessor was already added as a plain digit on the prior
/// step, so the pair contributes `current - 2 * previous` to correct for
/// it. Otherwise the digit value is added directly.
///
/// Callers must validate the token with [`is_valid_roman_structure`]
/// first. The scan terminates for arbitrary strings, but only canonical
/// numerals produce a meaningful value.
///
/// # Parameters
/// - `token`: A canonical Roman numeral.
///
/// # Returns
/// The positive integer value of the numeral.
///
/// # Example
/// ```
/// use numera::interpreter::numeral::roman::roman_to_integer;
///
/// assert_eq!(roman_to_integer("III"), 3);
/// assert_eq!(roman_to_integer("IV"), 4);
/// assert_eq!(roman_to_integer("MCMXCIV"), 1994);
/// ```
#[must_use]
pub fn roman_to_integer(token: &str) -> i64 {
    let mut total = 0;
    let mut previous = 0;

    for c in token.chars() {
        let current = digit_value(c);
        if current > previous {
            total += current - 2 * previous;
        } else {
            total += current;
        }
        previous = current;
    }

    total
}

/// Formats a positive integer as a canonical Roman numeral.
///
/// Greedy subtraction against the descending value table: for each entry,
/// the symbol is appended while the remaining value still covers it.
///
/// `value` must be at least 1. Zero and negative values have no Roman
/// representation; the evaluator enforces this precondition, it is not
/// defended here.
///
/// # Parameters
/// - `value`: The integer to format, at least 1.
///
/// # Returns
/// The canonical Roman spelling of `value`.
///
/// # Example
/// ```
/// use numera::interpreter::numeral::roman::integer_to_roman;
///
/// assert_eq!(integer_to_roman(4), "IV");
/// assert_eq!(integer_to_roman(9), "IX");
/// assert_eq!(integer_to_roman(1994), "MCMXCIV");
/// ```
#[must_use]
pub fn integer_to_roman(mut value: i64) -> String {
    let mut numeral = String::new();

    for (step, symbol) in ROMAN_TABLE {
        while value >= step {
            numeral.push_str(symbol);
            value -= step;
        }
    }

    numeral
}
