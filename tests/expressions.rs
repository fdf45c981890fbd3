use numera::{
    ast::BinaryOperator,
    evaluate,
    interpreter::numeral::roman::{integer_to_roman, roman_to_integer},
};

fn assert_result(input: &str, expected: &str) {
    match evaluate(input) {
        Ok(result) => assert_eq!(result, expected, "wrong result for {input:?}"),
        Err(e) => panic!("Expression {input:?} failed: {e}"),
    }
}

fn assert_failure(input: &str, fragment: &str) {
    match evaluate(input) {
        Ok(result) => {
            panic!("Expression {input:?} succeeded with {result:?} but was expected to fail")
        },
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(fragment),
                    "Expression {input:?} failed with {message:?}, expected a message containing {fragment:?}");
        },
    }
}

#[test]
fn arabic_arithmetic() {
    assert_result("3 + 4", "7");
    assert_result("10 - 1", "9");
    assert_result("2 * 5", "10");
    assert_result("10 / 3", "3");
    assert_result("10 * 10", "100");
}

#[test]
fn arabic_results_may_be_zero_or_negative() {
    assert_result("1 - 5", "-4");
    assert_result("5 - 5", "0");
    assert_result("3 / 10", "0");
}

#[test]
fn roman_arithmetic() {
    assert_result("III + II", "V");
    assert_result("X - IX", "I");
    assert_result("III * III", "IX");
    assert_result("X * X", "C");
    assert_result("VII / II", "III");
}

#[test]
fn whitespace_around_the_operator_is_optional() {
    assert_result("3+4", "7");
    assert_result("III+II", "V");
    assert_result("3   *    4", "12");
}

#[test]
fn mixed_numeral_systems_are_rejected() {
    assert_failure("1 + I", "same numeral system");
    assert_failure("X - 2", "same numeral system");
}

#[test]
fn operands_outside_one_to_ten_are_rejected() {
    assert_failure("11 + 1", "between 1 and 10");
    assert_failure("0 + 5", "between 1 and 10");
    assert_failure("XI + I", "between 1 and 10");
    // The range check precedes division, so a zero divisor is caught as an
    // out-of-range operand rather than as division by zero.
    assert_failure("1 / 0", "between 1 and 10");
}

#[test]
fn an_operand_overflowing_i64_classifies_as_no_system() {
    assert_failure("99999999999999999999 + 1", "same numeral system");
}

#[test]
fn malformed_roman_numerals_are_rejected_after_parsing() {
    assert_failure("IIII + I", "not a valid Roman numeral");
    assert_failure("IVX + I", "not a valid Roman numeral");
    // Every character of "VX" is in the lexical operand class, so the token
    // parses and must be rejected by structural validation, not the parser.
    assert_failure("VX + I", "not a valid Roman numeral");
}

#[test]
fn operands_outside_the_lexical_class_fail_to_parse() {
    // 'L' and 'C' are Roman characters, but not part of the operand token
    // class, so these die in the lexer before any Roman validation runs.
    assert_failure("L + I", "unexpected token");
    assert_failure("C + I", "unexpected token");
    assert_failure("hello", "unexpected token");
}

#[test]
fn incomplete_or_overlong_expressions_fail_to_parse() {
    assert_failure("", "unexpected end of input");
    assert_failure("7", "unexpected end of input");
    assert_failure("7 +", "unexpected end of input");
    assert_failure("+ 7 2", "unexpected token");
    assert_failure("1 + 2 + 3", "extra tokens");
    assert_failure("1 ^ 2", "unexpected token");
}

#[test]
fn negative_roman_results_are_rejected() {
    assert_failure("I - II", "cannot represent non-positive");
    assert_failure("V - V", "cannot represent non-positive");
}

#[test]
fn roman_division_truncating_to_zero_is_rejected() {
    assert_failure("III / X", "greater than zero");
}

#[test]
fn roman_round_trip_holds_for_the_operand_range() {
    for value in 1..=10 {
        let numeral = integer_to_roman(value);
        assert_eq!(roman_to_integer(&numeral), value, "round trip failed for {value}");
    }
}

#[test]
fn numeral_systems_agree_on_every_in_range_computation() {
    use BinaryOperator::{Add, Div, Mul, Sub};

    for a in 1..=10 {
        for b in 1..=10 {
            for op in [Add, Sub, Mul, Div] {
                let arabic = evaluate(&format!("{a} {op} {b}")).unwrap_or_else(|e| {
                                 panic!("Arabic form of {a} {op} {b} failed: {e}")
                             });
                let result: i64 = arabic.parse().expect("Arabic result is an integer");

                let roman = evaluate(&format!("{} {op} {}",
                                              integer_to_roman(a),
                                              integer_to_roman(b)));

                if result < 1 {
                    assert!(roman.is_err(),
                            "Roman form of {a} {op} {b} must fail for result {result}");
                } else {
                    match roman {
                        Ok(numeral) => {
                            assert_eq!(numeral,
                                       integer_to_roman(result),
                                       "numeral systems disagree on {a} {op} {b}");
                        },
                        Err(e) => panic!("Roman form of {a} {op} {b} failed: {e}"),
                    }
                }
            }
        }
    }
}
