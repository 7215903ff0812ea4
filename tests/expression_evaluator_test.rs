use proptest::prelude::*;

use blockwalk::expression::{
    evaluate,
    formatter::{BasicFormatter, ExpressionErrorFormatter, PrettyFormatter},
    ExpressionErrorKind, Span, Variables,
};

fn variables(bindings: &[(&str, i32)]) -> Variables {
    bindings
        .iter()
        .map(|&(name, value)| (name.into(), value))
        .collect()
}

fn check(input: &str, bindings: &[(&str, i32)], expected: i32) {
    let actual = evaluate(input, &variables(bindings));
    assert_eq!(actual, Ok(expected), "Failed to evaluate `{input}`");
}

fn check_error(input: &str, bindings: &[(&str, i32)], expected: &str) {
    let error = evaluate(input, &variables(bindings)).expect_err("Expected an error");
    assert_eq!(BasicFormatter.format_error(&error), expected, "Input `{input}`");
}

#[test]
fn smoke_test() {
    check("1", &[], 1);
}

#[test]
fn test_precedence() {
    check("(2 + 3) * 4 - 1", &[], 19);
    check("2 + 3 * 4", &[], 14);
    check("2 * (3 + 4) % 5", &[], 4);
    check("((1))", &[], 1);
}

#[test]
fn test_left_associativity() {
    check("10 - 4 - 3", &[], 3);
    check("100 / 10 / 5", &[], 2);
    check("17 % 10 % 4", &[], 3);
}

#[test]
fn test_truncating_division() {
    check("7 / 2", &[], 3);
    check("(0 - 7) / 2", &[], -3);
    check("(0 - 7) % 2", &[], -1);
    check("7 % (0 - 2)", &[], 1);
}

#[test]
fn test_variables() {
    check("a * (b + 2)", &[("a", 3), ("b", 4)], 18);
    check("foo_bar2 * 2", &[("foo_bar2", 4)], 8);
    check("_x-1", &[("_x", 10)], 9);
}

#[test]
fn test_whitespace_is_optional() {
    check("(2+3)*4-1", &[], 19);
    check("  ( 2 +3 )\t* 4 -1  ", &[], 19);
}

#[test]
fn test_wraparound() {
    check("2147483647 + 1", &[], i32::MIN);
    check("0 - 2147483647 - 2", &[], i32::MAX);
    check("65536 * 65536", &[], 0);
    check("2147483648", &[], i32::MIN);
    check("m / (0 - 1)", &[("m", i32::MIN)], i32::MIN);
    check("m % (0 - 1)", &[("m", i32::MIN)], 0);
}

#[test]
fn test_arithmetic_errors() {
    check_error("a / 0", &[("a", 5)], "Division by zero");
    check_error("a % 0", &[("a", 5)], "Modulo by zero");
    check_error("a / (b - b)", &[("a", 5), ("b", 1)], "Division by zero");
}

#[test]
fn test_syntax_errors() {
    check_error("-5", &[], "Unexpected character '-' at position 0");
    check_error("3 * -2", &[], "Unexpected character '-' at position 4");
    check_error("1 +", &[], "Unexpected end of expression");
    check_error("", &[], "Unexpected end of expression");
    check_error("(1 + 2", &[], "Missing closing parenthesis");
    check_error("1 2", &[], "Unexpected character at position 2");
    check_error("2 ^ 3", &[], "Unexpected character at position 2");
    check_error("1 + 2 )", &[], "Unexpected character at position 6");
}

#[test]
fn test_unknown_variable() {
    check_error("x + 1", &[], "Unknown variable 'x'");
    check_error("y", &[("x", 1)], "Unknown variable 'y'");
}

#[test]
fn test_error_spans() {
    let error = evaluate("a / (b - b)", &variables(&[("a", 1), ("b", 2)])).unwrap_err();
    assert_eq!(error.kind, ExpressionErrorKind::DivisionByZero);
    assert_eq!(error.span, Span::new(4, 7));

    let error = evaluate("1 + count", &Variables::new()).unwrap_err();
    assert_eq!(error.kind, ExpressionErrorKind::UnknownVariable("count".into()));
    assert_eq!(error.span, Span::new(4, 5));
    assert_eq!(error.code(), "EX005");
}

#[test]
fn test_pretty_formatter_reports_code_and_message() {
    let input = "a / 0";
    let error = evaluate(input, &variables(&[("a", 5)])).unwrap_err();
    let rendered = PrettyFormatter::new(input, "expression").format_error(&error);
    assert!(rendered.contains("EX006"), "{rendered}");
    assert!(rendered.contains("Division by zero"), "{rendered}");
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 0..3)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn literals_evaluate_to_themselves(n in 0..=i32::MAX) {
        prop_assert_eq!(evaluate(&n.to_string(), &Variables::new()), Ok(n));
    }

    #[test]
    fn binary_operators_wrap(a in any::<i32>(), b in any::<i32>(), op in 0usize..5) {
        let vars = variables(&[("a", a), ("b", b)]);
        let symbol = ["+", "-", "*", "/", "%"][op];
        let actual = evaluate(&format!("a {symbol} b"), &vars);
        let expected = match op {
            0 => Some(a.wrapping_add(b)),
            1 => Some(a.wrapping_sub(b)),
            2 => Some(a.wrapping_mul(b)),
            3 => a.checked_div(b).or_else(|| (b != 0).then(|| a.wrapping_div(b))),
            _ => a.checked_rem(b).or_else(|| (b != 0).then(|| a.wrapping_rem(b))),
        };
        match expected {
            Some(expected) => prop_assert_eq!(actual, Ok(expected)),
            None => prop_assert!(actual.is_err()),
        }
    }

    #[test]
    fn whitespace_between_tokens_is_ignored(
        a in 0..1000i32,
        b in 1..1000i32,
        gaps in prop::collection::vec(whitespace_strategy(), 8),
    ) {
        let (a_text, b_text) = (a.to_string(), b.to_string());
        let tokens: [&str; 7] = ["(", a_text.as_str(), "+", "x", ")", "%", b_text.as_str()];
        let mut input = String::new();
        for (token, gap) in tokens.iter().zip(gaps.iter()) {
            input.push_str(gap);
            input.push_str(token);
        }
        input.push_str(&gaps[7]);
        let vars = variables(&[("x", 7)]);
        prop_assert_eq!(evaluate(&input, &vars), Ok((a + 7) % b));
    }
}
