use blockwalk::{
    condition::{
        evaluate, formatter::ConditionErrorFormatter, Comparison, ComparisonOperator,
        ConditionError,
    },
    expression::{formatter::PrettyFormatter, ExpressionErrorKind, Span, Variables},
};

fn variables(bindings: &[(&str, i32)]) -> Variables {
    bindings
        .iter()
        .map(|&(name, value)| (name.into(), value))
        .collect()
}

fn check(input: &str, bindings: &[(&str, i32)], expected: bool) {
    let actual = evaluate(input, &variables(bindings));
    assert_eq!(actual, Ok(expected), "Failed to evaluate `{input}`");
}

#[test]
fn test_each_operator() {
    check("x == 5", &[("x", 5)], true);
    check("x != 5", &[("x", 5)], false);
    check("x < 3", &[("x", 2)], true);
    check("x > 3", &[("x", 2)], false);
    check("x <= 3", &[("x", 3)], true);
    check("x >= 4", &[("x", 3)], false);
}

#[test]
fn test_two_character_operators_are_not_split() {
    check("x <= 3", &[("x", 3)], true);
    check("x>=3", &[("x", 3)], true);

    let comparison = Comparison::split("x >= 3").unwrap();
    assert_eq!(comparison.operator, ComparisonOperator::GreaterThanEqual);
}

#[test]
fn test_operands_are_expressions() {
    check("a > b + 2", &[("a", 10), ("b", 7)], true);
    check("(a + 1) * 2 == a * 2 + 2", &[("a", 4)], true);
    check("n % 2 != 0", &[("n", 7)], true);
}

#[test]
fn test_missing_operator() {
    let error = evaluate("x = 3", &variables(&[("x", 3)])).unwrap_err();
    assert_eq!(error, ConditionError::MissingOperator);
    assert_eq!(error.to_string(), "Invalid condition");
    assert_eq!(error.code(), "CD001");
}

#[test]
fn test_only_first_operator_is_used() {
    // The right-hand side `2 < 3` is not an expression.
    let error = evaluate("1 < 2 < 3", &Variables::new()).unwrap_err();
    assert_eq!(error.to_string(), "Unexpected character at position 2");
}

#[test]
fn test_expression_errors_propagate() {
    let error = evaluate("x / 0 > 1", &variables(&[("x", 1)])).unwrap_err();
    assert_eq!(error.to_string(), "Division by zero");

    let error = evaluate("1 <   missing", &Variables::new()).unwrap_err();
    let ConditionError::Expression(inner) = error else {
        panic!("Expected an expression error");
    };
    assert_eq!(inner.kind, ExpressionErrorKind::UnknownVariable("missing".into()));
    assert_eq!(inner.span, Span::new(6, 7));
}

#[test]
fn test_empty_side_is_an_error() {
    let error = evaluate("< 3", &Variables::new()).unwrap_err();
    assert_eq!(error.to_string(), "Unexpected end of expression");
}

#[test]
fn test_pretty_formatter_lists_operators() {
    let input = "x = 3";
    let error = evaluate(input, &Variables::new()).unwrap_err();
    let rendered = PrettyFormatter::new(input, "condition").format_condition_error(&error);
    assert!(rendered.contains("CD001"), "{rendered}");
}
