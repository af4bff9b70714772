use std::f64::consts::{E, FRAC_PI_4, PI};

use matheval::{
    Evaluation,
    config::Options,
    evaluate, evaluate_with,
    interpreter::evaluator::function::core::{BUILTIN_FUNCTIONS, lookup, signatures},
};

fn assert_answer(src: &str, expected: f64) {
    let result = evaluate(src);
    assert!(result.success,
            "`{src}` failed: {}",
            result.message.unwrap_or_default());
    assert!((result.answer - expected).abs() <= 1e-12 * expected.abs().max(1.0),
            "`{src}` evaluated to {} but {expected} was expected",
            result.answer);
}

fn assert_failure(src: &str, message: &str) {
    let Evaluation { success, message: found, .. } = evaluate(src);
    assert!(!success, "`{src}` succeeded but was expected to fail");
    assert_eq!(found.as_deref(), Some(message), "wrong message for `{src}`");
}

#[test]
fn precedence_and_grouping() {
    assert_answer("2+3*4", 14.0);
    assert_answer("(2+3)*4", 20.0);
    assert_answer("10 - 4 - 3", 3.0);
    assert_answer("64 / 4 / 2", 8.0);
    assert_answer("2 * (3 + (4 - 1)) / 3", 4.0);
    assert_answer("7 % 3 * 2", 2.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_answer("2^3^2", 512.0);
    assert_answer("(2^3)^2", 64.0);
    assert_answer("2^-1", 0.5);
    assert_answer("2*3^2", 18.0);
}

#[test]
fn unary_operators() {
    assert_answer("-5", -5.0);
    assert_answer("+5", 5.0);
    assert_answer("--2", 2.0);
    assert_answer("2*-3", -6.0);
    assert_answer("-7 % 3", -1.0);
    assert_answer("1 - -1", 2.0);
    // Prefix minus binds as tightly as `^`, so it applies to the base.
    assert_answer("-2^2", 4.0);
}

#[test]
fn shift_operators() {
    assert_answer("1 << 4", 16.0);
    assert_answer("-16 >> 2", -4.0);
    assert_answer("-1 >>> 28", 15.0);
    assert_answer("1 << 2 + 1", 8.0);
    assert_answer("1 << 31", -2_147_483_648.0);
    assert_answer("5.9 << 1", 10.0);
    assert_answer("1 << 32", 1.0);
    assert_answer("256 >> 2 >> 1", 32.0);
}

#[test]
fn literals() {
    assert_answer("0xff", 255.0);
    assert_answer("0x10 + 1", 17.0);
    assert_answer("1.5e3", 1500.0);
    assert_answer(".5 + .25", 0.75);
    assert_answer("2e-1", 0.2);
    assert_answer("007", 7.0);
}

#[test]
fn constants_are_case_insensitive() {
    assert_answer("pi", PI);
    assert_answer("PI", PI);
    assert_answer("e", E);
    assert_eq!(evaluate("E"), evaluate("e"));
    assert_answer("2 * Pi", 2.0 * PI);
}

#[test]
fn builtin_functions() {
    assert_answer("sqrt(16)", 4.0);
    assert_answer("SQRT(16)", 4.0);
    assert_answer("sin(0)", 0.0);
    assert_answer("cos(0)", 1.0);
    assert_answer("tan(0)", 0.0);
    assert_answer("cot(pi / 4)", 1.0);
    assert_answer("asin(1)", PI / 2.0);
    assert_answer("acos(1)", 0.0);
    assert_answer("atan(1)", FRAC_PI_4);
    assert_answer("atan2(1, 1)", FRAC_PI_4);
    assert_answer("exp(0)", 1.0);
    assert_answer("log(e)", 1.0);
    assert_answer("floor(-1.5)", -2.0);
    assert_answer("ceil(1.2)", 2.0);
    assert_answer("round(2.5)", 3.0);
    assert_answer("round(-2.5)", -2.0);
    assert_answer("sqrt(sum(1, 3) * 6)", 6.0);
}

#[test]
fn sum_over_ranges() {
    assert_answer("sum(1,5)", 15.0);
    assert_answer("sum(1,10,2)", 25.0);
    assert_answer("sum(1, 3, 0)", 6.0);
    assert_answer("sum(1, 3, -2)", 6.0);
    assert_answer("sum(5, 1)", 0.0);
    assert_answer("sum(0, 1, 0.25)", 2.5);
}

#[test]
fn arguments_are_applied_positionally() {
    // Surplus arguments are ignored, missing ones read as NaN.
    assert_answer("sqrt(16, 99)", 4.0);
    assert_answer("sum(1)", 0.0);
    assert!(evaluate("sin()").answer.is_nan());
    assert!(evaluate("sin()").success);
}

#[test]
fn rand_stays_in_unit_interval() {
    for _ in 0..100 {
        let result = evaluate("rand()");
        assert!(result.success);
        assert!((0.0..1.0).contains(&result.answer));
    }
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(evaluate("1/0").answer, f64::INFINITY);
    assert_eq!(evaluate("-1/0").answer, f64::NEG_INFINITY);
    assert!(evaluate("0/0").answer.is_nan());
    assert!(evaluate("5 % 0").answer.is_nan());
}

#[test]
fn lexical_errors() {
    assert_failure("2 $ 3", "unrecognized syntax at `$ 3`");
    assert_failure("0b101", "unrecognized syntax at `0b101`");
    assert_failure("1 + 2 > 3", "unrecognized syntax at `> 3`");
    assert_failure("5.", "unrecognized syntax at `.`");
}

#[test]
fn syntax_errors() {
    assert_failure("1+", "syntax error near `(end)`");
    assert_failure("", "syntax error near `(end)`");
    assert_failure(")", "syntax error near `)`");
    assert_failure("* 2", "syntax error near `*`");
    assert_failure("sin(,)", "syntax error near `,`");
    assert_failure("(1 + 2", "expected ) near `(end)`");
    assert_failure("sin(1 2)", "expected ) near `(literal)`");
}

#[test]
fn trailing_input_is_rejected_by_default() {
    assert_failure("1 2", "unexpected `(literal)` after complete expression");
    assert_failure("1+2)", "unexpected `)` after complete expression");
    assert_failure("2 pi", "unexpected `(literal)` after complete expression");
}

#[test]
fn trailing_input_can_be_ignored() {
    let options = Options::permissive();
    assert_eq!(evaluate_with("1 2", &options).answer, 1.0);
    assert_eq!(evaluate_with("1+2)", &options).answer, 3.0);
    assert!(!evaluate_with("1+", &options).success);
}

#[test]
fn runtime_errors() {
    assert_failure("foo(1)", "unknown function `foo`");
    assert_failure("foo(1/x)", "unknown function `foo`");
    assert_failure("x", "unknown operation with `(name)`");
    assert_failure("sqrt(x) + 1", "unknown operation with `(name)`");
    assert_failure("(1)(2)", "unknown function `(literal 1)`");
}

#[test]
fn failed_evaluations_carry_no_answer() {
    let result = evaluate("foo(1)");
    assert_eq!(result.answer, 0.0);
    let result = evaluate("1 + 1");
    assert_eq!(result.message, None);
}

#[test]
fn every_listed_function_resolves() {
    for name in BUILTIN_FUNCTIONS {
        assert!(lookup(name).is_some(), "`{name}` is listed but not callable");
    }
    assert_eq!(signatures().count(), BUILTIN_FUNCTIONS.len());
    assert!(signatures().any(|signature| signature == "atan2(y, x)"));
}
