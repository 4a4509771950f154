use std::{fs, path::Path};

use mexpr::{
    error::{Error, LexError, ParseError, RuntimeError},
    get_result, get_result_with_config,
    interpreter::{
        environment::Environment, evaluator::core::{EvalConfig, evaluate}, lexer::tokenize,
        parser::parse, value::core::Value,
    },
    render_result,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use walkdir::WalkDir;

#[test]
fn scripts_produce_their_expected_output() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "m"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_output(&source).unwrap_or_else(|| {
                                                   panic!("{path:?} has no leading 'expect: ...' comment")
                                               });

        count += 1;
        match get_result(&source) {
            Ok(value) => assert_eq!(render_result(&value), expected, "script {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in {root:?}");
}

/// Reads the expected output from a leading `'expect: ...'` comment.
fn expected_output(source: &str) -> Option<String> {
    let rest = source.trim_start().strip_prefix("'expect:")?;
    let end = rest.find('\'')?;
    Some(rest[..end].trim().to_string())
}

fn eval(src: &str) -> Value {
    get_result(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_success(src: &str, expected: i64) {
    assert_eq!(eval(src), Value::Integer(expected), "script: {src}");
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

#[test]
fn function_definition_and_call() {
    assert_success("f(x,y)=x+y f(2,3)", 5);
    assert_success("f(x, y) = x + y\nf(2, 3)", 5);
}

#[test]
fn wrong_arity_is_an_error() {
    assert_eq!(assert_failure("f(x,y)=x+y f(1)"),
               Error::Runtime(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                                    found:    1,
                                                                    line:     1, }));
}

#[test]
fn recursion_sees_its_own_name() {
    let fact = "fact(n) = [1, n * fact(n - 1)][n > 0]\n";
    assert_success(&format!("{fact}fact(0)"), 1);
    assert_success(&format!("{fact}fact(4)"), 24);
    assert_success(&format!("{fact}fact(20)"), 2_432_902_008_176_640_000);
}

#[test]
fn strict_recursion_without_a_base_case_hits_the_call_limit() {
    let source = "fact(n)=(n<1)+(n>0)*n*fact(n-1) fact(0)";
    let config = EvalConfig { max_call_depth: 200 };

    assert!(matches!(get_result_with_config(source, &config),
                     Err(Error::Runtime(RuntimeError::RecursionLimit { limit: 200, .. }))));
}

#[test]
fn free_variables_are_lexically_scoped() {
    assert_success("x() = 5\ng() = x()\nh(x) = g()\nh(9)", 5);
    assert_success("k() = 1 f(k) = k f(2)", 2);
}

#[test]
fn vector_indexing() {
    assert_success("[1,2,3][1]", 2);
    assert_success("v() = [10, 20, 30] v()[2]", 30);
    assert_success("[[1, 2], [3, 4]][1][0]", 3);

    assert!(matches!(assert_failure("[1,2,3][5]"),
                     Error::Runtime(RuntimeError::IndexOutOfBounds { index: 5,
                                                                     len: 3,
                                                                     .. })));
    assert!(matches!(assert_failure("7[0]"),
                     Error::Runtime(RuntimeError::NotIndexable { .. })));
}

#[test]
fn literal_vector_indexing_only_evaluates_the_selected_element() {
    assert_success("[1, 1 / 0][0]", 1);
    assert_success("[undefined, 2][1]", 2);
    assert!(matches!(assert_failure("v() = [1, 1 / 0] v()[0]"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("[1, 2][2]"),
                     Error::Runtime(RuntimeError::IndexOutOfBounds { .. })));
}

#[test]
fn comments_are_skipped() {
    assert_eq!(tokenize("'this is ignored'5"), tokenize("5"));
    assert_success("'this is ignored'5", 5);
    assert_success("1 + 'inline' 2", 3);
}

#[test]
fn bitwise_tests_never_short_circuit() {
    assert_success("3 & 0", 0);
    assert_success("3 | 0", 1);
    assert_success("2 & 1", 0);
    assert_success("! | ?", 1);

    assert!(matches!(assert_failure("0 & undefined"),
                     Error::Runtime(RuntimeError::UnknownIdentifier { .. })));
    assert!(matches!(assert_failure("1 | 1 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn precedence_and_comparisons() {
    assert_success("1 + 2 * 3", 7);
    assert_success("(1 + 2) * 3", 9);
    assert_success("10 - 3 - 2", 5);
    assert_success("1 + 1 ^ 2", 1);
    assert_success("3 > 2 ^ 2 < 3", 1);
    assert_success("--5", 5);
}

#[test]
fn long_operator_chains_run_without_exhausting_the_stack() {
    let source = vec!["1"; 300_000].join("+");
    assert_success(&source, 300_000);
}

#[test]
fn deeply_nested_negation_runs_without_exhausting_the_stack() {
    assert_success(&format!("{}1", "-".repeat(200_000)), 1);
    assert_success(&format!("{}7", "-".repeat(200_001)), -7);
}

#[test]
fn higher_order_functions() {
    assert_success("inc(x) = x + 1 apply(f, x) = f(x) apply(inc, 41)", 42);
    assert_success("inc(x) = x + 1 fs() = [inc] fs()[0](1)", 2);
}

#[test]
fn errors_are_classified_by_stage() {
    assert_eq!(assert_failure("1 $ 2"),
               Error::Lex(LexError::UnexpectedCharacter { character: '$',
                                                          line:      1, }));
    assert!(matches!(assert_failure("(1 + 2"), Error::Parse(_)));
    assert!(matches!(assert_failure("f(1) = 2"),
                     Error::Parse(ParseError::InvalidParameter { .. })));
    assert!(matches!(assert_failure("undefined"), Error::Runtime(_)));
}

#[test]
fn error_messages_name_the_stage_and_line() {
    let message = assert_failure("1\n2 / 0").to_string();
    assert_eq!(message, "Evaluation error on line 2: Division by zero.");

    assert_eq!(assert_failure("1 $ 2").to_string(),
               "Lex error on line 1: Unexpected character '$'.");
    assert_eq!(assert_failure("(1 + 2").to_string(),
               "Parse error on line 1: Unexpected end of input, expected ')'.");
}

#[test]
fn rendering() {
    assert_eq!(render_result(&eval("42")), "42");
    assert_eq!(render_result(&eval("-3")), "-3");
    assert_eq!(render_result(&eval("[1, 2, 3]")), "1 2 3");
    assert_eq!(render_result(&eval("v(f) = [1, f, [2], 3] g() = 0 v(g)")), "1 3");
    assert_eq!(render_result(&eval("[]")), "");
    assert_eq!(render_result(&eval("f(a, b) = a")), "<function f(a, b)>");
}

#[test]
fn evaluation_is_repeatable_on_fresh_environments() {
    let source = "fib(n) = [n, fib(n - 1) + fib(n - 2)][n > 1]\n\
                  pair() = [fib(10), [3, 1 / 1][1]]\n\
                  pair()";
    let program = parse(&tokenize(source).unwrap()).unwrap();

    let first = evaluate(&program, &Environment::root()).unwrap();
    let second = evaluate(&program, &Environment::root()).unwrap();
    assert_eq!(first, second);
    assert_eq!(render_result(&first), "55 1");
}

proptest! {
    #[test]
    fn integer_literals_evaluate_to_themselves(n in 0..=i64::MAX) {
        prop_assert_eq!(get_result(&n.to_string()), Ok(Value::Integer(n)));
    }

    #[test]
    fn negated_literals_evaluate_to_their_negation(n in 0..=i64::MAX) {
        prop_assert_eq!(get_result(&format!("-{n}")), Ok(Value::Integer(-n)));
    }

    #[test]
    fn addition_matches_checked_arithmetic(a in any::<i32>(), b in any::<i32>()) {
        let source = format!("add(x, y) = x + y add({a}, {b})");
        let expected = i64::from(a) + i64::from(b);
        prop_assert_eq!(get_result(&source), Ok(Value::Integer(expected)));
    }
}
