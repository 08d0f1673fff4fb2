// ABOUTME: Whole-program tests: grammar -> reader -> evaluator -> printed result.

use lithp::env::Environment;
use lithp::grammar::Grammar;
use lithp::{builtins, eval, grammar, reader};
use std::rc::Rc;

fn global_env() -> Rc<Environment> {
    let env = Environment::new();
    builtins::register_builtins(&env);
    env
}

fn test_grammar() -> Grammar {
    let dir = std::env::temp_dir().join(format!("lithp-integration-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("grammar.txt");
    std::fs::write(&path, include_str!("../grammar.txt")).unwrap();
    let result = Grammar::load(&path).expect("grammar.txt loads");
    let _ = std::fs::remove_dir_all(&dir);
    result
}

fn eval_str(code: &str) -> String {
    let grammar = test_grammar();
    let env = global_env();
    let node = grammar::parse(&grammar, code).expect("parses");
    let value = reader::read(&node);
    eval::eval(value, &env).to_string()
}

fn eval_in(code: &str, grammar: &Grammar, env: &Rc<Environment>) -> String {
    let node = grammar::parse(grammar, code).expect("parses");
    let value = reader::read(&node);
    eval::eval(value, env).to_string()
}

#[test]
fn adds_several_operands() {
    assert_eq!(eval_str("+ 1 2 3"), "6");
}

#[test]
fn subtraction_is_parenthesized_and_folds_left() {
    assert_eq!(eval_str("(- 10 3 2)"), "5");
}

#[test]
fn single_operand_subtraction_negates() {
    assert_eq!(eval_str("- 5"), "-5");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(eval_str("/ 10 0"), "Error: cannot divide by zero");
}

#[test]
fn head_of_qexpr() {
    assert_eq!(eval_str("head {1 2 3}"), "{1}");
}

#[test]
fn eval_of_tail_of_tail_is_equivalent_to_evaluating_the_sexpr() {
    assert_eq!(eval_str("eval (tail {tail tail {1 2 3}})"), "{2 3}");
}

#[test]
fn def_binds_globally_and_returns_unit() {
    let grammar = test_grammar();
    let env = global_env();
    assert_eq!(eval_in("def {x y} 10 20", &grammar, &env), "()");
    assert_eq!(eval_in("+ x y", &grammar, &env), "30");
}

#[test]
fn lambda_definition_and_call() {
    let grammar = test_grammar();
    let env = global_env();
    assert_eq!(eval_in("def {f} (\\ {a b} {+ a b})", &grammar, &env), "()");
    assert_eq!(eval_in("f 3 4", &grammar, &env), "7");
}

#[test]
fn unbound_symbol_is_an_error() {
    assert_eq!(eval_str("foo"), "Error: Unbound symbol 'foo'!");
}

#[test]
fn type_error_names_function_expected_type_and_index() {
    assert_eq!(
        eval_str("+ 1 {2}"),
        "Error: Function '+' expects a Number but got a Q-Expression at index 1 instead."
    );
}

#[test]
fn partial_application_across_two_statements() {
    let grammar = test_grammar();
    let env = global_env();
    assert_eq!(eval_in("def {add} (\\ {a b} {+ a b})", &grammar, &env), "()");
    assert_eq!(eval_in("def {add5} (add 5)", &grammar, &env), "()");
    assert_eq!(eval_in("add5 10", &grammar, &env), "15");
}

#[test]
fn local_definition_does_not_escape_its_call_frame() {
    let grammar = test_grammar();
    let env = global_env();
    assert_eq!(
        eval_in("def {scoped} (\\ {} {= {x} 1})", &grammar, &env),
        "()"
    );
    assert_eq!(eval_in("scoped", &grammar, &env), "()");
    assert_eq!(eval_in("x", &grammar, &env), "Error: Unbound symbol 'x'!");
}

#[test]
fn variadic_rest_binder_collects_extra_arguments() {
    let grammar = test_grammar();
    let env = global_env();
    assert_eq!(
        eval_in("def {f} (\\ {a & rest} {rest})", &grammar, &env),
        "()"
    );
    assert_eq!(eval_in("f 1 2 3", &grammar, &env), "{2 3}");
}

#[test]
fn cons_join_len_round_trip() {
    assert_eq!(eval_str("cons 1 (list 2 3)"), "{1 2 3}");
    assert_eq!(eval_str("join {1} {2} {3}"), "{1 2 3}");
    assert_eq!(eval_str("len {1 2 3 4}"), "4");
}

#[test]
fn qexpr_printing_round_trips_through_the_reader() {
    let printed = eval_str("list 1 2 3");
    assert_eq!(printed, "{1 2 3}");
    assert_eq!(eval_str(&format!("len {}", printed)), "3");
}

#[test]
fn error_short_circuits_sibling_evaluation() {
    assert_eq!(eval_str("+ 1 (foo) (/ 1 0)"), "Error: Unbound symbol 'foo'!");
}

#[test]
fn calling_a_non_function_is_a_structure_error() {
    assert_eq!(eval_str("1 2"), "Error: first element is not a function");
}
