use matheval::{
    ast::{Kind, Node},
    config::Options,
    error::ParseError,
    interpreter::{
        evaluator::core::Evaluator,
        grammar::{BinaryOperator, Grammar, LeftDenotation, NullDenotation, Operation},
        lexer::tokenize,
        parser::core::parse,
    },
};
use pretty_assertions::assert_eq;

fn tree(src: &str) -> String {
    parse_in(Grammar::standard(), src).unwrap_or_else(|e| panic!("`{src}` failed to parse: {e}"))
                                      .to_string()
}

fn parse_in(grammar: &Grammar, src: &str) -> Result<Node, ParseError> {
    parse(grammar, tokenize(src)?, &Options::default())
}

#[test]
fn binding_powers_of_the_standard_grammar() {
    let grammar = Grammar::standard();
    let expected = [(Kind::ShiftLeft, 100),
                    (Kind::ShiftRight, 100),
                    (Kind::UnsignedShiftRight, 100),
                    (Kind::Plus, 110),
                    (Kind::Minus, 110),
                    (Kind::Star, 120),
                    (Kind::Slash, 120),
                    (Kind::Percent, 120),
                    (Kind::Caret, 130),
                    (Kind::LeftParen, 150),
                    (Kind::RightParen, 0),
                    (Kind::Comma, 0),
                    (Kind::End, 0),
                    (Kind::Literal, 0),
                    (Kind::Name, 0)];
    for (kind, binding_power) in expected {
        assert_eq!(grammar.binding_power(kind), binding_power, "binding power of {kind}");
    }
    assert_eq!(grammar.symbol(Kind::Caret).led, LeftDenotation::InfixRight(130));
    assert_eq!(grammar.symbol(Kind::Minus).nud, NullDenotation::Prefix(130));
    assert_eq!(grammar.symbol(Kind::Name).operation, Operation::Unknown);
}

#[test]
fn standard_grammar_is_built_once() {
    assert!(std::ptr::eq(Grammar::standard(), Grammar::standard()));
}

#[test]
fn infix_operators_associate_left() {
    assert_eq!(tree("1 - 2 - 3"), "(- (- (literal 1) (literal 2)) (literal 3))");
    assert_eq!(tree("8 >> 1 << 2"), "(<< (>> (literal 8) (literal 1)) (literal 2))");
}

#[test]
fn caret_associates_right() {
    assert_eq!(tree("2 ^ 3 ^ 2"), "(^ (literal 2) (^ (literal 3) (literal 2)))");
    assert_eq!(tree("-2 ^ 3 ^ 2"),
               "(^ (- (literal 2)) (^ (literal 3) (literal 2)))");
    assert_eq!(tree("2 ^ -1 * 4"), "(* (^ (literal 2) (- (literal 1))) (literal 4))");
    assert_eq!(tree("2 * 3 ^ 2"), "(* (literal 2) (^ (literal 3) (literal 2)))");
}

#[test]
fn prefix_operators_take_one_operand() {
    assert_eq!(tree("-1 + 2"), "(+ (- (literal 1)) (literal 2))");
    assert_eq!(tree("+-3"), "(+ (- (literal 3)))");
}

#[test]
fn groups_leave_no_trace_in_the_tree() {
    assert_eq!(tree("((1))"), "(literal 1)");
    assert_eq!(tree("(1 + 2) * 3"), "(* (+ (literal 1) (literal 2)) (literal 3))");
}

#[test]
fn calls_collect_arguments_in_order() {
    assert_eq!(tree("rand()"), "(call (name rand))");
    assert_eq!(tree("atan2(1, 2 + 3)"),
               "(call (name atan2) (literal 1) (+ (literal 2) (literal 3)))");
    assert_eq!(tree("sin(cos(0))"), "(call (name sin) (call (name cos) (literal 0)))");
    assert_eq!(tree("-sqrt(4)"), "(- (call (name sqrt) (literal 4)))");
}

#[test]
fn call_nodes_expose_callee_and_arguments() {
    let node = parse_in(Grammar::standard(), "sum(1, 2)").unwrap();
    assert_eq!(node.kind, Kind::LeftParen);
    assert_eq!(node.first().and_then(Node::as_name), Some("sum"));
    assert_eq!(node.arguments(), [Node::number(1.0), Node::number(2.0)]);
    assert_eq!(node.second(), None);
}

#[test]
fn a_symbol_without_left_denotation_is_an_unknown_operator() {
    let mut registry = Grammar::builder();
    registry.register(Kind::Literal, 10);
    registry.leaf(Kind::Literal);
    let grammar = registry.build();

    assert_eq!(parse_in(&grammar, "1 2"),
               Err(ParseError::UnknownOperator { kind: Kind::Literal }));
}

#[test]
fn later_registrations_overwrite_earlier_ones() {
    let mut registry = Grammar::builder();
    registry.register(Kind::Literal, 0);
    registry.leaf(Kind::Literal)
            .bind(Kind::Literal, Operation::Literal);
    registry.register(Kind::Caret, 130);
    registry.infix_right(Kind::Caret, 130)
            .bind(Kind::Caret, Operation::Binary(BinaryOperator::Power));
    let right = registry.build();

    let root = parse_in(&right, "2^3^2").unwrap();
    assert_eq!(root.to_string(), "(^ (literal 2) (^ (literal 3) (literal 2)))");
    assert_eq!(Evaluator::new(&right).eval(&root), Ok(512.0));

    registry.infix(Kind::Caret, 130);
    let left = registry.build();

    let root = parse_in(&left, "2^3^2").unwrap();
    assert_eq!(root.to_string(), "(^ (^ (literal 2) (literal 3)) (literal 2))");
    assert_eq!(Evaluator::new(&left).eval(&root), Ok(64.0));
}

#[test]
fn kinds_missing_from_a_grammar_cannot_start_expressions() {
    let grammar = Grammar::builder().build();
    assert_eq!(parse_in(&grammar, "1"),
               Err(ParseError::SyntaxError { kind: Kind::Literal }));
}

#[test]
fn every_kind_has_a_distinct_slot_and_symbol() {
    let grammar = Grammar::standard();
    for (position, kind) in Kind::ALL.into_iter().enumerate() {
        assert_eq!(kind.index(), position, "slot of {kind}");
        let clashes = Kind::ALL.iter().filter(|other| other.symbol() == kind.symbol()).count();
        assert_eq!(clashes, 1, "symbol of {kind} is shared");
        assert_eq!(grammar.symbol(kind).binding_power, grammar.binding_power(kind));
    }
    let starters: Vec<Kind> = Kind::ALL.into_iter()
                                       .filter(|&kind| {
                                           grammar.symbol(kind).nud != NullDenotation::SyntaxError
                                       })
                                       .collect();
    assert_eq!(starters, [Kind::Literal, Kind::Name, Kind::Plus, Kind::Minus, Kind::LeftParen]);
}
