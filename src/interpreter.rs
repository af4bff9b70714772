/// The evaluator module computes the value of parsed trees.
///
/// The evaluator walks the tree produced by the parser, looks up each node's
/// evaluation rule in the grammar and recurses into the operands. Calls are
/// resolved against the fixed table of built-in functions.
///
/// # Responsibilities
/// - Applies arithmetic and shift operators to evaluated operands.
/// - Resolves and applies built-in functions.
/// - Reports nodes without an evaluation rule and unknown functions.
pub mod evaluator;
/// The grammar module is the symbol registry shared by parser and evaluator.
///
/// It maps every token kind to its binding power, its null and left
/// denotations, and its evaluation rule. The table is assembled once by a
/// builder and is read-only afterwards.
///
/// # Responsibilities
/// - Declares the rule tags the parser and evaluator dispatch on.
/// - Provides a builder with `register`, `infix`, `infix_right`, `prefix` and
///   `bind` style registration.
/// - Builds the standard arithmetic grammar.
pub mod grammar;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads the raw text and produces the sequence of tokens the
/// parser consumes: numbers, names, operators, brackets and separators,
/// followed by an end-of-input marker.
///
/// # Responsibilities
/// - Recognizes decimal, floating-point and hexadecimal literals and the
///   constants `e` and `pi`.
/// - Skips whitespace.
/// - Reports text that matches no rule.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser is a top-down operator precedence (Pratt) parser: which
/// operator binds to which operand is decided purely by the binding powers
/// recorded in the grammar, not by a fixed hierarchy of parsing functions.
///
/// # Responsibilities
/// - Runs the binding-power loop over the token stream.
/// - Parses prefix operators, infix operators, groups and call arguments.
/// - Reports tokens that cannot start or continue an expression, missing
///   brackets and trailing input.
pub mod parser;
