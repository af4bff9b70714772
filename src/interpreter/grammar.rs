use std::sync::LazyLock;

use crate::ast::Kind;

/// Precedence of a token kind. Higher binds tighter; `0` never continues an
/// expression.
pub type BindingPower = u8;

/// How a token starts an expression when nothing stands to its left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullDenotation {
    /// The token cannot start an expression.
    SyntaxError,
    /// The token is a complete expression on its own (literals, names).
    Leaf,
    /// Prefix operator: one operand parsed at the given binding power.
    Prefix(BindingPower),
    /// Parenthesized group: an inner expression followed by `)`.
    Group,
}

/// How a token extends the expression parsed to its left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftDenotation {
    /// The token has no infix behavior.
    UnknownOperator,
    /// Left-associative infix operator; the right side is parsed at the given
    /// binding power.
    Infix(BindingPower),
    /// Right-associative infix operator; the right side is parsed one below
    /// the given binding power.
    InfixRight(BindingPower),
    /// Call: comma-separated arguments followed by `)`.
    Call,
}

/// How a parsed node computes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// No evaluation rule.
    Unknown,
    /// The node's own literal value.
    Literal,
    /// An arithmetic operator applied to the node's operands.
    Binary(BinaryOperator),
    /// Function call.
    Call,
}

/// Arithmetic operators. `Add` and `Subtract` double as the unary plus and
/// minus when a node carries a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or identity with one operand.
    Add,
    /// Subtraction, or negation with one operand.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division. Division by zero follows IEEE 754.
    Divide,
    /// Floating-point remainder with the sign of the dividend.
    Remainder,
    /// Exponentiation.
    Power,
    /// 32-bit shift left.
    ShiftLeft,
    /// 32-bit arithmetic shift right.
    ShiftRight,
    /// 32-bit logical shift right.
    UnsignedShiftRight,
}

/// The registry entry for one token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// Left binding power.
    pub binding_power: BindingPower,
    /// Behavior at the start of an expression.
    pub nud:           NullDenotation,
    /// Behavior after a complete operand.
    pub led:           LeftDenotation,
    /// Evaluation rule.
    pub operation:     Operation,
}

impl Symbol {
    /// An entry with every rule left at its failing default.
    pub const UNDEFINED: Self = Self { binding_power: 0,
                                       nud:           NullDenotation::SyntaxError,
                                       led:           LeftDenotation::UnknownOperator,
                                       operation:     Operation::Unknown, };
}

/// The complete, immutable symbol table consulted by the parser and the
/// evaluator.
///
/// A grammar is assembled once with a [`GrammarBuilder`] and never changes
/// afterwards; parsers and evaluators borrow it, so one grammar can serve any
/// number of evaluations, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    symbols: [Symbol; Kind::COUNT],
}

static STANDARD: LazyLock<Grammar> = LazyLock::new(standard_grammar);

impl Grammar {
    /// Starts an empty grammar in which every kind is undefined.
    #[must_use]
    pub const fn builder() -> GrammarBuilder {
        GrammarBuilder { symbols: [Symbol::UNDEFINED; Kind::COUNT] }
    }

    /// The shared instance of [`standard_grammar`], built on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// The registry entry for `kind`.
    #[must_use]
    pub const fn symbol(&self, kind: Kind) -> &Symbol {
        &self.symbols[kind.index()]
    }

    /// Left binding power of `kind`.
    #[must_use]
    pub const fn binding_power(&self, kind: Kind) -> BindingPower {
        self.symbol(kind).binding_power
    }
}

/// Mutable registry used to assemble a [`Grammar`].
///
/// Later registrations for the same kind overwrite earlier ones; nothing is
/// ever removed.
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    symbols: [Symbol; Kind::COUNT],
}

impl GrammarBuilder {
    /// Creates or returns the entry for `kind`, setting its binding power.
    pub const fn register(&mut self, kind: Kind, binding_power: BindingPower) -> &mut Symbol {
        let symbol = &mut self.symbols[kind.index()];
        symbol.binding_power = binding_power;
        symbol
    }

    /// Makes `kind` a complete expression on its own.
    pub const fn leaf(&mut self, kind: Kind) -> &mut Self {
        self.symbols[kind.index()].nud = NullDenotation::Leaf;
        self
    }

    /// Makes `kind` a left-associative infix operator whose right operand is
    /// parsed at `binding_power`.
    pub const fn infix(&mut self, kind: Kind, binding_power: BindingPower) -> &mut Self {
        self.symbols[kind.index()].led = LeftDenotation::Infix(binding_power);
        self
    }

    /// Makes `kind` a right-associative infix operator whose right operand is
    /// parsed at `binding_power - 1`.
    pub const fn infix_right(&mut self, kind: Kind, binding_power: BindingPower) -> &mut Self {
        self.symbols[kind.index()].led = LeftDenotation::InfixRight(binding_power);
        self
    }

    /// Makes `kind` a prefix operator whose operand is parsed at
    /// `binding_power`.
    pub const fn prefix(&mut self, kind: Kind, binding_power: BindingPower) -> &mut Self {
        self.symbols[kind.index()].nud = NullDenotation::Prefix(binding_power);
        self
    }

    /// Makes `kind` open a parenthesized group.
    pub const fn group(&mut self, kind: Kind) -> &mut Self {
        self.symbols[kind.index()].nud = NullDenotation::Group;
        self
    }

    /// Makes `kind` open an argument list after a callee.
    pub const fn call(&mut self, kind: Kind) -> &mut Self {
        self.symbols[kind.index()].led = LeftDenotation::Call;
        self
    }

    /// Installs the evaluation rule of `kind`.
    pub const fn bind(&mut self, kind: Kind, operation: Operation) -> &mut Self {
        self.symbols[kind.index()].operation = operation;
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub const fn build(&self) -> Grammar {
        Grammar { symbols: self.symbols }
    }
}

/// Builds the arithmetic grammar.
///
/// | kinds            | binding power | role                               |
/// |------------------|---------------|------------------------------------|
/// | `<<` `>>` `>>>`  | 100           | infix                              |
/// | `+` `-`          | 110           | infix; prefix at 130               |
/// | `*` `/` `%`      | 120           | infix                              |
/// | `^`              | 130           | right-associative infix            |
/// | `(`              | 150           | group, or call after an operand    |
/// | everything else  | 0             |                                    |
///
/// # Example
/// ```
/// use matheval::{ast::Kind, interpreter::grammar::standard_grammar};
///
/// let grammar = standard_grammar();
/// assert!(grammar.binding_power(Kind::Star) > grammar.binding_power(Kind::Plus));
/// assert_eq!(grammar.binding_power(Kind::Comma), 0);
/// ```
///
/// `^` recurses one below its own binding power, so `2^3^2` is `2^(3^2)`.
/// Prefix `+ -` parse their operand at the same power, so `-2^2` is `(-2)^2`.
#[must_use]
pub fn standard_grammar() -> Grammar {
    let mut registry = Grammar::builder();

    registry.register(Kind::Literal, 0);
    registry.register(Kind::Name, 0);
    for kind in [Kind::ShiftLeft, Kind::ShiftRight, Kind::UnsignedShiftRight] {
        registry.register(kind, 100);
    }
    registry.register(Kind::Plus, 110);
    registry.register(Kind::Minus, 110);
    for kind in [Kind::Star, Kind::Slash, Kind::Percent] {
        registry.register(kind, 120);
    }
    registry.register(Kind::Caret, 130);
    registry.register(Kind::LeftParen, 150);
    for kind in [Kind::RightParen, Kind::Comma, Kind::End] {
        registry.register(kind, 0);
    }

    registry.leaf(Kind::Literal)
            .leaf(Kind::Name)
            .group(Kind::LeftParen)
            .call(Kind::LeftParen);

    registry.infix(Kind::ShiftLeft, 100)
            .infix(Kind::ShiftRight, 100)
            .infix(Kind::UnsignedShiftRight, 100)
            .infix(Kind::Plus, 110)
            .infix(Kind::Minus, 110)
            .infix(Kind::Star, 120)
            .infix(Kind::Slash, 120)
            .infix(Kind::Percent, 120)
            .infix_right(Kind::Caret, 130);

    registry.prefix(Kind::Plus, 130).prefix(Kind::Minus, 130);

    registry.bind(Kind::Literal, Operation::Literal)
            .bind(Kind::LeftParen, Operation::Call);
    for (kind, operator) in [(Kind::Plus, BinaryOperator::Add),
                             (Kind::Minus, BinaryOperator::Subtract),
                             (Kind::Star, BinaryOperator::Multiply),
                             (Kind::Slash, BinaryOperator::Divide),
                             (Kind::Percent, BinaryOperator::Remainder),
                             (Kind::Caret, BinaryOperator::Power),
                             (Kind::ShiftLeft, BinaryOperator::ShiftLeft),
                             (Kind::ShiftRight, BinaryOperator::ShiftRight),
                             (Kind::UnsignedShiftRight, BinaryOperator::UnsignedShiftRight)]
    {
        registry.bind(kind, Operation::Binary(operator));
    }

    registry.build()
}
