use std::fmt;

/// Identifies what a token (and the tree node built from it) is.
///
/// The lexer produces one token per lexeme, tagged with its `Kind`; the parser
/// reuses the very same [`Node`] values as tree nodes, filling in their child
/// slots. Every grammatical property of a kind (binding power, how it starts
/// or extends an expression, how it evaluates) lives in the
/// [`Grammar`](crate::interpreter::grammar::Grammar), never on the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A numeric literal, including the constants `e` and `pi`.
    Literal,
    /// An identifier such as `sin`.
    Name,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `>>>`
    UnsignedShiftRight,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// End of input. Always the last token of a stream.
    End,
}

impl Kind {
    /// Number of distinct kinds.
    pub const COUNT: usize = 15;

    /// Every kind, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [Self::Literal,
                                          Self::Name,
                                          Self::Plus,
                                          Self::Minus,
                                          Self::Star,
                                          Self::Slash,
                                          Self::Percent,
                                          Self::Caret,
                                          Self::ShiftLeft,
                                          Self::ShiftRight,
                                          Self::UnsignedShiftRight,
                                          Self::LeftParen,
                                          Self::RightParen,
                                          Self::Comma,
                                          Self::End];

    /// Position of this kind in [`Kind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The symbol used for this kind in diagnostics and tree dumps.
    ///
    /// # Example
    /// ```
    /// use matheval::ast::Kind;
    ///
    /// assert_eq!(Kind::UnsignedShiftRight.symbol(), ">>>");
    /// assert_eq!(Kind::End.symbol(), "(end)");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Literal => "(literal)",
            Self::Name => "(name)",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::UnsignedShiftRight => ">>>",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::End => "(end)",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Scalar data carried by a leaf token.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Operators, brackets, separators and the end marker carry nothing.
    None,
    /// The value of a literal.
    Number(f64),
    /// The identifier of a name.
    Name(String),
}

/// Child slots of a node.
///
/// A freshly lexed token has no children. Parsing attaches either one operand
/// (prefix operators), two operands (infix operators) or a callee with an
/// ordered argument list (calls).
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    /// Leaf: literals, names and every token that has not been parsed yet.
    None,
    /// Prefix application, e.g. unary minus.
    Unary {
        /// The operand.
        first: Box<Node>,
    },
    /// Infix application.
    Binary {
        /// Left operand.
        first:  Box<Node>,
        /// Right operand.
        second: Box<Node>,
    },
    /// Function call `callee(arguments...)`.
    Call {
        /// The expression in callee position, normally a name.
        callee:    Box<Node>,
        /// Arguments in source order.
        arguments: Vec<Node>,
    },
}

/// A token, and after parsing, a node of the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What this node is.
    pub kind:     Kind,
    /// Literal value or identifier, if any.
    pub payload:  Payload,
    /// Operands attached by the parser.
    pub children: Children,
}

impl Node {
    /// Creates a childless token of the given kind with no payload.
    #[must_use]
    pub const fn token(kind: Kind) -> Self {
        Self { kind,
               payload: Payload::None,
               children: Children::None }
    }

    /// Creates a numeric literal.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self { kind:     Kind::Literal,
               payload:  Payload::Number(value),
               children: Children::None, }
    }

    /// Creates a name token.
    #[must_use]
    pub fn name(identifier: impl Into<String>) -> Self {
        Self { kind:     Kind::Name,
               payload:  Payload::Name(identifier.into()),
               children: Children::None, }
    }

    /// Creates the end-of-input marker.
    #[must_use]
    pub const fn end() -> Self {
        Self::token(Kind::End)
    }

    /// Attaches a single operand, consuming the token.
    #[must_use]
    pub fn with_operand(self, first: Self) -> Self {
        Self { children: Children::Unary { first: Box::new(first) },
               ..self }
    }

    /// Attaches a left and a right operand, consuming the token.
    #[must_use]
    pub fn with_operands(self, first: Self, second: Self) -> Self {
        Self { children: Children::Binary { first:  Box::new(first),
                                            second: Box::new(second), },
               ..self }
    }

    /// Turns the token into a call of `callee` with `arguments`.
    #[must_use]
    pub fn with_call(self, callee: Self, arguments: Vec<Self>) -> Self {
        Self { children: Children::Call { callee: Box::new(callee),
                                          arguments },
               ..self }
    }

    /// The first child slot: the operand of a prefix node, the left operand of
    /// an infix node or the callee of a call.
    #[must_use]
    pub fn first(&self) -> Option<&Self> {
        match &self.children {
            Children::None => None,
            Children::Unary { first } | Children::Binary { first, .. } => Some(first),
            Children::Call { callee, .. } => Some(callee),
        }
    }

    /// The right operand of an infix node.
    #[must_use]
    pub fn second(&self) -> Option<&Self> {
        match &self.children {
            Children::Binary { second, .. } => Some(second),
            _ => None,
        }
    }

    /// The arguments of a call node; empty for anything else.
    #[must_use]
    pub fn arguments(&self) -> &[Self] {
        match &self.children {
            Children::Call { arguments, .. } => arguments,
            _ => &[],
        }
    }

    /// The literal value, if this is a literal.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self.payload {
            Payload::Number(value) => Some(value),
            _ => None,
        }
    }

    /// The identifier, if this is a name.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match &self.payload {
            Payload::Name(name) => Some(name),
            _ => None,
        }
    }
}

/// Renders the node as an s-expression.
///
/// # Example
/// ```
/// use matheval::ast::{Kind, Node};
///
/// let sum = Node::token(Kind::Plus).with_operands(Node::number(1.0), Node::number(2.5));
/// assert_eq!(sum.to_string(), "(+ (literal 1) (literal 2.5))");
///
/// let call = Node::token(Kind::LeftParen).with_call(Node::name("sin"), vec![Node::number(0.0)]);
/// assert_eq!(call.to_string(), "(call (name sin) (literal 0))");
/// ```
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.payload, &self.children) {
            (Payload::Number(value), _) => write!(f, "(literal {value})"),
            (Payload::Name(name), _) => write!(f, "(name {name})"),
            (Payload::None, Children::None) => write!(f, "({})", self.kind),
            (Payload::None, Children::Unary { first }) => write!(f, "({} {first})", self.kind),
            (Payload::None, Children::Binary { first, second }) => {
                write!(f, "({} {first} {second})", self.kind)
            },
            (Payload::None, Children::Call { callee, arguments }) => {
                write!(f, "(call {callee}")?;
                for argument in arguments {
                    write!(f, " {argument}")?;
                }
                f.write_str(")")
            },
        }
    }
}
