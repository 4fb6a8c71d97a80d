/// Represents a literal value written directly in a condition.
///
/// Booleans are not literals: `True` and `False` are ordinary names that the
/// evaluator resolves, so a literal is always a number or a string.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// An integer literal such as `42`, `$FF` or `%1010`.
    Integer(i128),
    /// A decimal literal such as `2.5` or `1.5e3`.
    Decimal(f64),
    /// A single-quoted string literal with doubled quotes already collapsed.
    String(String),
}

impl From<i128> for LiteralValue {
    fn from(value: i128) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An abstract syntax tree node for a directive condition.
///
/// The tree is closed: every construct the condition grammar can produce is
/// one of these variants, and the evaluator matches on them directly. Each
/// node records the byte offset of the token that started it, relative to the
/// condition text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number or string.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Offset in the condition text.
        position: usize,
    },
    /// A possibly qualified name such as `FOO` or `System.CompilerVersion`.
    Name {
        /// The dotted name with segments joined by `.`.
        name:     String,
        /// Offset in the condition text.
        position: usize,
    },
    /// A prefix operation (`-x`, `not x`).
    UnaryOp {
        /// The operator to apply.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Self>,
        /// Offset in the condition text.
        position: usize,
    },
    /// An infix operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Offset of the operator token.
        position: usize,
    },
    /// A set constructor such as `[1, 2, 3]`.
    SetLiteral {
        /// Element expressions in source order.
        elements: Vec<Self>,
        /// Offset in the condition text.
        position: usize,
    },
    /// A call of an intrinsic such as `Defined(FOO)` or `SizeOf(Integer)`.
    Invocation {
        /// The dotted name of the callee.
        name:      String,
        /// Argument expressions in source order.
        arguments: Vec<Self>,
        /// Offset in the condition text.
        position:  usize,
    },
}

impl Expr {
    /// Gets the offset of the token that started this node.
    /// ## Example
    /// ```
    /// use pascond::ast::Expr;
    ///
    /// let expr = Expr::Name { name:     "FOO".to_string(),
    ///                         position: 7, };
    ///
    /// assert_eq!(expr.position(), 7);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Name { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::SetLiteral { position, .. }
            | Self::Invocation { position, .. } => *position,
        }
    }
}

/// Represents a binary operator of the condition language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Real division (`/`)
    Div,
    /// Integer division (`div`)
    IntDiv,
    /// Integer remainder (`mod`)
    Mod,
    /// Left shift (`shl`)
    Shl,
    /// Right shift (`shr`)
    Shr,
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal, or subset (`<=`)
    LessEqual,
    /// Greater than or equal, or superset (`>=`)
    GreaterEqual,
    /// Set membership (`in`)
    In,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
    /// Logical exclusive or (`xor`)
    Xor,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric identity (`+x`).
    Plus,
    /// Numeric negation (`-x`).
    Negate,
    /// Logical NOT (`not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, In, IntDiv, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Shl, Shr, Sub, Xor,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            IntDiv => "div",
            Mod => "mod",
            Shl => "shl",
            Shr => "shr",
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            In => "in",
            And => "and",
            Or => "or",
            Xor => "xor",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "not",
        };
        write!(f, "{operator}")
    }
}
