use std::{
    fmt::{self, Debug, Display},
    ops::{Deref, RangeInclusive},
};

/// Binding strength used when converting to postfix.
///
/// Operators are built from an `i16` level, so the two `i32` extremes stay
/// reserved for grouping markers and functions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Precedence(i32);

impl Precedence {
    pub const GROUPING: Precedence = Precedence(i32::MIN);
    pub const FUNCTION: Precedence = Precedence(i32::MAX);

    pub const fn level(level: i16) -> Self {
        Precedence(level as i32)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    pub const fn is_sentinel(self) -> bool {
        self.0 == i32::MIN || self.0 == i32::MAX
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Associativity {
    Left,
    Right,
}

pub struct Operator<R> {
    name: &'static str,
    precedence: Precedence,
    associativity: Associativity,
    apply: fn(R, R) -> R,
}

impl<R> Operator<R> {
    pub const fn new(
        name: &'static str,
        level: i16,
        associativity: Associativity,
        apply: fn(R, R) -> R,
    ) -> Self {
        Operator {
            name,
            precedence: Precedence::level(level),
            associativity,
            apply,
        }
    }

    pub const fn left(name: &'static str, level: i16, apply: fn(R, R) -> R) -> Self {
        Self::new(name, level, Associativity::Left, apply)
    }

    pub const fn right(name: &'static str, level: i16, apply: fn(R, R) -> R) -> Self {
        Self::new(name, level, Associativity::Right, apply)
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn precedence(&self) -> Precedence {
        self.precedence
    }

    pub const fn associativity(&self) -> Associativity {
        self.associativity
    }

    pub fn apply(&self, left: R, right: R) -> R {
        (self.apply)(left, right)
    }
}

impl<R> Clone for Operator<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Operator<R> {}

impl<R> Debug for Operator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name)
            .field("precedence", &self.precedence)
            .field("associativity", &self.associativity)
            .finish()
    }
}

impl<R> Display for Operator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// How a function consumes its operands.
enum Apply<R> {
    Unary(fn(R) -> R),
    Binary(fn(R, R) -> R),
    Nary(usize, fn(Vec<R>) -> R),
}

impl<R> Clone for Apply<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Apply<R> {}

pub struct Function<R> {
    name: &'static str,
    apply: Apply<R>,
}

impl<R> Function<R> {
    pub const fn unary(name: &'static str, apply: fn(R) -> R) -> Self {
        Function {
            name,
            apply: Apply::Unary(apply),
        }
    }

    pub const fn binary(name: &'static str, apply: fn(R, R) -> R) -> Self {
        Function {
            name,
            apply: Apply::Binary(apply),
        }
    }

    pub const fn nary(name: &'static str, arity: usize, apply: fn(Vec<R>) -> R) -> Self {
        Function {
            name,
            apply: Apply::Nary(arity, apply),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn arity(&self) -> usize {
        match self.apply {
            Apply::Unary(_) => 1,
            Apply::Binary(_) => 2,
            Apply::Nary(arity, _) => arity,
        }
    }

    pub const fn precedence(&self) -> Precedence {
        Precedence::FUNCTION
    }

    /// Applies the function to its operands, first argument first.
    ///
    /// Callers must pass exactly `arity()` operands.
    pub fn apply(&self, mut args: Vec<R>) -> R {
        assert_eq!(
            args.len(),
            self.arity(),
            "`{}` applied to the wrong number of operands",
            self.name
        );
        match self.apply {
            Apply::Unary(f) => f(args.remove(0)),
            Apply::Binary(f) => {
                let right = args.remove(1);
                let left = args.remove(0);
                f(left, right)
            }
            Apply::Nary(_, f) => f(args),
        }
    }
}

impl<R> Clone for Function<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Function<R> {}

impl<R> Debug for Function<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish()
    }
}

impl<R> Display for Function<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Paren {
    Open,
    Close,
}

#[derive(Clone, Debug)]
pub enum TokenKind<R> {
    Value(R),
    Operator(Operator<R>),
    Function(Function<R>),
    Paren(Paren),
    ArgSeparator,
}

impl<R> TokenKind<R> {
    /// `None` for values and separators, which never take part in
    /// precedence comparisons.
    pub fn precedence(&self) -> Option<Precedence> {
        match self {
            TokenKind::Operator(op) => Some(op.precedence()),
            TokenKind::Function(func) => Some(func.precedence()),
            TokenKind::Paren(_) => Some(Precedence::GROUPING),
            TokenKind::Value(_) | TokenKind::ArgSeparator => None,
        }
    }

    pub fn associativity(&self) -> Option<Associativity> {
        match self {
            TokenKind::Operator(op) => Some(op.associativity()),
            _ => None,
        }
    }

    pub fn arity(&self) -> Option<usize> {
        match self {
            TokenKind::Value(_) => Some(0),
            TokenKind::Operator(_) => Some(2),
            TokenKind::Function(func) => Some(func.arity()),
            TokenKind::Paren(_) | TokenKind::ArgSeparator => None,
        }
    }

    /// Whether a binary operator may follow this token.
    pub fn ends_value(&self) -> bool {
        matches!(self, TokenKind::Value(_) | TokenKind::Paren(Paren::Close))
    }
}

impl<R> From<Operator<R>> for TokenKind<R> {
    fn from(op: Operator<R>) -> Self {
        TokenKind::Operator(op)
    }
}

impl<R> From<Function<R>> for TokenKind<R> {
    fn from(func: Function<R>) -> Self {
        TokenKind::Function(func)
    }
}

impl<R> From<Paren> for TokenKind<R> {
    fn from(paren: Paren) -> Self {
        TokenKind::Paren(paren)
    }
}

impl<R: Display> Display for TokenKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Value(value) => write!(f, "{value}"),
            TokenKind::Operator(op) => write!(f, "{op}"),
            TokenKind::Function(func) => write!(f, "{func}"),
            TokenKind::Paren(Paren::Open) => write!(f, "("),
            TokenKind::Paren(Paren::Close) => write!(f, ")"),
            TokenKind::ArgSeparator => write!(f, ","),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Token<R> {
    pub(crate) kind: TokenKind<R>,
    pub(crate) span: RangeInclusive<usize>,
}

impl<R> Token<R> {
    pub fn new(kind: TokenKind<R>, span: RangeInclusive<usize>) -> Self {
        Token { kind, span }
    }

    pub fn span(&self) -> RangeInclusive<usize> {
        self.span.clone()
    }

    pub fn into_kind(self) -> TokenKind<R> {
        self.kind
    }
}

impl<R> Deref for Token<R> {
    type Target = TokenKind<R>;

    fn deref(&self) -> &Self::Target {
        &self.kind
    }
}

impl<R: Display> Display for Token<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// The subset of tokens that survives conversion to postfix order.
#[derive(Clone, Debug)]
pub enum PostfixKind<R> {
    Value(R),
    Operator(Operator<R>),
    Function(Function<R>),
}

impl<R: Display> Display for PostfixKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixKind::Value(value) => write!(f, "{value}"),
            PostfixKind::Operator(op) => write!(f, "{op}"),
            PostfixKind::Function(func) => write!(f, "{func}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PostfixToken<R> {
    pub(crate) kind: PostfixKind<R>,
    pub(crate) span: RangeInclusive<usize>,
}

impl<R> PostfixToken<R> {
    pub fn new(kind: PostfixKind<R>, span: RangeInclusive<usize>) -> Self {
        PostfixToken { kind, span }
    }

    pub fn span(&self) -> RangeInclusive<usize> {
        self.span.clone()
    }

    pub fn into_kind(self) -> PostfixKind<R> {
        self.kind
    }
}

impl<R> Deref for PostfixToken<R> {
    type Target = PostfixKind<R>;

    fn deref(&self) -> &Self::Target {
        &self.kind
    }
}

impl<R: Display> Display for PostfixToken<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
