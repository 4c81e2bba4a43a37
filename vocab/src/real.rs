use std::{fmt::Display, marker::PhantomData};

use infix::{Function, Operator, Paren, TokenKind, Vocabulary};
use num_traits::{Float, FloatConst};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Func {
    Abs,
    Sqrt,
    Cbrt,
    Exp,
    Ln,
    Log2,
    Log10,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Floor,
    Ceil,
    Round,
    Sign,
    Min,
    Max,
    Pow,
    Log,
    Atan2,
    Hypot,
}

impl Func {
    pub const ALL: [Func; 26] = [
        Func::Abs,
        Func::Sqrt,
        Func::Cbrt,
        Func::Exp,
        Func::Ln,
        Func::Log2,
        Func::Log10,
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
        Func::Floor,
        Func::Ceil,
        Func::Round,
        Func::Sign,
        Func::Min,
        Func::Max,
        Func::Pow,
        Func::Log,
        Func::Atan2,
        Func::Hypot,
    ];

    pub fn from_str(string: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.as_str() == string)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Func::Abs => "abs",
            Func::Sqrt => "sqrt",
            Func::Cbrt => "cbrt",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log2 => "log2",
            Func::Log10 => "log10",
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Floor => "floor",
            Func::Ceil => "ceil",
            Func::Round => "round",
            Func::Sign => "sign",
            Func::Min => "min",
            Func::Max => "max",
            Func::Pow => "pow",
            Func::Log => "log",
            Func::Atan2 => "atan2",
            Func::Hypot => "hypot",
        }
    }

    pub fn function<F: Float>(&self) -> Function<F> {
        let name = self.as_str();
        match self {
            Func::Abs => Function::unary(name, F::abs),
            Func::Sqrt => Function::unary(name, F::sqrt),
            Func::Cbrt => Function::unary(name, F::cbrt),
            Func::Exp => Function::unary(name, F::exp),
            Func::Ln => Function::unary(name, F::ln),
            Func::Log2 => Function::unary(name, F::log2),
            Func::Log10 => Function::unary(name, F::log10),
            Func::Sin => Function::unary(name, F::sin),
            Func::Cos => Function::unary(name, F::cos),
            Func::Tan => Function::unary(name, F::tan),
            Func::Asin => Function::unary(name, F::asin),
            Func::Acos => Function::unary(name, F::acos),
            Func::Atan => Function::unary(name, F::atan),
            Func::Sinh => Function::unary(name, F::sinh),
            Func::Cosh => Function::unary(name, F::cosh),
            Func::Tanh => Function::unary(name, F::tanh),
            Func::Floor => Function::unary(name, F::floor),
            Func::Ceil => Function::unary(name, F::ceil),
            Func::Round => Function::unary(name, F::round),
            Func::Sign => Function::unary(name, F::signum),
            Func::Min => Function::binary(name, F::min),
            Func::Max => Function::binary(name, F::max),
            Func::Pow => Function::binary(name, F::powf),
            // log(base, x)
            Func::Log => Function::binary(name, |base: F, x: F| x.log(base)),
            Func::Atan2 => Function::binary(name, F::atan2),
            Func::Hypot => Function::binary(name, F::hypot),
        }
    }
}

impl Display for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Real arithmetic over any floating point type.
///
/// `+ -` bind loosest, then `* / %`, then the right-associative `^`. A `-`
/// or `+` in front of a value is a prefix operator.
#[derive(Debug)]
pub struct Real<F> {
    float: PhantomData<fn() -> F>,
}

impl<F> Real<F> {
    pub const fn new() -> Self {
        Real { float: PhantomData }
    }
}

impl<F> Default for Real<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for Real<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Real<F> {}

impl<F: Float + FloatConst> Real<F> {
    fn constant(word: &str) -> Option<F> {
        Some(match word {
            "pi" => F::PI(),
            "e" => F::E(),
            "tau" => F::TAU(),
            "inf" => F::infinity(),
            "nan" => F::nan(),
            _ => return None,
        })
    }
}

impl<F: Float + FloatConst> Vocabulary for Real<F> {
    type Output = F;

    fn is_value_char(&self, c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }

    fn parse_value(&self, literal: &str) -> Option<F> {
        F::from_str_radix(literal, 10).ok()
    }

    fn after_value(&self, c: char) -> Option<TokenKind<F>> {
        Some(match c {
            '+' => Operator::left("+", 0, |a: F, b: F| a + b).into(),
            '-' => Operator::left("-", 0, |a: F, b: F| a - b).into(),
            '*' => Operator::left("*", 1, |a: F, b: F| a * b).into(),
            '/' => Operator::left("/", 1, |a: F, b: F| a / b).into(),
            '%' => Operator::left("%", 1, |a: F, b: F| a % b).into(),
            '^' => Operator::right("^", 2, F::powf).into(),
            ')' => Paren::Close.into(),
            ',' => TokenKind::ArgSeparator,
            _ => return None,
        })
    }

    fn elsewhere(&self, c: char) -> Option<TokenKind<F>> {
        Some(match c {
            '-' => Function::unary("neg", |a: F| -a).into(),
            '+' => Function::unary("pos", |a: F| a).into(),
            '(' => Paren::Open.into(),
            _ => return None,
        })
    }

    fn parse_word(&self, word: &str) -> Option<TokenKind<F>> {
        if let Some(value) = Self::constant(word) {
            return Some(TokenKind::Value(value));
        }
        Func::from_str(word).map(|func| TokenKind::Function(func.function()))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;

    use infix::{Evaluator, Syntax};

    use super::*;

    fn eval(s: &str) -> Result<f64, Syntax> {
        Evaluator::new(Real::<f64>::new())
            .evaluate(s)
            .map_err(|e| e.kind)
    }

    fn approx(s: &str, expected: f64) {
        let value = eval(s).unwrap();
        assert!(
            (value - expected).abs() < 1e-9,
            "{s} evaluated to {value}, expected {expected}"
        );
    }

    #[test]
    fn simple_statements() {
        approx("2 * cos(0.5) + 2 * 3 ^ 2", 2.0 * 0.5f64.cos() + 2.0 * 3.0f64.powf(2.0));
        approx("2 + 3 * 4", 14.0);
        approx("(2 + 3) * 4", 20.0);
        approx("7 % 4 + 0.5", 3.5);
        approx("1.5 * ((cos(0) + 23.0) / 2.0)", 18.0);
        approx("+2 - +1", 1.0);
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(eval("2 + 3 * 4"), eval("2 + (3 * 4)"));
        assert_ne!(eval("(2 + 3) * 4"), eval("2 + 3 * 4"));
        assert_eq!(eval("2 ^ 2 ^ 3"), Ok(256.0));
        assert_eq!(eval("2 ^ 2 ^ 3"), eval("2 ^ (2 ^ 3)"));
        assert_ne!(eval("2 ^ 2 ^ 3"), eval("(2 ^ 2) ^ 3"));
        assert_eq!(eval("8 / 4 / 2"), Ok(1.0));
    }

    #[test]
    fn unary_and_binary_minus() {
        assert_eq!(eval("-3 - -4"), Ok(1.0));
        assert_eq!(eval("2+3"), eval("2 + 3"));
        assert_eq!(eval("-sqrt(16)"), Ok(-4.0));
    }

    #[test]
    fn functions_and_constants() {
        assert_eq!(eval("max(3, 4)"), Ok(4.0));
        assert_eq!(eval("min(3, 4)"), Ok(3.0));
        approx("sin(pi / 2)", 1.0);
        approx("tau / 2", consts::PI);
        approx("ln(e)", 1.0);
        approx("log(2, 1024)", 10.0);
        approx("log10(1000) + log2(8)", 6.0);
        approx("atan2(1, 1)", consts::FRAC_PI_4);
        approx("hypot(3, 4)", 5.0);
        approx("pow(2, 10)", 1024.0);
        approx("abs(-2.5) + floor(1.7) + ceil(1.2) + round(2.5)", 8.5);
        approx("sign(-3) + cbrt(27)", 2.0);
        assert!(eval("nan").unwrap().is_nan());
        assert_eq!(eval("-inf"), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn arity_is_enforced() {
        assert_eq!(eval("max(3)"), Err(Syntax::MalformedExpression));
        assert_eq!(eval("max(3,4,5)"), Err(Syntax::MalformedExpression));
        assert_eq!(eval("sin(1, 2)"), Err(Syntax::MalformedExpression));
    }

    #[test]
    fn errors() {
        assert_eq!(eval("(2 + 3"), Err(Syntax::MismatchedParentheses));
        assert_eq!(eval("2 + 3)"), Err(Syntax::MismatchedParentheses));
        assert_eq!(eval("1..2"), Err(Syntax::UnrecognizedWord("1..2".into())));
        assert_eq!(eval("2 * / 3"), Err(Syntax::UnexpectedCharacter('/')));
        assert_eq!(eval("sinus(1)"), Err(Syntax::UnrecognizedWord("sinus".into())));
    }

    #[test]
    fn single_precision() {
        let value = Evaluator::new(Real::<f32>::new()).evaluate("1.5 * 2").unwrap();
        assert_eq!(value, 3.0f32);
    }

    #[test]
    fn func_names_round_trip() {
        for func in Func::ALL {
            assert_eq!(Func::from_str(func.as_str()), Some(func));
            assert_eq!(func.to_string(), func.as_str());
        }
    }
}
