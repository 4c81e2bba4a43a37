use crate::{
    token::{Function, Operator, Paren, TokenKind},
    Vocabulary,
};

/// Integer arithmetic used by the engine's own tests.
pub struct Integers;

impl Vocabulary for Integers {
    type Output = i64;

    fn is_value_char(&self, c: char) -> bool {
        c.is_ascii_digit()
    }

    fn parse_value(&self, literal: &str) -> Option<i64> {
        literal.parse().ok()
    }

    fn after_value(&self, c: char) -> Option<TokenKind<i64>> {
        Some(match c {
            '+' => Operator::left("+", 0, |a: i64, b| a + b).into(),
            '-' => Operator::left("-", 0, |a: i64, b| a - b).into(),
            '*' => Operator::left("*", 1, |a: i64, b| a * b).into(),
            '/' => Operator::left("/", 1, |a: i64, b| a / b).into(),
            '^' => Operator::right("^", 2, |a: i64, b| a.pow(b as u32)).into(),
            ')' => Paren::Close.into(),
            ',' => TokenKind::ArgSeparator,
            _ => return None,
        })
    }

    fn elsewhere(&self, c: char) -> Option<TokenKind<i64>> {
        Some(match c {
            '-' => Function::unary("neg", |a: i64| -a).into(),
            '(' => Paren::Open.into(),
            _ => return None,
        })
    }

    fn parse_word(&self, word: &str) -> Option<TokenKind<i64>> {
        Some(match word {
            "ten" => TokenKind::Value(10),
            "max" => Function::binary("max", |a: i64, b| a.max(b)).into(),
            "min" => Function::binary("min", |a: i64, b| a.min(b)).into(),
            "clamp" => {
                Function::nary("clamp", 3, |args: Vec<i64>| args[0].clamp(args[1], args[2])).into()
            }
            "answer" => Function::nary("answer", 0, |_: Vec<i64>| 42).into(),
            "mod" => Operator::left("mod", 1, |a: i64, b| a.rem_euclid(b)).into(),
            _ => return None,
        })
    }
}

/// [`Integers`] that also accepts `)` and `,` where a value is expected, so
/// empty argument lists reach the converter.
pub struct Lenient;

impl Vocabulary for Lenient {
    type Output = i64;

    fn is_value_char(&self, c: char) -> bool {
        Integers.is_value_char(c)
    }

    fn parse_value(&self, literal: &str) -> Option<i64> {
        Integers.parse_value(literal)
    }

    fn after_value(&self, c: char) -> Option<TokenKind<i64>> {
        Integers.after_value(c)
    }

    fn elsewhere(&self, c: char) -> Option<TokenKind<i64>> {
        match c {
            ')' | ',' => Integers.after_value(c),
            _ => Integers.elsewhere(c),
        }
    }

    fn parse_word(&self, word: &str) -> Option<TokenKind<i64>> {
        Integers.parse_word(word)
    }
}
