use infix::{Function, Operator, Paren, TokenKind, Vocabulary};

/// Boolean logic: `&`, `|` and `^` share one precedence level and group
/// to the left; `!` negates the value that follows it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Boolean;

impl Boolean {
    const AND: Operator<bool> = Operator::left("&", 0, |a: bool, b: bool| a & b);
    const OR: Operator<bool> = Operator::left("|", 0, |a: bool, b: bool| a | b);
    const XOR: Operator<bool> = Operator::left("^", 0, |a: bool, b: bool| a ^ b);
    const NOT: Function<bool> = Function::unary("!", |a: bool| !a);
}

impl Vocabulary for Boolean {
    type Output = bool;

    fn is_value_char(&self, c: char) -> bool {
        matches!(c, '0' | '1')
    }

    fn parse_value(&self, literal: &str) -> Option<bool> {
        match literal {
            "0" => Some(false),
            "1" => Some(true),
            _ => None,
        }
    }

    fn after_value(&self, c: char) -> Option<TokenKind<bool>> {
        Some(match c {
            '&' => Self::AND.into(),
            '|' => Self::OR.into(),
            '^' => Self::XOR.into(),
            ')' => Paren::Close.into(),
            ',' => TokenKind::ArgSeparator,
            _ => return None,
        })
    }

    fn elsewhere(&self, c: char) -> Option<TokenKind<bool>> {
        Some(match c {
            '!' => Self::NOT.into(),
            '(' => Paren::Open.into(),
            _ => return None,
        })
    }

    fn parse_word(&self, word: &str) -> Option<TokenKind<bool>> {
        Some(match word {
            "true" => TokenKind::Value(true),
            "false" => TokenKind::Value(false),
            "and" => Self::AND.into(),
            "or" => Self::OR.into(),
            "xor" => Self::XOR.into(),
            "not" => Self::NOT.into(),
            "nand" => Function::binary("nand", |a: bool, b: bool| !(a & b)).into(),
            "nor" => Function::binary("nor", |a: bool, b: bool| !(a | b)).into(),
            "implies" => Function::binary("implies", |a: bool, b: bool| !a | b).into(),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use infix::{Evaluator, Syntax};

    use super::*;

    fn eval(s: &str) -> Result<bool, Syntax> {
        Evaluator::new(Boolean).evaluate(s).map_err(|e| e.kind)
    }

    #[test]
    fn logic() {
        assert_eq!(eval("(true | false) & !false"), Ok(true));
        assert_eq!(eval("true & false"), Ok(false));
        assert_eq!(eval("1 ^ 1"), Ok(false));
        assert_eq!(eval("!!1"), Ok(true));
        assert_eq!(eval("not (true and false)"), Ok(true));
        assert_eq!(eval("false or true xor true"), Ok(false));
    }

    #[test]
    fn same_level_groups_left() {
        assert_eq!(eval("true | false & false"), Ok(false));
        assert_eq!(eval("true | (false & false)"), Ok(true));
    }

    #[test]
    fn negation_binds_tightest() {
        assert_eq!(eval("!true | true"), Ok(true));
        assert_eq!(eval("!(true | true)"), Ok(false));
    }

    #[test]
    fn functions() {
        assert_eq!(eval("nand(1, 1)"), Ok(false));
        assert_eq!(eval("nor(0, 0)"), Ok(true));
        assert_eq!(eval("implies(true, false)"), Ok(false));
        assert_eq!(eval("implies(false, nand(1, 0))"), Ok(true));
        assert_eq!(eval("nand(1)"), Err(Syntax::MalformedExpression));
    }

    #[test]
    fn errors() {
        assert_eq!(eval("2"), Err(Syntax::UnrecognizedWord("2".into())));
        assert_eq!(eval("10"), Err(Syntax::UnrecognizedWord("10".into())));
        assert_eq!(eval("true !"), Err(Syntax::UnexpectedCharacter('!')));
        assert_eq!(eval("& true"), Err(Syntax::UnexpectedCharacter('&')));
        assert_eq!(eval("(true"), Err(Syntax::MismatchedParentheses));
        assert_eq!(eval("true false"), Err(Syntax::MalformedExpression));
        assert_eq!(eval("maybe"), Err(Syntax::UnrecognizedWord("maybe".into())));
    }
}
