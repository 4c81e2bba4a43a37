use infix::{Function, Operator, Paren, TokenKind, Vocabulary};
use num::complex::Complex64;

/// Arithmetic over complex numbers, with `i` as the imaginary unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComplexArithmetic;

fn real(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

impl ComplexArithmetic {
    fn function(word: &str) -> Option<Function<Complex64>> {
        Some(match word {
            "re" => Function::unary("re", |z: Complex64| real(z.re)),
            "im" => Function::unary("im", |z: Complex64| real(z.im)),
            "abs" => Function::unary("abs", |z: Complex64| real(z.norm())),
            "arg" => Function::unary("arg", |z: Complex64| real(z.arg())),
            "conj" => Function::unary("conj", |z: Complex64| z.conj()),
            "sqrt" => Function::unary("sqrt", |z: Complex64| z.sqrt()),
            "exp" => Function::unary("exp", |z: Complex64| z.exp()),
            "ln" => Function::unary("ln", |z: Complex64| z.ln()),
            "sin" => Function::unary("sin", |z: Complex64| z.sin()),
            "cos" => Function::unary("cos", |z: Complex64| z.cos()),
            "tan" => Function::unary("tan", |z: Complex64| z.tan()),
            "polar" => Function::binary("polar", |r: Complex64, theta: Complex64| {
                Complex64::from_polar(r.re, theta.re)
            }),
            _ => return None,
        })
    }
}

impl Vocabulary for ComplexArithmetic {
    type Output = Complex64;

    fn is_value_char(&self, c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }

    fn parse_value(&self, literal: &str) -> Option<Complex64> {
        literal.parse::<f64>().ok().map(real)
    }

    fn after_value(&self, c: char) -> Option<TokenKind<Complex64>> {
        Some(match c {
            '+' => Operator::left("+", 0, |a: Complex64, b| a + b).into(),
            '-' => Operator::left("-", 0, |a: Complex64, b| a - b).into(),
            '*' => Operator::left("*", 1, |a: Complex64, b| a * b).into(),
            '/' => Operator::left("/", 1, |a: Complex64, b| a / b).into(),
            '^' => Operator::right("^", 2, |a: Complex64, b| a.powc(b)).into(),
            ')' => Paren::Close.into(),
            ',' => TokenKind::ArgSeparator,
            _ => return None,
        })
    }

    fn elsewhere(&self, c: char) -> Option<TokenKind<Complex64>> {
        Some(match c {
            '-' => Function::unary("neg", |z: Complex64| -z).into(),
            '(' => Paren::Open.into(),
            _ => return None,
        })
    }

    fn parse_word(&self, word: &str) -> Option<TokenKind<Complex64>> {
        let value = match word {
            "i" => Complex64::i(),
            "pi" => real(std::f64::consts::PI),
            "e" => real(std::f64::consts::E),
            _ => return Self::function(word).map(TokenKind::Function),
        };
        Some(TokenKind::Value(value))
    }
}

#[cfg(test)]
mod tests {
    use infix::{Evaluator, Syntax};

    use super::*;

    fn eval(s: &str) -> Result<Complex64, Syntax> {
        Evaluator::new(ComplexArithmetic)
            .evaluate(s)
            .map_err(|e| e.kind)
    }

    fn approx(s: &str, re: f64, im: f64) {
        let z = eval(s).unwrap();
        assert!(
            (z - Complex64::new(re, im)).norm() < 1e-9,
            "{s} evaluated to {z}, expected {re}+{im}i"
        );
    }

    #[test]
    fn arithmetic() {
        approx("1 + 2 * i", 1.0, 2.0);
        approx("(1 + i) * (1 - i)", 2.0, 0.0);
        approx("i * i", -1.0, 0.0);
        approx("(3 + 4 * i) / (1 + 2 * i)", 2.2, -0.4);
        approx("-i - -i", 0.0, 0.0);
        approx("2 ^ 2 ^ 3", 256.0, 0.0);
    }

    #[test]
    fn functions() {
        approx("abs(3 + 4 * i)", 5.0, 0.0);
        approx("re(3 + 4 * i) + im(3 + 4 * i)", 7.0, 0.0);
        approx("conj(1 + i)", 1.0, -1.0);
        approx("sqrt(0 - 4)", 0.0, 2.0);
        approx("exp(i * pi) + 1", 0.0, 0.0);
        approx("arg(i)", std::f64::consts::FRAC_PI_2, 0.0);
        approx("polar(2, pi / 2)", 0.0, 2.0);
        approx("ln(e)", 1.0, 0.0);
        approx("sin(0) + cos(0) + tan(0)", 1.0, 0.0);
    }

    #[test]
    fn errors() {
        assert_eq!(eval("2 i"), Err(Syntax::MalformedExpression));
        assert_eq!(eval("j"), Err(Syntax::UnrecognizedWord("j".into())));
        assert_eq!(eval("polar(1)"), Err(Syntax::MalformedExpression));
        assert_eq!(eval("(i"), Err(Syntax::MismatchedParentheses));
    }
}
