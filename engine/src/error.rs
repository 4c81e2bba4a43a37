use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Syntax {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("unrecognized word \"{0}\"")]
    UnrecognizedWord(String),
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("malformed expression")]
    MalformedExpression,
}

/// A failed evaluation together with the characters that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {}..={}", .span.start(), .span.end())]
pub struct SyntaxError {
    pub kind: Syntax,
    pub span: RangeInclusive<usize>,
}

impl SyntaxError {
    pub fn new(kind: Syntax, span: RangeInclusive<usize>) -> Self {
        SyntaxError { kind, span }
    }

    pub fn kind(&self) -> &Syntax {
        &self.kind
    }

    pub fn span(&self) -> RangeInclusive<usize> {
        self.span.clone()
    }

    /// Renders a line of carets under the offending characters of `input`.
    pub fn underline(&self, input: &str) -> String {
        let width = input.chars().count().max(self.span.end() + 1);
        (0..width)
            .map(|i| if self.span.contains(&i) { '^' } else { ' ' })
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = SyntaxError::new(Syntax::UnexpectedCharacter('*'), 0..=0);
        assert_eq!(err.to_string(), "unexpected character '*' at 0..=0");

        let err = SyntaxError::new(Syntax::UnrecognizedWord("foo".into()), 4..=6);
        assert_eq!(err.to_string(), "unrecognized word \"foo\" at 4..=6");
    }

    #[test]
    fn underline() {
        let err = SyntaxError::new(Syntax::UnrecognizedWord("foo".into()), 4..=6);
        assert_eq!(err.underline("1 + foo"), "    ^^^");

        let err = SyntaxError::new(Syntax::MalformedExpression, 0..=0);
        assert_eq!(err.underline(""), "^");
    }
}
