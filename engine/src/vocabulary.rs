use crate::token::TokenKind;

/// The callbacks the tokenizer uses to classify input.
///
/// Classification must be total and disjoint: at any position a character
/// is either a value character, special in one of the two classifiers, or
/// part of a word. Overlaps are only allowed between `after_value` and
/// `elsewhere`, where the tokenizer state decides.
pub trait Vocabulary {
    type Output;

    /// Characters that make up value literals such as `12.5`.
    fn is_value_char(&self, c: char) -> bool;

    /// Parses a maximal run of value characters. `None` rejects the run.
    fn parse_value(&self, literal: &str) -> Option<Self::Output>;

    /// Characters allowed right after a value or a closing paren: binary
    /// operators, `)` and the argument separator.
    fn after_value(&self, c: char) -> Option<TokenKind<Self::Output>>;

    /// Characters allowed everywhere else: prefix operators and `(`.
    fn elsewhere(&self, c: char) -> Option<TokenKind<Self::Output>>;

    /// Resolves a run of non-special characters: constants, variables,
    /// function names or word operators.
    fn parse_word(&self, word: &str) -> Option<TokenKind<Self::Output>>;

    fn is_special(&self, c: char) -> bool {
        self.after_value(c).is_some() || self.elsewhere(c).is_some()
    }
}

impl<V: Vocabulary + ?Sized> Vocabulary for &V {
    type Output = V::Output;

    fn is_value_char(&self, c: char) -> bool {
        (**self).is_value_char(c)
    }

    fn parse_value(&self, literal: &str) -> Option<Self::Output> {
        (**self).parse_value(literal)
    }

    fn after_value(&self, c: char) -> Option<TokenKind<Self::Output>> {
        (**self).after_value(c)
    }

    fn elsewhere(&self, c: char) -> Option<TokenKind<Self::Output>> {
        (**self).elsewhere(c)
    }

    fn parse_word(&self, word: &str) -> Option<TokenKind<Self::Output>> {
        (**self).parse_word(word)
    }

    fn is_special(&self, c: char) -> bool {
        (**self).is_special(c)
    }
}
