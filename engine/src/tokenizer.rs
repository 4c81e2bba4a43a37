use std::str::Chars;

use crate::{
    error::{Syntax, SyntaxError},
    token::{Token, TokenKind},
    Vocabulary,
};

/// Splits an expression into tokens in a single left-to-right pass.
///
/// The only state carried between tokens is whether the last token closed
/// off a value. That is what lets one character, such as `-`, act as a
/// binary operator after a value and as a prefix operator anywhere else.
pub struct Tokenizer<'a, V: Vocabulary> {
    vocabulary: &'a V,
    pos: usize,
    start_pos: usize,
    current: Option<char>,
    iter: Chars<'a>,
    after_value: bool,
    tokens: Vec<Token<V::Output>>,
}

impl<'a, V: Vocabulary> Tokenizer<'a, V> {
    pub fn new(vocabulary: &'a V, s: &'a str) -> Self {
        let mut iter = s.chars();
        let current = iter.next();
        Tokenizer {
            vocabulary,
            pos: 0,
            start_pos: 0,
            current,
            iter,
            after_value: false,
            tokens: Vec::new(),
        }
    }

    fn start(&mut self) {
        self.start_pos = self.pos;
    }

    fn next(&mut self) -> Option<char> {
        if self.current.is_some() {
            self.pos += 1;
        }
        self.current = self.iter.next();
        self.current
    }

    /// Consumes the longest run of characters accepted by `accept`.
    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut run = String::new();
        while let Some(c) = self.current {
            if !accept(c) {
                break;
            }
            run.push(c);
            self.next();
        }
        run
    }

    fn token(&mut self, kind: TokenKind<V::Output>) {
        self.after_value = kind.ends_value();
        self.tokens.push(Token {
            kind,
            span: self.start_pos..=self.pos - 1,
        });
    }

    fn error(&self, kind: Syntax) -> SyntaxError {
        SyntaxError::new(kind, self.start_pos..=self.pos.saturating_sub(1).max(self.start_pos))
    }

    fn parse_value(&mut self) -> Result<(), SyntaxError> {
        let vocabulary = self.vocabulary;
        let literal = self.take_while(|c| vocabulary.is_value_char(c));
        match vocabulary.parse_value(&literal) {
            Some(value) => {
                self.token(TokenKind::Value(value));
                Ok(())
            }
            None => Err(self.error(Syntax::UnrecognizedWord(literal))),
        }
    }

    fn parse_word(&mut self) -> Result<(), SyntaxError> {
        let vocabulary = self.vocabulary;
        let word = self.take_while(|c| !c.is_whitespace() && !vocabulary.is_special(c));
        match vocabulary.parse_word(&word) {
            Some(kind) => {
                self.token(kind);
                Ok(())
            }
            None => Err(self.error(Syntax::UnrecognizedWord(word))),
        }
    }

    fn parse_raw(&mut self) -> Result<(), SyntaxError> {
        let vocabulary = self.vocabulary;
        while let Some(current) = self.current {
            if current.is_whitespace() {
                self.next();
                continue;
            }
            self.start();
            if !self.after_value && vocabulary.is_value_char(current) {
                self.parse_value()?;
                continue;
            }
            let (preferred, other) = if self.after_value {
                (vocabulary.after_value(current), vocabulary.elsewhere(current))
            } else {
                (vocabulary.elsewhere(current), vocabulary.after_value(current))
            };
            match (preferred, other) {
                (Some(kind), _) => {
                    self.next();
                    self.token(kind);
                }
                (None, Some(_)) => {
                    return Err(SyntaxError::new(
                        Syntax::UnexpectedCharacter(current),
                        self.pos..=self.pos,
                    ));
                }
                (None, None) => self.parse_word()?,
            }
        }
        Ok(())
    }

    pub fn tokenize(mut self) -> Result<Vec<Token<V::Output>>, SyntaxError> {
        #[cfg(feature = "tracy")]
        profiling::scope!("Tokenizer::tokenize");
        self.parse_raw()?;
        tracing::trace!(tokens = self.tokens.len(), "tokenized");
        Ok(self.tokens)
    }
}
