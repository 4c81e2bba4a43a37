use std::collections::HashMap;

use infix::{TokenKind, Vocabulary};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefineError {
    #[error("\"{0}\" is already a builtin")]
    Reserved(String),
    #[error("\"{0}\" cannot be used as a variable name")]
    InvalidName(String),
}

/// Adds named variables on top of another vocabulary.
///
/// Builtin words always win over variables, and names that would not be
/// read back as a single word are rejected on definition.
#[derive(Clone, Debug, Default)]
pub struct Scope<V: Vocabulary> {
    inner: V,
    variables: HashMap<String, V::Output>,
}

impl<V: Vocabulary> Scope<V>
where
    V::Output: Clone,
{
    pub fn new(inner: V) -> Self {
        Scope {
            inner,
            variables: HashMap::new(),
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn get(&self, name: &str) -> Option<&V::Output> {
        self.variables.get(name)
    }

    fn is_word(&self, name: &str) -> bool {
        match name.chars().next() {
            Some(first) if !self.inner.is_value_char(first) => name
                .chars()
                .all(|c| !c.is_whitespace() && !self.inner.is_special(c)),
            _ => false,
        }
    }

    /// Binds `name`, returning the value it previously held.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        value: V::Output,
    ) -> Result<Option<V::Output>, DefineError> {
        let name = name.into();
        if !self.is_word(&name) {
            return Err(DefineError::InvalidName(name));
        }
        if self.inner.parse_word(&name).is_some() {
            return Err(DefineError::Reserved(name));
        }
        tracing::debug!(name = name.as_str(), "defining variable");
        Ok(self.variables.insert(name, value))
    }

    pub fn remove(&mut self, name: &str) -> Option<V::Output> {
        self.variables.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }
}

impl<V: Vocabulary> Vocabulary for Scope<V>
where
    V::Output: Clone,
{
    type Output = V::Output;

    fn is_value_char(&self, c: char) -> bool {
        self.inner.is_value_char(c)
    }

    fn parse_value(&self, literal: &str) -> Option<Self::Output> {
        self.inner.parse_value(literal)
    }

    fn after_value(&self, c: char) -> Option<TokenKind<Self::Output>> {
        self.inner.after_value(c)
    }

    fn elsewhere(&self, c: char) -> Option<TokenKind<Self::Output>> {
        self.inner.elsewhere(c)
    }

    fn parse_word(&self, word: &str) -> Option<TokenKind<Self::Output>> {
        self.inner
            .parse_word(word)
            .or_else(|| self.variables.get(word).cloned().map(TokenKind::Value))
    }

    fn is_special(&self, c: char) -> bool {
        self.inner.is_special(c)
    }
}
