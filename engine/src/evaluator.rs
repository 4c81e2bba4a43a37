use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    error::SyntaxError,
    postfix,
    shunting_yard::ShuntingYard,
    token::{PostfixToken, Token},
    tokenizer::Tokenizer,
    Vocabulary,
};

/// Runs the full pipeline: text, tokens, postfix, result.
///
/// An `Evaluator` never mutates itself, so one instance can serve any number
/// of threads at once.
#[derive(Clone, Debug, Default)]
pub struct Evaluator<V> {
    vocabulary: V,
}

impl<V: Vocabulary> Evaluator<V> {
    pub fn new(vocabulary: V) -> Self {
        Evaluator { vocabulary }
    }

    pub fn vocabulary(&self) -> &V {
        &self.vocabulary
    }

    pub fn into_vocabulary(self) -> V {
        self.vocabulary
    }

    pub fn tokenize(&self, expression: &str) -> Result<Vec<Token<V::Output>>, SyntaxError> {
        Tokenizer::new(&self.vocabulary, expression).tokenize()
    }

    pub fn to_postfix(
        &self,
        expression: &str,
    ) -> Result<Vec<PostfixToken<V::Output>>, SyntaxError> {
        ShuntingYard::new().to_postfix(self.tokenize(expression)?)
    }

    pub fn evaluate(&self, expression: &str) -> Result<V::Output, SyntaxError> {
        #[cfg(feature = "tracy")]
        profiling::scope!("Evaluator::evaluate");
        tracing::debug!(expression, "evaluating");
        let result = self.to_postfix(expression).and_then(postfix::run);
        if let Err(err) = &result {
            tracing::debug!(expression, error = %err, "evaluation failed");
        }
        result
    }
}

impl<V> Evaluator<V>
where
    V: Vocabulary + Sync,
    V::Output: Send,
{
    /// Evaluates independent expressions in parallel, keeping input order.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<V::Output, SyntaxError>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "tracy")]
        profiling::scope!("Evaluator::evaluate_batch");
        tracing::debug!(count = expressions.len(), "evaluating batch");
        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }
}

/// Evaluates a single expression without keeping an [`Evaluator`] around.
pub fn evaluate<V: Vocabulary>(vocabulary: &V, expression: &str) -> Result<V::Output, SyntaxError> {
    Evaluator::new(vocabulary).evaluate(expression)
}
