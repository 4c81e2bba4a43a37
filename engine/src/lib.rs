mod error;
mod evaluator;
pub mod postfix;
pub mod shunting_yard;
mod token;
pub mod tokenizer;
mod vocabulary;

#[cfg(test)]
mod testing;

pub use error::{Syntax, SyntaxError};
pub use evaluator::{evaluate, Evaluator};
pub use shunting_yard::ShuntingYard;
pub use token::{
    Associativity, Function, Operator, Paren, PostfixKind, PostfixToken, Precedence, Token,
    TokenKind,
};
pub use tokenizer::Tokenizer;
pub use vocabulary::Vocabulary;
