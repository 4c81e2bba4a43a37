use std::fmt::Display;

use infix::{Evaluator, SyntaxError, Vocabulary};
use itertools::Itertools;
use vocab::Scope;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Show {
    Result,
    Tokens,
    Postfix,
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Quit,
    Print(String),
    Error(String),
}

fn report(input: &str, err: &SyntaxError) -> Outcome {
    Outcome::Error(format!("{input}\n{}\n{err}", err.underline(input)))
}

/// REPL state: the vocabulary plus everything the user has bound so far.
pub struct Context<V: Vocabulary> {
    scope: Scope<V>,
}

impl<V> Context<V>
where
    V: Vocabulary,
    V::Output: Display + Clone,
{
    pub fn new(vocabulary: V) -> Self {
        Context {
            scope: Scope::new(vocabulary),
        }
    }

    fn update_ans(&mut self, value: V::Output) {
        if let Err(err) = self.scope.define("ans", value) {
            tracing::warn!(%err, "could not store ans");
        }
    }

    fn show(&mut self, input: &str, show: Show) -> Outcome {
        let evaluator = Evaluator::new(&self.scope);
        let shown = match show {
            Show::Tokens => evaluator
                .tokenize(input)
                .map(|tokens| tokens.iter().join(" ")),
            Show::Postfix => evaluator
                .to_postfix(input)
                .map(|postfix| postfix.iter().join(" ")),
            Show::Result => match evaluator.evaluate(input) {
                Ok(value) => {
                    let shown = format!("= {value}");
                    self.update_ans(value);
                    Ok(shown)
                }
                Err(err) => Err(err),
            },
        };
        match shown {
            Ok(shown) => Outcome::Print(shown),
            Err(err) => report(input, &err),
        }
    }

    fn assign(&mut self, name: &str, input: &str) -> Outcome {
        let value = match Evaluator::new(&self.scope).evaluate(input) {
            Ok(value) => value,
            Err(err) => return report(input, &err),
        };
        let shown = format!("{name} = {value}");
        match self.scope.define(name, value) {
            Ok(_) => Outcome::Print(shown),
            Err(err) => Outcome::Error(err.to_string()),
        }
    }

    pub fn execute(&mut self, input: &str, default: Show) -> Outcome {
        let input = input.trim();
        match input {
            "quit" => Outcome::Quit,
            "vars" => Outcome::Print(
                self.scope
                    .names()
                    .sorted()
                    .map(|name| match self.scope.get(name) {
                        Some(value) => format!("{name} = {value}"),
                        None => name.to_string(),
                    })
                    .join("\n"),
            ),
            _ if input.starts_with(":tokens ") => self.show(&input[8..], Show::Tokens),
            _ if input.starts_with(":postfix ") => self.show(&input[9..], Show::Postfix),
            _ if input.starts_with("let ") => match input[4..].split_once('=') {
                Some((name, expr)) => self.assign(name.trim(), expr.trim()),
                None => Outcome::Error("expected `let <name> = <expression>`".to_string()),
            },
            _ => self.show(input, default),
        }
    }
}
