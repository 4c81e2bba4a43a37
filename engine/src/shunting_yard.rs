use std::ops::RangeInclusive;

use crate::{
    error::{Syntax, SyntaxError},
    token::{
        Associativity, Function, Operator, Paren, PostfixKind, PostfixToken, Precedence, Token,
        TokenKind,
    },
};

/// Entries waiting on the operator stack.
enum Pending<R> {
    Operator(Operator<R>, RangeInclusive<usize>),
    Function(Function<R>, RangeInclusive<usize>),
    Open(RangeInclusive<usize>),
}

impl<R> Pending<R> {
    fn precedence(&self) -> Precedence {
        match self {
            Pending::Operator(op, _) => op.precedence(),
            Pending::Function(func, _) => func.precedence(),
            Pending::Open(_) => Precedence::GROUPING,
        }
    }
}

/// Arguments seen so far inside one pair of parentheses.
#[derive(Default)]
struct Group {
    completed: usize,
    current: bool,
}

impl Group {
    fn count(&self) -> usize {
        self.completed + self.current as usize
    }
}

/// Converts infix tokens to postfix order with Dijkstra's shunting-yard
/// algorithm.
pub struct ShuntingYard<R> {
    output: Vec<PostfixToken<R>>,
    stack: Vec<Pending<R>>,
    groups: Vec<Group>,
}

impl<R> Default for ShuntingYard<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ShuntingYard<R> {
    pub fn new() -> Self {
        ShuntingYard {
            output: Vec::new(),
            stack: Vec::new(),
            groups: Vec::new(),
        }
    }

    fn emit(&mut self, pending: Pending<R>) {
        let token = match pending {
            Pending::Operator(op, span) => PostfixToken::new(PostfixKind::Operator(op), span),
            Pending::Function(func, span) => PostfixToken::new(PostfixKind::Function(func), span),
            // Callers never emit grouping markers.
            Pending::Open(_) => return,
        };
        self.output.push(token);
    }

    /// Marks the innermost argument as non-empty.
    fn argument(&mut self) {
        if let Some(group) = self.groups.last_mut() {
            group.current = true;
        }
    }

    /// Pops to the output until an open paren is on top, leaving it there.
    fn unwind(&mut self, span: &RangeInclusive<usize>) -> Result<(), SyntaxError> {
        loop {
            match self.stack.pop() {
                Some(Pending::Open(open)) => {
                    self.stack.push(Pending::Open(open));
                    return Ok(());
                }
                Some(pending) => self.emit(pending),
                None => {
                    return Err(SyntaxError::new(
                        Syntax::MismatchedParentheses,
                        span.clone(),
                    ))
                }
            }
        }
    }

    fn operator(&mut self, op: Operator<R>, span: RangeInclusive<usize>) {
        while let Some(top) = self.stack.last() {
            let precedence = top.precedence();
            let pops = precedence > op.precedence()
                || (precedence == op.precedence()
                    && op.associativity() == Associativity::Left);
            if !pops {
                break;
            }
            if let Some(pending) = self.stack.pop() {
                self.emit(pending);
            }
        }
        self.stack.push(Pending::Operator(op, span));
    }

    fn separator(&mut self, span: RangeInclusive<usize>) -> Result<(), SyntaxError> {
        self.unwind(&span)?;
        match self.groups.last_mut() {
            Some(group) if group.current => {
                group.completed += 1;
                group.current = false;
                Ok(())
            }
            _ => Err(SyntaxError::new(Syntax::MalformedExpression, span)),
        }
    }

    fn close(&mut self, span: RangeInclusive<usize>) -> Result<(), SyntaxError> {
        self.unwind(&span)?;
        self.stack.pop();
        let group = self.groups.pop().unwrap_or_default();
        if group.completed > 0 && !group.current {
            // Trailing separator, as in `f(1,)`.
            return Err(SyntaxError::new(Syntax::MalformedExpression, span));
        }
        let expected = match self.stack.last() {
            Some(Pending::Function(func, _)) => func.arity(),
            _ => 1,
        };
        if group.count() != expected {
            return Err(SyntaxError::new(Syntax::MalformedExpression, span));
        }
        if let Some(Pending::Function(..)) = self.stack.last() {
            if let Some(func) = self.stack.pop() {
                self.emit(func);
            }
        }
        Ok(())
    }

    pub fn to_postfix(
        mut self,
        tokens: Vec<Token<R>>,
    ) -> Result<Vec<PostfixToken<R>>, SyntaxError> {
        #[cfg(feature = "tracy")]
        profiling::scope!("ShuntingYard::to_postfix");
        for Token { kind, span } in tokens {
            match kind {
                TokenKind::Value(value) => {
                    self.argument();
                    self.output
                        .push(PostfixToken::new(PostfixKind::Value(value), span));
                }
                TokenKind::Operator(op) => {
                    self.argument();
                    self.operator(op, span);
                }
                TokenKind::Function(func) => {
                    self.argument();
                    self.stack.push(Pending::Function(func, span));
                }
                TokenKind::Paren(Paren::Open) => {
                    self.argument();
                    self.stack.push(Pending::Open(span));
                    self.groups.push(Group::default());
                }
                TokenKind::Paren(Paren::Close) => self.close(span)?,
                TokenKind::ArgSeparator => self.separator(span)?,
            }
        }
        while let Some(pending) = self.stack.pop() {
            if let Pending::Open(span) = pending {
                return Err(SyntaxError::new(Syntax::MismatchedParentheses, span));
            }
            self.emit(pending);
        }
        tracing::trace!(postfix = self.output.len(), "converted to postfix");
        Ok(self.output)
    }
}
