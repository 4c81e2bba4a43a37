use std::ops::RangeInclusive;

use crate::{
    error::{Syntax, SyntaxError},
    token::{PostfixKind, PostfixToken},
};

fn malformed(span: RangeInclusive<usize>) -> SyntaxError {
    SyntaxError::new(Syntax::MalformedExpression, span)
}

/// Reduces a postfix sequence on a value stack.
pub fn run<R>(postfix: Vec<PostfixToken<R>>) -> Result<R, SyntaxError> {
    #[cfg(feature = "tracy")]
    profiling::scope!("postfix::run");
    let start = postfix.iter().map(|t| *t.span.start()).min().unwrap_or(0);
    let end = postfix.iter().map(|t| *t.span.end()).max().unwrap_or(0);

    let mut stack: Vec<R> = Vec::with_capacity(postfix.len());
    for PostfixToken { kind, span } in postfix {
        match kind {
            PostfixKind::Value(value) => stack.push(value),
            PostfixKind::Operator(op) => {
                let right = stack.pop().ok_or_else(|| malformed(span.clone()))?;
                let left = stack.pop().ok_or_else(|| malformed(span.clone()))?;
                stack.push(op.apply(left, right));
            }
            PostfixKind::Function(func) => {
                let arity = func.arity();
                if stack.len() < arity {
                    return Err(malformed(span));
                }
                let args = stack.split_off(stack.len() - arity);
                stack.push(func.apply(args));
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(malformed(start..=end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Function, Operator};

    fn value(v: i64) -> PostfixToken<i64> {
        PostfixToken::new(PostfixKind::Value(v), 0..=0)
    }

    fn sub() -> PostfixToken<i64> {
        PostfixToken::new(PostfixKind::Operator(Operator::left("-", 0, |a: i64, b| a - b)), 1..=1)
    }

    fn clamp() -> PostfixToken<i64> {
        PostfixToken::new(
            PostfixKind::Function(Function::nary("clamp", 3, |args: Vec<i64>| {
                args[0].clamp(args[1], args[2])
            })),
            2..=6,
        )
    }

    #[test]
    fn operand_order() {
        assert_eq!(run(vec![value(10), value(3), sub()]).unwrap(), 7);
        assert_eq!(run(vec![value(20), value(0), value(5), clamp()]).unwrap(), 5);
        assert_eq!(run(vec![value(-1), value(0), value(5), clamp()]).unwrap(), 0);
    }

    #[test]
    fn single_value() {
        assert_eq!(run(vec![value(4)]).unwrap(), 4);
    }

    #[test]
    fn underflow() {
        let err = run(vec![value(1), sub()]).unwrap_err();
        assert_eq!(err.kind, Syntax::MalformedExpression);
        assert_eq!(err.span, 1..=1);

        let err = run(vec![value(1), value(2), clamp()]).unwrap_err();
        assert_eq!(err.span, 2..=6);
    }

    #[test]
    fn leftover_values() {
        let err = run(vec![value(1), value(2)]).unwrap_err();
        assert_eq!(err.kind, Syntax::MalformedExpression);

        let err = run::<i64>(Vec::new()).unwrap_err();
        assert_eq!(err.kind, Syntax::MalformedExpression);
        assert_eq!(err.span, 0..=0);
    }
}
