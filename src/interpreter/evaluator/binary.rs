use log::trace;

use crate::{
    ast::{BinaryOperator, Chain},
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies an arithmetic operator to two numbers.
///
/// Standard IEEE-754 semantics apply, so results may overflow to infinity.
/// Only a divisor that is exactly zero (`0.0` or `-0.0`) is rejected.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` when dividing by zero.
///
/// # Example
/// ```
/// use infixcalc::{
///     ast::BinaryOperator,
///     error::EvalError,
///     interpreter::evaluator::binary::eval_scalar_op,
/// };
///
/// assert_eq!(eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0), Ok(3.0));
/// assert_eq!(eval_scalar_op(BinaryOperator::Div, 1.0, 0.0), Err(EvalError::DivisionByZero));
/// ```
pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    let value = match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            left / right
        },
    };
    trace!("{left} {op} {right} = {value}");
    Ok(value)
}

/// Applies every `*` and `/` in a chain, left to right.
///
/// Each multiplicative link is folded into the last operand collected so far;
/// additive links are kept as they are. The returned chain contains only `+`
/// and `-`.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` if a divisor is zero.
pub fn reduce_multiplicative(chain: Chain) -> EvalResult<Chain> {
    let mut reduced = Chain { first: chain.first,
                              links: Vec::with_capacity(chain.links.len()), };

    for (op, right) in chain.links {
        if !op.is_multiplicative() {
            reduced.links.push((op, right));
            continue;
        }
        let left = match reduced.links.last_mut() {
            Some((_, operand)) => operand,
            None => &mut reduced.first,
        };
        *left = eval_scalar_op(op, *left, right)?;
    }

    Ok(reduced)
}

/// Folds a chain of `+` and `-` links into a single number, left to right.
///
/// Expects a chain already passed through [`reduce_multiplicative`].
pub fn reduce_additive(chain: &Chain) -> EvalResult<f64> {
    chain.links
         .iter()
         .try_fold(chain.first, |acc, &(op, right)| eval_scalar_op(op, acc, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(first: f64, links: &[(BinaryOperator, f64)]) -> Chain {
        Chain { first,
                links: links.to_vec() }
    }

    #[test]
    fn scalar_ops() {
        assert_eq!(eval_scalar_op(BinaryOperator::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(eval_scalar_op(BinaryOperator::Sub, 2.0, 3.0), Ok(-1.0));
        assert_eq!(eval_scalar_op(BinaryOperator::Mul, 2.0, 3.0), Ok(6.0));
        assert_eq!(eval_scalar_op(BinaryOperator::Div, 3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn only_exact_zero_divisor_is_rejected() {
        assert_eq!(eval_scalar_op(BinaryOperator::Div, 1.0, -0.0), Err(EvalError::DivisionByZero));
        assert_eq!(eval_scalar_op(BinaryOperator::Div, 1.0, f64::MIN_POSITIVE),
                   Ok(1.0 / f64::MIN_POSITIVE));
        assert_eq!(eval_scalar_op(BinaryOperator::Div, f64::MAX, 0.5), Ok(f64::INFINITY));
    }

    #[test]
    fn multiplicative_pass_keeps_additive_links() {
        use BinaryOperator::{Add, Div, Mul, Sub};

        // 5*3+12/4-1
        let reduced = reduce_multiplicative(chain(5.0, &[(Mul, 3.0), (Add, 12.0), (Div, 4.0), (Sub, 1.0)])).unwrap();
        assert_eq!(reduced, chain(15.0, &[(Add, 3.0), (Sub, 1.0)]));
        assert_eq!(reduce_additive(&reduced), Ok(17.0));
    }

    #[test]
    fn multiplicative_pass_is_left_to_right() {
        use BinaryOperator::{Div, Mul};

        let reduced = reduce_multiplicative(chain(8.0, &[(Div, 2.0), (Mul, 4.0)])).unwrap();
        assert_eq!(reduced, chain(16.0, &[]));
    }

    #[test]
    fn multiplicative_pass_reports_division_by_zero() {
        use BinaryOperator::{Add, Div};

        assert_eq!(reduce_multiplicative(chain(1.0, &[(Add, 2.0), (Div, 0.0)])),
                   Err(EvalError::DivisionByZero));
    }

    #[test]
    fn additive_pass_is_left_to_right() {
        use BinaryOperator::{Add, Sub};

        assert_eq!(reduce_additive(&chain(10.0, &[(Sub, 4.0), (Sub, 3.0), (Add, 1.0)])), Ok(4.0));
    }
}
