//! Expression evaluation

use crate::ast::*;
use crate::interpreter::scope::ScopeId;
use crate::interpreter::Interpreter;
use crate::span::Span;
use crate::value::{RuntimeError, Side, Value, ValueKind};

impl<'ast> Interpreter<'ast> {
    /// Evaluate an expression against `scope`
    pub(super) fn evaluate(&mut self, expr: &'ast Expr, scope: ScopeId) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(lit, _) => Ok(Value::from(lit)),
            Expr::Group(group) => self.evaluate(&group.expr, scope),
            Expr::Unary(unary) => self.eval_unary(unary, scope),
            Expr::Binary(binary) => {
                let left = self.evaluate(&binary.left, scope)?;
                let right = self.evaluate(&binary.right, scope)?;
                apply_binary(binary.op, left, right, binary.span)
            }
            Expr::Variable(id) => self
                .arena
                .lookup_variable(scope, &id.name)
                .cloned()
                .ok_or_else(|| RuntimeError::UndefinedVariable {
                    name: id.name.clone(),
                    span: id.span,
                }),
            Expr::Call(call) => self.call(call, scope)?.ok_or_else(|| {
                RuntimeError::NoReturnValue {
                    name: call.callee.name.clone(),
                    span: call.span,
                }
            }),
        }
    }

    /// Unary operators hand their operand back unchanged
    fn eval_unary(&mut self, unary: &'ast UnaryExpr, scope: ScopeId) -> Result<Value, RuntimeError> {
        let operand = self.evaluate(&unary.expr, scope)?;
        tracing::debug!(op = %unary.op, "unary operator evaluated as pass-through");
        Ok(operand)
    }
}

/// Apply a binary operator to two already evaluated operands
///
/// Arithmetic wraps on overflow; division and modulo by zero fail.
pub fn apply_binary(op: BinaryOp, left: Value, right: Value, span: Span) -> Result<Value, RuntimeError> {
    match op {
        BinaryOp::Arithmetic(arithmetic) => {
            let (l, r) = match (&left, &right) {
                (Value::Number(l), Value::Number(r)) => (*l, *r),
                (Value::Number(_), other) => {
                    return Err(operand_error(op, Side::Right, other.kind(), span))
                }
                (other, _) => return Err(operand_error(op, Side::Left, other.kind(), span)),
            };
            arithmetic_op(arithmetic, l, r, span).map(Value::Number)
        }
        BinaryOp::Logic(logic) => {
            let (l, r) = match (&left, &right) {
                (Value::Logic(l), Value::Logic(r)) => (*l, *r),
                (Value::Logic(_), other) => {
                    return Err(operand_error(op, Side::Right, other.kind(), span))
                }
                (other, _) => return Err(operand_error(op, Side::Left, other.kind(), span)),
            };
            Ok(Value::Logic(match logic {
                LogicOp::And => l && r,
                LogicOp::Or => l || r,
                LogicOp::Xor => l != r,
            }))
        }
        BinaryOp::Comparison(comparison) => compare(op, comparison, &left, &right, span),
    }
}

fn arithmetic_op(op: ArithmeticOp, l: i32, r: i32, span: Span) -> Result<i32, RuntimeError> {
    match op {
        ArithmeticOp::Add => Ok(l.wrapping_add(r)),
        ArithmeticOp::Sub => Ok(l.wrapping_sub(r)),
        ArithmeticOp::Mul => Ok(l.wrapping_mul(r)),
        ArithmeticOp::Div if r == 0 => Err(RuntimeError::DivideByZero {
            op: "Division",
            span,
        }),
        ArithmeticOp::Div => Ok(l.wrapping_div(r)),
        ArithmeticOp::Mod if r == 0 => Err(RuntimeError::DivideByZero {
            op: "Modulo",
            span,
        }),
        ArithmeticOp::Mod => Ok(l.wrapping_rem(r)),
    }
}

fn compare(
    op: BinaryOp,
    comparison: ComparisonOp,
    left: &Value,
    right: &Value,
    span: Span,
) -> Result<Value, RuntimeError> {
    let outcome = match (left, right) {
        (Value::Logic(l), Value::Logic(r)) => match comparison {
            ComparisonOp::Eq => l == r,
            ComparisonOp::Ne => l != r,
            _ => return Err(RuntimeError::LogicOrdering { op, span }),
        },
        (Value::Number(l), Value::Number(r)) => match comparison {
            ComparisonOp::Eq => l == r,
            ComparisonOp::Ne => l != r,
            ComparisonOp::Lt => l < r,
            ComparisonOp::Le => l <= r,
            ComparisonOp::Gt => l > r,
            ComparisonOp::Ge => l >= r,
        },
        (Value::Text(_), _) => return Err(RuntimeError::TextComparison { op, span }),
        (other, mismatched) => {
            return Err(RuntimeError::ComparisonMismatch {
                left: other.kind(),
                right: mismatched.kind(),
                span,
            })
        }
    };
    Ok(Value::Logic(outcome))
}

fn operand_error(op: BinaryOp, side: Side, found: ValueKind, span: Span) -> RuntimeError {
    match op {
        BinaryOp::Logic(_) => RuntimeError::LogicOperand {
            op,
            side,
            found,
            span,
        },
        _ => RuntimeError::ArithmeticOperand {
            op,
            side,
            found,
            span,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arith(op: ArithmeticOp, l: i32, r: i32) -> Result<Value, RuntimeError> {
        apply_binary(
            BinaryOp::Arithmetic(op),
            Value::Number(l),
            Value::Number(r),
            Span::dummy(),
        )
    }

    fn cmp(op: ComparisonOp, l: Value, r: Value) -> Result<Value, RuntimeError> {
        apply_binary(BinaryOp::Comparison(op), l, r, Span::dummy())
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(arith(ArithmeticOp::Add, 2, 3), Ok(Value::Number(5)));
        assert_eq!(arith(ArithmeticOp::Sub, 2, 3), Ok(Value::Number(-1)));
        assert_eq!(arith(ArithmeticOp::Mul, -4, 3), Ok(Value::Number(-12)));
        assert_eq!(arith(ArithmeticOp::Div, -7, 2), Ok(Value::Number(-3)));
        assert_eq!(arith(ArithmeticOp::Mod, -7, 2), Ok(Value::Number(-1)));
    }

    #[test]
    fn test_arithmetic_wraps() {
        assert_eq!(arith(ArithmeticOp::Add, i32::MAX, 1), Ok(Value::Number(i32::MIN)));
        assert_eq!(arith(ArithmeticOp::Div, i32::MIN, -1), Ok(Value::Number(i32::MIN)));
        assert_eq!(arith(ArithmeticOp::Mod, i32::MIN, -1), Ok(Value::Number(0)));
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(
            arith(ArithmeticOp::Div, 1, 0),
            Err(RuntimeError::DivideByZero { op: "Division", .. })
        ));
        assert!(matches!(
            arith(ArithmeticOp::Mod, 1, 0),
            Err(RuntimeError::DivideByZero { op: "Modulo", .. })
        ));
    }

    #[test]
    fn test_arithmetic_names_failing_side() {
        let op = BinaryOp::Arithmetic(ArithmeticOp::Add);
        let left = apply_binary(op, Value::text("a"), Value::Number(1), Span::dummy());
        let right = apply_binary(op, Value::Number(1), Value::Logic(true), Span::dummy());

        assert!(matches!(
            left,
            Err(RuntimeError::ArithmeticOperand { side: Side::Left, found: ValueKind::Text, .. })
        ));
        assert!(matches!(
            right,
            Err(RuntimeError::ArithmeticOperand { side: Side::Right, found: ValueKind::Logic, .. })
        ));
    }

    #[test]
    fn test_logic_does_not_accept_numbers() {
        let op = BinaryOp::Logic(LogicOp::And);
        let result = apply_binary(op, Value::Logic(true), Value::Number(1), Span::dummy());
        assert!(matches!(
            result,
            Err(RuntimeError::LogicOperand { side: Side::Right, .. })
        ));
    }

    #[test]
    fn test_logic_comparisons() {
        assert_eq!(
            cmp(ComparisonOp::Eq, Value::Logic(true), Value::Logic(true)),
            Ok(Value::Logic(true))
        );
        assert_eq!(
            cmp(ComparisonOp::Ne, Value::Logic(true), Value::Logic(false)),
            Ok(Value::Logic(true))
        );
        assert!(matches!(
            cmp(ComparisonOp::Lt, Value::Logic(true), Value::Logic(false)),
            Err(RuntimeError::LogicOrdering { .. })
        ));
    }

    #[test]
    fn test_comparison_kind_rules() {
        assert!(matches!(
            cmp(ComparisonOp::Eq, Value::Logic(true), Value::Number(1)),
            Err(RuntimeError::ComparisonMismatch {
                left: ValueKind::Logic,
                right: ValueKind::Number,
                ..
            })
        ));
        assert!(matches!(
            cmp(ComparisonOp::Eq, Value::text("a"), Value::text("a")),
            Err(RuntimeError::TextComparison { .. })
        ));
        assert!(matches!(
            cmp(ComparisonOp::Eq, Value::Number(1), Value::text("1")),
            Err(RuntimeError::ComparisonMismatch { .. })
        ));
    }
}
