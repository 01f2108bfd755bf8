//! Property tests for the binary operator table

use cesserract_runtime::ast::{ArithmeticOp, BinaryOp, ComparisonOp, LogicOp};
use cesserract_runtime::{apply_binary, RuntimeError, Span, Value};
use proptest::prelude::*;

fn arithmetic(op: ArithmeticOp, l: i32, r: i32) -> Result<Value, RuntimeError> {
    apply_binary(
        BinaryOp::Arithmetic(op),
        Value::Number(l),
        Value::Number(r),
        Span::dummy(),
    )
}

fn comparison(op: ComparisonOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    apply_binary(BinaryOp::Comparison(op), left, right, Span::dummy())
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Logic),
        any::<i32>().prop_map(Value::Number),
        "[a-z]{0,8}".prop_map(Value::Text),
    ]
}

proptest! {
    #[test]
    fn add_sub_mul_wrap(l in any::<i32>(), r in any::<i32>()) {
        prop_assert_eq!(arithmetic(ArithmeticOp::Add, l, r), Ok(Value::Number(l.wrapping_add(r))));
        prop_assert_eq!(arithmetic(ArithmeticOp::Sub, l, r), Ok(Value::Number(l.wrapping_sub(r))));
        prop_assert_eq!(arithmetic(ArithmeticOp::Mul, l, r), Ok(Value::Number(l.wrapping_mul(r))));
    }

    #[test]
    fn division_truncates_toward_zero(l in any::<i32>(), r in any::<i32>().prop_filter("non-zero", |r| *r != 0)) {
        prop_assert_eq!(arithmetic(ArithmeticOp::Div, l, r), Ok(Value::Number(l.wrapping_div(r))));
        prop_assert_eq!(arithmetic(ArithmeticOp::Mod, l, r), Ok(Value::Number(l.wrapping_rem(r))));
    }

    #[test]
    fn zero_divisor_is_an_error(l in any::<i32>()) {
        let is_divide_by_zero = matches!(
            arithmetic(ArithmeticOp::Div, l, 0),
            Err(RuntimeError::DivideByZero { .. })
        );
        prop_assert!(is_divide_by_zero);
        let is_divide_by_zero = matches!(
            arithmetic(ArithmeticOp::Mod, l, 0),
            Err(RuntimeError::DivideByZero { .. })
        );
        prop_assert!(is_divide_by_zero);
    }

    #[test]
    fn logic_matches_bool_ops(l in any::<bool>(), r in any::<bool>()) {
        let logic = |op| apply_binary(BinaryOp::Logic(op), Value::Logic(l), Value::Logic(r), Span::dummy());
        prop_assert_eq!(logic(LogicOp::And), Ok(Value::Logic(l && r)));
        prop_assert_eq!(logic(LogicOp::Or), Ok(Value::Logic(l || r)));
        prop_assert_eq!(logic(LogicOp::Xor), Ok(Value::Logic(l ^ r)));
    }

    #[test]
    fn number_comparisons_agree_with_i32(l in any::<i32>(), r in any::<i32>()) {
        let cmp = |op| comparison(op, Value::Number(l), Value::Number(r));
        prop_assert_eq!(cmp(ComparisonOp::Eq), Ok(Value::Logic(l == r)));
        prop_assert_eq!(cmp(ComparisonOp::Ne), Ok(Value::Logic(l != r)));
        prop_assert_eq!(cmp(ComparisonOp::Lt), Ok(Value::Logic(l < r)));
        prop_assert_eq!(cmp(ComparisonOp::Le), Ok(Value::Logic(l <= r)));
        prop_assert_eq!(cmp(ComparisonOp::Gt), Ok(Value::Logic(l > r)));
        prop_assert_eq!(cmp(ComparisonOp::Ge), Ok(Value::Logic(l >= r)));
    }

    #[test]
    fn operators_never_panic(left in any_value(), right in any_value()) {
        for op in [
            BinaryOp::Arithmetic(ArithmeticOp::Div),
            BinaryOp::Logic(LogicOp::Xor),
            BinaryOp::Comparison(ComparisonOp::Lt),
            BinaryOp::Comparison(ComparisonOp::Eq),
        ] {
            let _ = apply_binary(op, left.clone(), right.clone(), Span::dummy());
        }
    }

    #[test]
    fn mixed_kinds_never_compare(n in any::<i32>(), b in any::<bool>()) {
        let mismatch = matches!(
            comparison(ComparisonOp::Eq, Value::Number(n), Value::Logic(b)),
            Err(RuntimeError::ComparisonMismatch { .. })
        );
        prop_assert!(mismatch);
    }
}
