//! Runtime value representation
//!
//! Every value is one of three primitive kinds and is copied on every read.
//! A value's kind never changes; reassignment must keep it.

use crate::ast::{BinaryOp, Literal};
use crate::diagnostic::{error_codes, Diagnostic};
use crate::span::Span;
use std::fmt;
use thiserror::Error;

/// Runtime value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Logic(bool),
    Number(i32),
    Text(String),
}

/// Discriminant of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Logic,
    Number,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Logic => write!(f, "Logic"),
            ValueKind::Number => write!(f, "Number"),
            ValueKind::Text => write!(f, "Text"),
        }
    }
}

impl Value {
    /// Create a text value
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Logic(_) => ValueKind::Logic,
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Payload without the kind prefix: `True`/`False`, decimal, raw text
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Logic(true) => "True".to_string(),
            Value::Logic(false) => "False".to_string(),
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s.clone(),
        }
    }

    /// Replace the payload, keeping the kind
    ///
    /// Fails with [`RuntimeError::TypeChange`] when `new_value` has a
    /// different kind than the current value.
    pub fn reassign(&mut self, name: &str, new_value: Value, span: Span) -> Result<(), RuntimeError> {
        if self.kind() != new_value.kind() {
            return Err(RuntimeError::TypeChange {
                name: name.to_string(),
                from: self.kind(),
                to: new_value.kind(),
                span,
            });
        }
        *self = new_value;
        Ok(())
    }
}

/// Renders as `Kind: value`, e.g. `Number: 16`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.to_display_string())
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Bool(b) => Value::Logic(*b),
            Literal::Number(n) => Value::Number(*n),
            Literal::String(s) => Value::Text(s.clone()),
        }
    }
}

/// A name bound to a value, owned by exactly one scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Renders as `name = Kind: value`
impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Which operand of a binary operator failed a kind check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// Runtime error: any condition that makes a program illegal
///
/// All of these are fatal. The run aborts on the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("{side} operand must be a Number to execute arithmetic operation '{op}', found {found}.")]
    ArithmeticOperand {
        op: BinaryOp,
        side: Side,
        found: ValueKind,
        span: Span,
    },
    #[error("{side} operand must be a Logic value to execute logic operation '{op}', found {found}.")]
    LogicOperand {
        op: BinaryOp,
        side: Side,
        found: ValueKind,
        span: Span,
    },
    #[error("{left} value must be compared with other {left} value, found {right}.")]
    ComparisonMismatch {
        left: ValueKind,
        right: ValueKind,
        span: Span,
    },
    #[error("Logic value may not be a subject of comparison operation '{op}'.")]
    LogicOrdering { op: BinaryOp, span: Span },
    #[error("Text value can not be a subject of comparison operator '{op}'.")]
    TextComparison { op: BinaryOp, span: Span },
    #[error("Variable type can not be changed: '{name}' is {from}, assigned {to}.")]
    TypeChange {
        name: String,
        from: ValueKind,
        to: ValueKind,
        span: Span,
    },
    #[error("The value '{name}' does not exist.")]
    UndefinedVariable { name: String, span: Span },
    #[error("Value with name '{name}' is already declared.")]
    VariableRedeclared { name: String, span: Span },
    #[error("Function with name '{name}' is already declared.")]
    FunctionRedeclared { name: String, span: Span },
    #[error("Function '{name}' is not recognized.")]
    UnknownFunction { name: String, span: Span },
    #[error("Function argument '{name}' passed to '{function}' does not exist.")]
    MissingArgument {
        function: String,
        name: String,
        span: Span,
    },
    #[error("Function '{name}' takes {expected} argument(s) but {found} were passed.")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },
    #[error("Function '{name}' does not return anything.")]
    NoReturnValue { name: String, span: Span },
    #[error("The algorithm has already declared returned value.")]
    ResultAlreadySet { span: Span },
    #[error("Expression does not evaluate to boolean, found {found}.")]
    NonBooleanCondition { found: ValueKind, span: Span },
    #[error("Iteration count exceeded the limit of {limit}.")]
    IterationLimit { limit: usize, span: Span },
    #[error("{op} by zero.")]
    DivideByZero { op: &'static str, span: Span },
    #[error("Call depth exceeded the limit of {limit}.")]
    CallDepthExceeded { limit: usize, span: Span },
}

impl RuntimeError {
    /// Human reason text shown after "An error occurred during execution. Reason:"
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Get the source span for this error
    pub fn span(&self) -> Span {
        match self {
            RuntimeError::ArithmeticOperand { span, .. }
            | RuntimeError::LogicOperand { span, .. }
            | RuntimeError::ComparisonMismatch { span, .. }
            | RuntimeError::LogicOrdering { span, .. }
            | RuntimeError::TextComparison { span, .. }
            | RuntimeError::TypeChange { span, .. }
            | RuntimeError::UndefinedVariable { span, .. }
            | RuntimeError::VariableRedeclared { span, .. }
            | RuntimeError::FunctionRedeclared { span, .. }
            | RuntimeError::UnknownFunction { span, .. }
            | RuntimeError::MissingArgument { span, .. }
            | RuntimeError::ArityMismatch { span, .. }
            | RuntimeError::NoReturnValue { span, .. }
            | RuntimeError::ResultAlreadySet { span }
            | RuntimeError::NonBooleanCondition { span, .. }
            | RuntimeError::IterationLimit { span, .. }
            | RuntimeError::DivideByZero { span, .. }
            | RuntimeError::CallDepthExceeded { span, .. } => *span,
        }
    }

    /// Diagnostic code in the CS0xxx range
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::ArithmeticOperand { .. }
            | RuntimeError::LogicOperand { .. }
            | RuntimeError::ComparisonMismatch { .. }
            | RuntimeError::TypeChange { .. } => error_codes::TYPE_MISMATCH,
            RuntimeError::LogicOrdering { .. } | RuntimeError::TextComparison { .. } => {
                error_codes::INVALID_COMPARISON
            }
            RuntimeError::UndefinedVariable { .. } | RuntimeError::MissingArgument { .. } => {
                error_codes::UNDEFINED_VARIABLE
            }
            RuntimeError::VariableRedeclared { .. } | RuntimeError::FunctionRedeclared { .. } => {
                error_codes::DUPLICATE_DECLARATION
            }
            RuntimeError::UnknownFunction { .. } => error_codes::UNDEFINED_FUNCTION,
            RuntimeError::ArityMismatch { .. } => error_codes::ARITY_MISMATCH,
            RuntimeError::NoReturnValue { .. } => error_codes::MISSING_RESULT,
            RuntimeError::ResultAlreadySet { .. } => error_codes::RESULT_ALREADY_SET,
            RuntimeError::NonBooleanCondition { .. } => error_codes::NON_BOOLEAN_CONDITION,
            RuntimeError::IterationLimit { .. } => error_codes::ITERATION_LIMIT,
            RuntimeError::DivideByZero { .. } => error_codes::DIVIDE_BY_ZERO,
            RuntimeError::CallDepthExceeded { .. } => error_codes::CALL_DEPTH_LIMIT,
        }
    }

    /// Convert into a diagnostic located in `source`
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let mut diagnostic = Diagnostic::error_with_code(self.code(), self.reason(), self.span())
            .with_source(source, self.span())
            .with_label("program terminated here");
        if let Some(help) = error_codes::help_for(self.code()) {
            diagnostic = diagnostic.with_help(help);
        }
        diagnostic
    }
}
