//! Abstract Syntax Tree (AST) definitions
//!
//! Two node families: [`Expr`] produces a value, [`Stmt`] mutates a scope.
//! The tree is strictly owned top-down; a parent exclusively owns its children.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AST schema version
///
/// Included in JSON dumps. Increment when making breaking changes to the
/// AST structure.
pub const AST_VERSION: u32 = 1;

/// A parsed program: one root statement, or nothing for an empty source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub root: Option<Stmt>,
}

impl Program {
    /// Build a program from top-level statements, folding them into a
    /// left-nested sequence
    pub fn from_statements(statements: Vec<Stmt>) -> Self {
        Self {
            root: Stmt::sequence(statements),
        }
    }
}

impl Drop for Program {
    // The derived drop glue recurses once per sequence link, so long programs
    // are unlinked through a work list instead.
    fn drop(&mut self) {
        let mut pending: Vec<Stmt> = self.root.take().into_iter().collect();
        while let Some(stmt) = pending.pop() {
            match stmt {
                Stmt::Sequence(sequence) => {
                    pending.push(*sequence.first);
                    pending.push(*sequence.second);
                }
                Stmt::Block(block) => pending.push(*block.body),
                Stmt::Conditional(conditional) => pending.push(*conditional.body),
                Stmt::FunctionDecl(decl) => pending.push(*decl.body),
                _ => {}
            }
        }
    }
}

/// Versioned AST wrapper for JSON serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedProgram {
    /// AST schema version
    pub ast_version: u32,
    /// The actual program AST
    #[serde(flatten)]
    pub program: Program,
}

impl VersionedProgram {
    /// Create a new versioned program wrapper
    pub fn new(program: Program) -> Self {
        Self {
            ast_version: AST_VERSION,
            program,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Program> for VersionedProgram {
    fn from(program: Program) -> Self {
        Self::new(program)
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// `let x = e;` or `x = e;`
    Assign(AssignStmt),
    /// Two statements run in order, the second skipped once the run terminated
    Sequence(SequenceStmt),
    /// `{ ... }`; introduces no scope on its own
    Block(BlockStmt),
    /// `if (c) { ... }` or `while (c) { ... }`
    Conditional(ConditionalStmt),
    FunctionDecl(FunctionDecl),
    /// A call whose result (if any) is discarded
    Call(CallExpr),
    Return(ReturnStmt),
    Print(PrintStmt),
}

/// Variable declaration (`reassignment == false`) or reassignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    pub name: Identifier,
    pub value: Expr,
    pub reassignment: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStmt {
    pub first: Box<Stmt>,
    pub second: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStmt {
    pub body: Box<Stmt>,
    pub span: Span,
}

/// Unified if/while construct
///
/// A non-repeating conditional runs its body at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub repeating: bool,
    pub span: Span,
}

/// Function declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

/// `print x;` dumps one variable as `x = Kind: value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintStmt {
    pub name: Identifier,
    pub span: Span,
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Literal, Span),
    Group(GroupExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Variable(Identifier),
    Call(CallExpr),
}

/// Grouped expression (parenthesized)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupExpr {
    pub expr: Box<Expr>,
    pub span: Span,
}

/// Unary expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
    pub span: Span,
}

/// Binary expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Function call
///
/// Arguments are variable names, never arbitrary expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Identifier,
    pub args: Vec<Identifier>,
    pub span: Span,
}

/// Literal value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    Bool(bool),
    Number(i32),
    String(String),
}

/// Identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Minus, // -
    Not,   // not
}

/// Binary operator, tagged by category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Arithmetic(ArithmeticOp),
    Logic(LogicOp),
    Comparison(ComparisonOp),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicOp {
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Minus => write!(f, "-"),
            UnaryOp::Not => write!(f, "not"),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Arithmetic(ArithmeticOp::Add) => "+",
            BinaryOp::Arithmetic(ArithmeticOp::Sub) => "-",
            BinaryOp::Arithmetic(ArithmeticOp::Mul) => "*",
            BinaryOp::Arithmetic(ArithmeticOp::Div) => "/",
            BinaryOp::Arithmetic(ArithmeticOp::Mod) => "%",
            BinaryOp::Logic(LogicOp::And) => "and",
            BinaryOp::Logic(LogicOp::Or) => "or",
            BinaryOp::Logic(LogicOp::Xor) => "xor",
            BinaryOp::Comparison(ComparisonOp::Eq) => "==",
            BinaryOp::Comparison(ComparisonOp::Ne) => "!=",
            BinaryOp::Comparison(ComparisonOp::Lt) => "<",
            BinaryOp::Comparison(ComparisonOp::Le) => "<=",
            BinaryOp::Comparison(ComparisonOp::Gt) => ">",
            BinaryOp::Comparison(ComparisonOp::Ge) => ">=",
        };
        write!(f, "{}", symbol)
    }
}

// Helper methods for getting spans from AST nodes

impl Expr {
    /// Get the span of this expression
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(_, span) => *span,
            Expr::Group(g) => g.span,
            Expr::Unary(u) => u.span,
            Expr::Binary(b) => b.span,
            Expr::Variable(id) => id.span,
            Expr::Call(c) => c.span,
        }
    }
}

impl Stmt {
    /// Get the span of this statement
    pub fn span(&self) -> Span {
        match self {
            Stmt::Assign(a) => a.span,
            Stmt::Sequence(s) => s.span,
            Stmt::Block(b) => b.span,
            Stmt::Conditional(c) => c.span,
            Stmt::FunctionDecl(f) => f.span,
            Stmt::Call(c) => c.span,
            Stmt::Return(r) => r.span,
            Stmt::Print(p) => p.span,
        }
    }

    /// Fold statements into one left-nested [`Stmt::Sequence`]
    ///
    /// `[a, b, c]` becomes `Sequence(Sequence(a, b), c)`; a single statement
    /// is returned as is.
    pub fn sequence(statements: Vec<Stmt>) -> Option<Stmt> {
        statements.into_iter().reduce(|first, second| {
            let span = first.span().merge(second.span());
            Stmt::Sequence(SequenceStmt {
                first: Box::new(first),
                second: Box::new(second),
                span,
            })
        })
    }

    /// The statements of a sequence in execution order
    ///
    /// Any other statement yields itself. The walk uses a work list, so a
    /// sequence of any length is flattened without recursion.
    pub fn sequence_items(&self) -> Vec<&Stmt> {
        let mut items = Vec::new();
        let mut pending = vec![self];
        while let Some(stmt) = pending.pop() {
            match stmt {
                Stmt::Sequence(sequence) => {
                    pending.push(&sequence.second);
                    pending.push(&sequence.first);
                }
                other => items.push(other),
            }
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print(name: &str, start: usize) -> Stmt {
        Stmt::Print(PrintStmt {
            name: Identifier::new(name, Span::new(start + 6, start + 7)),
            span: Span::new(start, start + 8),
        })
    }

    #[test]
    fn test_empty_program() {
        let program = Program::from_statements(vec![]);
        assert!(program.root.is_none());
    }

    #[test]
    fn test_single_statement_is_not_wrapped() {
        let program = Program::from_statements(vec![print("a", 0)]);
        assert!(matches!(program.root, Some(Stmt::Print(_))));
    }

    #[test]
    fn test_sequence_is_left_nested() {
        let root = Stmt::sequence(vec![print("a", 0), print("b", 9), print("c", 18)]).unwrap();

        let Stmt::Sequence(outer) = root else {
            panic!("expected sequence");
        };
        assert_eq!(outer.span, Span::new(0, 26));
        assert!(matches!(*outer.second, Stmt::Print(ref p) if p.name.name == "c"));

        let Stmt::Sequence(inner) = *outer.first else {
            panic!("expected nested sequence");
        };
        assert!(matches!(*inner.first, Stmt::Print(ref p) if p.name.name == "a"));
        assert!(matches!(*inner.second, Stmt::Print(ref p) if p.name.name == "b"));
    }

    #[test]
    fn test_sequence_items_in_order() {
        let root = Stmt::sequence(vec![print("a", 0), print("b", 9), print("c", 18)]).unwrap();
        let names: Vec<_> = root
            .sequence_items()
            .into_iter()
            .map(|stmt| match stmt {
                Stmt::Print(p) => p.name.name.as_str(),
                other => panic!("expected print, got {:?}", other),
            })
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_long_program_drops_without_recursion() {
        let statements = (0..200_000).map(|i| print("a", i * 9)).collect();
        let program = Program::from_statements(statements);
        assert_eq!(program.root.as_ref().unwrap().sequence_items().len(), 200_000);
        drop(program);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(BinaryOp::Logic(LogicOp::Xor).to_string(), "xor");
        assert_eq!(BinaryOp::Comparison(ComparisonOp::Le).to_string(), "<=");
        assert_eq!(UnaryOp::Not.to_string(), "not");
    }

    #[test]
    fn test_versioned_program_json() {
        let program = Program::from_statements(vec![Stmt::Assign(AssignStmt {
            name: Identifier::new("x", Span::new(4, 5)),
            value: Expr::Literal(Literal::Number(42), Span::new(8, 10)),
            reassignment: false,
            span: Span::new(0, 11),
        })]);

        let versioned = VersionedProgram::new(program.clone());
        let json = versioned.to_json().unwrap();
        assert!(json.contains("\"ast_version\": 1"));
        assert!(json.contains("\"Assign\""));

        let back = VersionedProgram::from_json(&json).unwrap();
        assert_eq!(back.program, program);
    }
}
