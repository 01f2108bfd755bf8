//! AST interpreter (tree-walking)
//!
//! Direct AST evaluation over an arena-backed scope chain.
//! - Expression evaluation: literals, grouping, operators, variables, calls
//! - Statement execution: declarations, sequences, if/while, functions, return, print
//! - Run frames carrying the termination flag and result slot of one call

mod expr;
mod scope;
mod stmt;

pub use expr::apply_binary;
pub use scope::RunFrame;

use crate::ast::Program;
use crate::value::{RuntimeError, Value, Variable};
use scope::ScopeArena;
use std::fmt;

/// Maximum number of body passes of a repeating conditional
pub const ITERATION_LIMIT: usize = 1 << 13;

/// Maximum nesting of function calls
pub const CALL_DEPTH_LIMIT: usize = 128;

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Value deposited by a top-level `return`, if any
    pub result: Option<Value>,
    /// Variables declared directly in the root scope, in declaration order
    pub globals: Vec<Variable>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Some(value) => writeln!(f, "Executed with result: {}", value)?,
            None => writeln!(f, "Executed without result.")?,
        }
        for variable in &self.globals {
            writeln!(f, "{}", variable)?;
        }
        Ok(())
    }
}

/// Interpreter state
pub struct Interpreter<'ast> {
    arena: ScopeArena<'ast>,
    /// Number of calls currently executing
    call_depth: usize,
    /// Lines written by `print` statements
    output: Vec<String>,
}

impl<'ast> Interpreter<'ast> {
    /// Create a new interpreter
    pub fn new() -> Self {
        Self {
            arena: ScopeArena::new(),
            call_depth: 0,
            output: Vec::new(),
        }
    }

    /// Execute a program in a fresh root scope
    ///
    /// The first runtime error aborts the whole run.
    pub fn run(&mut self, program: &'ast Program) -> Result<RunReport, RuntimeError> {
        self.arena = ScopeArena::new();
        self.call_depth = 0;
        self.output.clear();

        let frame = self.arena.push_frame();
        let root = self.arena.push_scope(None, frame);

        if let Some(statement) = &program.root {
            self.execute(statement, root)?;
        }

        let globals = self.arena.pop_scope(root);
        let frame = self.arena.pop_frame();
        tracing::debug!(
            has_result = frame.result.is_some(),
            globals = globals.len(),
            "run completed"
        );

        Ok(RunReport {
            result: frame.result,
            globals,
        })
    }

    /// Lines printed so far in the current run
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Take the printed lines, leaving the buffer empty
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Self::new()
    }
}
