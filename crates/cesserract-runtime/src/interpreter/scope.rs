//! Scope chain and run frames
//!
//! Scopes live in an arena and are addressed by index. Each scope points at
//! an optional parent and at the run frame it shares with every other scope
//! created during the same call (or the top-level run). Scopes and frames
//! follow stack discipline: the most recently pushed one is popped first.

use crate::ast::{Identifier, Stmt};
use crate::span::Span;
use crate::value::{RuntimeError, Value, Variable};

pub(super) type ScopeId = usize;
pub(super) type FrameId = usize;

/// Early-termination flag and result slot shared across one call's scopes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFrame {
    pub terminated: bool,
    pub result: Option<Value>,
}

/// A declared function
///
/// Borrows its parameter list and body from the program being run.
#[derive(Debug, Clone, Copy)]
pub(super) struct Function<'ast> {
    pub(super) name: &'ast str,
    pub(super) params: &'ast [Identifier],
    pub(super) body: &'ast Stmt,
}

#[derive(Debug)]
struct Scope<'ast> {
    parent: Option<ScopeId>,
    frame: FrameId,
    variables: Vec<Variable>,
    functions: Vec<Function<'ast>>,
}

#[derive(Debug, Default)]
pub(super) struct ScopeArena<'ast> {
    scopes: Vec<Scope<'ast>>,
    frames: Vec<RunFrame>,
}

impl<'ast> ScopeArena<'ast> {
    pub(super) fn new() -> Self {
        Self {
            scopes: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Start a fresh run frame (program start or call boundary)
    pub(super) fn push_frame(&mut self) -> FrameId {
        self.frames.push(RunFrame::default());
        self.frames.len() - 1
    }

    /// Discard the innermost run frame and hand back its final state
    pub(super) fn pop_frame(&mut self) -> RunFrame {
        self.frames.pop().unwrap_or_default()
    }

    pub(super) fn push_scope(&mut self, parent: Option<ScopeId>, frame: FrameId) -> ScopeId {
        self.scopes.push(Scope {
            parent,
            frame,
            variables: Vec::new(),
            functions: Vec::new(),
        });
        let id = self.scopes.len() - 1;
        tracing::trace!(scope = id, ?parent, "scope pushed");
        id
    }

    /// Pop the innermost scope, returning the variables it owned
    pub(super) fn pop_scope(&mut self, id: ScopeId) -> Vec<Variable> {
        debug_assert_eq!(id + 1, self.scopes.len(), "scopes must be popped in order");
        tracing::trace!(scope = id, "scope popped");
        self.scopes
            .pop()
            .map(|scope| scope.variables)
            .unwrap_or_default()
    }

    /// Frame shared by `scope`
    pub(super) fn frame_of(&self, scope: ScopeId) -> FrameId {
        self.scopes[scope].frame
    }

    pub(super) fn frame(&self, scope: ScopeId) -> &RunFrame {
        &self.frames[self.scopes[scope].frame]
    }

    pub(super) fn frame_mut(&mut self, scope: ScopeId) -> &mut RunFrame {
        let frame = self.scopes[scope].frame;
        &mut self.frames[frame]
    }

    /// Declare a new variable directly in `scope`
    pub(super) fn declare_variable(
        &mut self,
        scope: ScopeId,
        variable: Variable,
        span: Span,
    ) -> Result<(), RuntimeError> {
        let variables = &mut self.scopes[scope].variables;
        if variables.iter().any(|v| v.name == variable.name) {
            return Err(RuntimeError::VariableRedeclared {
                name: variable.name,
                span,
            });
        }
        variables.push(variable);
        Ok(())
    }

    /// Declare a new function directly in `scope`
    pub(super) fn declare_function(
        &mut self,
        scope: ScopeId,
        function: Function<'ast>,
        span: Span,
    ) -> Result<(), RuntimeError> {
        let functions = &mut self.scopes[scope].functions;
        if functions.iter().any(|f| f.name == function.name) {
            return Err(RuntimeError::FunctionRedeclared {
                name: function.name.to_string(),
                span,
            });
        }
        functions.push(function);
        Ok(())
    }

    /// Iterate `scope` and its ancestors, innermost first
    fn chain(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), move |&id| self.scopes[id].parent)
    }

    /// Locate a variable as (owning scope, position) by walking the chain
    fn resolve(&self, scope: ScopeId, name: &str) -> Option<(ScopeId, usize)> {
        self.chain(scope).find_map(|id| {
            self.scopes[id]
                .variables
                .iter()
                .position(|v| v.name == name)
                .map(|index| (id, index))
        })
    }

    pub(super) fn lookup_variable(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        self.resolve(scope, name)
            .map(|(id, index)| &self.scopes[id].variables[index].value)
    }

    pub(super) fn lookup_variable_mut(&mut self, scope: ScopeId, name: &str) -> Option<&mut Value> {
        let (id, index) = self.resolve(scope, name)?;
        Some(&mut self.scopes[id].variables[index].value)
    }

    pub(super) fn lookup_function(&self, scope: ScopeId, name: &str) -> Option<Function<'ast>> {
        self.chain(scope)
            .find_map(|id| self.scopes[id].functions.iter().find(|f| f.name == name))
            .copied()
    }

    #[cfg(test)]
    pub(super) fn depth(&self) -> usize {
        self.scopes.len()
    }
}
