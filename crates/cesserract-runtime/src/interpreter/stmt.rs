//! Statement execution and the call protocol

use crate::ast::*;
use crate::interpreter::scope::{Function, ScopeId};
use crate::interpreter::{Interpreter, CALL_DEPTH_LIMIT, ITERATION_LIMIT};
use crate::value::{RuntimeError, Value, Variable};

impl<'ast> Interpreter<'ast> {
    /// Execute a statement in `scope`
    pub(super) fn execute(&mut self, stmt: &'ast Stmt, scope: ScopeId) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Assign(assign) => self.exec_assign(assign, scope),
            Stmt::Sequence(_) => {
                for item in stmt.sequence_items() {
                    if self.arena.frame(scope).terminated {
                        break;
                    }
                    self.execute(item, scope)?;
                }
                Ok(())
            }
            Stmt::Block(block) => self.execute(&block.body, scope),
            Stmt::Conditional(conditional) => self.exec_conditional(conditional, scope),
            Stmt::FunctionDecl(decl) => self.arena.declare_function(
                scope,
                Function {
                    name: &decl.name.name,
                    params: &decl.params,
                    body: &decl.body,
                },
                decl.name.span,
            ),
            Stmt::Call(call) => self.call(call, scope).map(|_| ()),
            Stmt::Return(ret) => self.exec_return(ret, scope),
            Stmt::Print(print) => self.exec_print(print, scope),
        }
    }

    /// Declare a new variable or reassign an existing one
    fn exec_assign(&mut self, assign: &'ast AssignStmt, scope: ScopeId) -> Result<(), RuntimeError> {
        let name = &assign.name.name;

        if !assign.reassignment {
            let value = self.evaluate(&assign.value, scope)?;
            return self
                .arena
                .declare_variable(scope, Variable::new(name.clone(), value), assign.name.span);
        }

        if self.arena.lookup_variable(scope, name).is_none() {
            return Err(RuntimeError::UndefinedVariable {
                name: name.clone(),
                span: assign.name.span,
            });
        }
        let value = self.evaluate(&assign.value, scope)?;
        match self.arena.lookup_variable_mut(scope, name) {
            Some(target) => target.reassign(name, value, assign.span),
            None => Err(RuntimeError::UndefinedVariable {
                name: name.clone(),
                span: assign.name.span,
            }),
        }
    }

    /// Run an if (one pass at most) or a while loop
    ///
    /// Every pass gets a fresh child scope sharing the enclosing run frame.
    /// The condition is evaluated in `scope`, after the termination check.
    fn exec_conditional(
        &mut self,
        conditional: &'ast ConditionalStmt,
        scope: ScopeId,
    ) -> Result<(), RuntimeError> {
        let max_passes = if conditional.repeating {
            ITERATION_LIMIT
        } else {
            1
        };
        let frame = self.arena.frame_of(scope);
        let mut passes = 0;

        loop {
            if self.arena.frame(scope).terminated || !self.condition_holds(conditional, scope)? {
                break;
            }
            if passes == max_passes {
                return Err(RuntimeError::IterationLimit {
                    limit: ITERATION_LIMIT,
                    span: conditional.span,
                });
            }

            let body_scope = self.arena.push_scope(Some(scope), frame);
            let outcome = self.execute(&conditional.body, body_scope);
            self.arena.pop_scope(body_scope);
            outcome?;
            passes += 1;

            if !conditional.repeating {
                break;
            }
        }

        if conditional.repeating {
            tracing::debug!(iterations = passes, "loop finished");
        }
        Ok(())
    }

    fn condition_holds(
        &mut self,
        conditional: &'ast ConditionalStmt,
        scope: ScopeId,
    ) -> Result<bool, RuntimeError> {
        match self.evaluate(&conditional.condition, scope)? {
            Value::Logic(holds) => Ok(holds),
            other => Err(RuntimeError::NonBooleanCondition {
                found: other.kind(),
                span: conditional.condition.span(),
            }),
        }
    }

    /// Deposit the result of the current call and stop it
    fn exec_return(&mut self, ret: &'ast ReturnStmt, scope: ScopeId) -> Result<(), RuntimeError> {
        let value = self.evaluate(&ret.value, scope)?;
        let frame = self.arena.frame_mut(scope);
        if frame.result.is_some() {
            return Err(RuntimeError::ResultAlreadySet { span: ret.span });
        }
        frame.result = Some(value);
        frame.terminated = true;
        Ok(())
    }

    fn exec_print(&mut self, print: &'ast PrintStmt, scope: ScopeId) -> Result<(), RuntimeError> {
        let name = &print.name.name;
        let value = self.arena.lookup_variable(scope, name).ok_or_else(|| {
            RuntimeError::UndefinedVariable {
                name: name.clone(),
                span: print.name.span,
            }
        })?;
        let line = format!("{} = {}", name, value);
        tracing::debug!(%line, "print");
        self.output.push(line);
        Ok(())
    }

    /// Call a function from the call-site scope `scope`
    ///
    /// Arguments are variable names resolved in the call-site scope. The
    /// call body runs in a new scope whose parent is the call-site scope,
    /// under a new run frame. Returns whatever the body deposited with `return`.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %call.callee.name))]
    pub(super) fn call(
        &mut self,
        call: &'ast CallExpr,
        scope: ScopeId,
    ) -> Result<Option<Value>, RuntimeError> {
        let name = &call.callee.name;
        let function = self.arena.lookup_function(scope, name).ok_or_else(|| {
            RuntimeError::UnknownFunction {
                name: name.clone(),
                span: call.callee.span,
            }
        })?;

        if function.params.len() != call.args.len() {
            return Err(RuntimeError::ArityMismatch {
                name: name.clone(),
                expected: function.params.len(),
                found: call.args.len(),
                span: call.span,
            });
        }
        if self.call_depth >= CALL_DEPTH_LIMIT {
            return Err(RuntimeError::CallDepthExceeded {
                limit: CALL_DEPTH_LIMIT,
                span: call.span,
            });
        }

        let mut bindings = Vec::with_capacity(call.args.len());
        for (param, arg) in function.params.iter().zip(&call.args) {
            let value = self.arena.lookup_variable(scope, &arg.name).cloned().ok_or_else(|| {
                RuntimeError::MissingArgument {
                    function: name.clone(),
                    name: arg.name.clone(),
                    span: arg.span,
                }
            })?;
            bindings.push((Variable::new(param.name.clone(), value), param.span));
        }

        let frame = self.arena.push_frame();
        let call_scope = self.arena.push_scope(Some(scope), frame);
        self.call_depth += 1;

        let outcome = self.run_body(function, bindings, call_scope);

        self.call_depth -= 1;
        self.arena.pop_scope(call_scope);
        let finished = self.arena.pop_frame();
        outcome?;

        tracing::debug!(returned = finished.result.is_some(), "call finished");
        Ok(finished.result)
    }

    fn run_body(
        &mut self,
        function: Function<'ast>,
        bindings: Vec<(Variable, crate::span::Span)>,
        call_scope: ScopeId,
    ) -> Result<(), RuntimeError> {
        for (variable, span) in bindings {
            self.arena.declare_variable(call_scope, variable, span)?;
        }
        self.execute(function.body, call_scope)
    }
}
