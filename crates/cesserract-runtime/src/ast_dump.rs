//! Indented text rendering of a parsed program
//!
//! Each node is written on its own line, prefixed by one `-` per level of
//! depth below the `Tree Root` header.

use crate::ast::*;
use crate::value::Value;
use std::fmt::Write;

impl Program {
    /// Render the program as an indented tree
    ///
    /// ```
    /// use cesserract_runtime::Cesserract;
    ///
    /// let program = Cesserract::new().parse("let a = 1;").unwrap();
    /// assert_eq!(program.to_tree_string(), "Tree Root\na = ...\n-Number: 1\n");
    /// ```
    pub fn to_tree_string(&self) -> String {
        let mut dump = TreeDump::default();
        dump.buffer.push_str("Tree Root\n");
        if let Some(root) = &self.root {
            dump.stmt(root, 0);
        }
        dump.buffer
    }
}

#[derive(Default)]
struct TreeDump {
    buffer: String,
}

impl TreeDump {
    fn line(&mut self, depth: usize, text: impl std::fmt::Display) {
        for _ in 0..depth {
            self.buffer.push('-');
        }
        // Writing into a String cannot fail
        let _ = writeln!(self.buffer, "{}", text);
    }

    fn names(names: &[Identifier]) -> String {
        names
            .iter()
            .map(|n| n.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Statements are walked from a work list; sequence spines grow with
    /// program length and would otherwise recurse once per statement.
    fn stmt(&mut self, root: &Stmt, depth: usize) {
        let mut pending = vec![(root, depth)];
        while let Some((stmt, depth)) = pending.pop() {
            match stmt {
                Stmt::Assign(assign) => {
                    let marker = if assign.reassignment { ":=" } else { "=" };
                    self.line(depth, format_args!("{} {} ...", assign.name.name, marker));
                    self.expr(&assign.value, depth + 1);
                }
                Stmt::Sequence(sequence) => {
                    self.line(depth, "L/R:");
                    pending.push((&*sequence.second, depth + 1));
                    pending.push((&*sequence.first, depth + 1));
                }
                Stmt::Block(block) => {
                    self.line(depth, "Body");
                    pending.push((&*block.body, depth + 1));
                }
                Stmt::Conditional(cond) => {
                    self.line(depth, if cond.repeating { "Loop" } else { "Conditional" });
                    self.expr(&cond.condition, depth + 1);
                    pending.push((&*cond.body, depth + 1));
                }
                Stmt::FunctionDecl(decl) => {
                    self.line(
                        depth,
                        format_args!("Function {}({})", decl.name.name, Self::names(&decl.params)),
                    );
                    pending.push((&*decl.body, depth + 1));
                }
                Stmt::Call(call) => self.call(call, depth),
                Stmt::Return(ret) => {
                    self.line(depth, "Return");
                    self.expr(&ret.value, depth + 1);
                }
                Stmt::Print(print) => self.line(depth, format_args!("Print {}", print.name.name)),
            }
        }
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        match expr {
            Expr::Literal(literal, _) => self.line(depth, Value::from(literal)),
            // Grouping only shapes the tree, it is not a node of its own
            Expr::Group(group) => self.expr(&group.expr, depth),
            Expr::Unary(unary) => {
                self.line(depth, format_args!("Unary {}", unary.op));
                self.expr(&unary.expr, depth + 1);
            }
            Expr::Binary(binary) => {
                self.line(depth, format_args!("Binary {}", binary.op));
                self.expr(&binary.left, depth + 1);
                self.expr(&binary.right, depth + 1);
            }
            Expr::Variable(id) => self.line(depth, format_args!("Ref: {}", id.name)),
            Expr::Call(call) => self.call(call, depth),
        }
    }

    fn call(&mut self, call: &CallExpr, depth: usize) {
        self.line(
            depth,
            format_args!("Call {}({})", call.callee.name, Self::names(&call.args)),
        );
    }
}
