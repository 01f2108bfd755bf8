//! Statement parsing

use crate::ast::*;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser {
    /// Parse a statement
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, ()> {
        match self.peek().kind {
            TokenKind::Let => self.parse_declaration(),
            TokenKind::Identifier => match self.peek_next_kind() {
                TokenKind::Equal => self.parse_reassignment(),
                TokenKind::LeftParen => self.parse_call_statement(),
                _ => {
                    self.advance();
                    self.error("Expected '=' or '(' after identifier");
                    Err(())
                }
            },
            TokenKind::If => self.parse_conditional(false),
            TokenKind::While => self.parse_conditional(true),
            TokenKind::Fn => self.parse_function(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Print => self.parse_print(),
            TokenKind::LeftBrace => self.parse_block(),
            _ => {
                self.error("Expected statement");
                Err(())
            }
        }
    }

    /// `let name = expr;`
    fn parse_declaration(&mut self) -> Result<Stmt, ()> {
        let start = self.consume(TokenKind::Let, "Expected 'let'")?.span;
        let name = self.consume_identifier("a variable name")?;
        self.consume(TokenKind::Equal, "Expected '=' after variable name")?;
        let value = self.parse_expression()?;
        let end = self.consume(TokenKind::Semicolon, "Expected ';' after declaration")?.span;

        Ok(Stmt::Assign(AssignStmt {
            name,
            value,
            reassignment: false,
            span: start.merge(end),
        }))
    }

    /// `name = expr;`
    fn parse_reassignment(&mut self) -> Result<Stmt, ()> {
        let name = self.consume_identifier("a variable name")?;
        self.consume(TokenKind::Equal, "Expected '='")?;
        let value = self.parse_expression()?;
        let end = self.consume(TokenKind::Semicolon, "Expected ';' after assignment")?.span;

        Ok(Stmt::Assign(AssignStmt {
            span: name.span.merge(end),
            name,
            value,
            reassignment: true,
        }))
    }

    /// `name(args);`
    fn parse_call_statement(&mut self) -> Result<Stmt, ()> {
        let callee = self.consume_identifier("a function name")?;
        let call = self.parse_call(callee)?;
        self.consume(TokenKind::Semicolon, "Expected ';' after call")?;
        Ok(Stmt::Call(call))
    }

    /// `if (cond) { ... }` or `while (cond) { ... }`
    fn parse_conditional(&mut self, repeating: bool) -> Result<Stmt, ()> {
        let start = self.advance().span;
        self.consume(TokenKind::LeftParen, "Expected '(' before condition")?;
        let condition = self.parse_expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after condition")?;
        let body = self.parse_block()?;

        Ok(Stmt::Conditional(ConditionalStmt {
            span: start.merge(body.span()),
            condition,
            body: Box::new(body),
            repeating,
        }))
    }

    /// `fn name(params) { ... }`
    fn parse_function(&mut self) -> Result<Stmt, ()> {
        let start = self.consume(TokenKind::Fn, "Expected 'fn'")?.span;
        let name = self.consume_identifier("a function name")?;
        let (params, _) = self.parse_name_list("a parameter name")?;
        let body = self.parse_block()?;

        Ok(Stmt::FunctionDecl(FunctionDecl {
            span: start.merge(body.span()),
            name,
            params,
            body: Box::new(body),
        }))
    }

    /// `return expr;`
    fn parse_return(&mut self) -> Result<Stmt, ()> {
        let start = self.consume(TokenKind::Return, "Expected 'return'")?.span;
        let value = self.parse_expression()?;
        let end = self.consume(TokenKind::Semicolon, "Expected ';' after return value")?.span;

        Ok(Stmt::Return(ReturnStmt {
            value,
            span: start.merge(end),
        }))
    }

    /// `print name;`
    fn parse_print(&mut self) -> Result<Stmt, ()> {
        let start = self.consume(TokenKind::Print, "Expected 'print'")?.span;
        let name = self.consume_identifier("a variable name after 'print'")?;
        let end = self.consume(TokenKind::Semicolon, "Expected ';' after print")?.span;

        Ok(Stmt::Print(PrintStmt {
            name,
            span: start.merge(end),
        }))
    }

    /// `{ statement+ }`, folded into a single body statement
    pub(super) fn parse_block(&mut self) -> Result<Stmt, ()> {
        let start = self.consume(TokenKind::LeftBrace, "Expected '{'")?.span;
        let mut statements = Vec::new();
        let mut had_error = false;

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(_) => {
                    had_error = true;
                    self.synchronize();
                }
            }
        }

        if statements.is_empty() && !had_error {
            self.error("Expected at least one statement in block");
        }
        let end = self.consume(TokenKind::RightBrace, "Expected '}'")?.span;

        // A block with a recovered error keeps its good statements so that
        // parsing resumes after the closing brace
        let body = Stmt::sequence(statements).ok_or(())?;
        Ok(Stmt::Block(BlockStmt {
            body: Box::new(body),
            span: start.merge(end),
        }))
    }
}
