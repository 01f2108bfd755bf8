//! Expression parsing (Pratt parsing)

use crate::ast::*;
use crate::parser::{Parser, Precedence};
use crate::token::TokenKind;

impl Parser {
    /// Parse an expression
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ()> {
        self.parse_precedence(Precedence::Lowest)
    }

    /// Parse expression with given precedence
    pub(super) fn parse_precedence(&mut self, precedence: Precedence) -> Result<Expr, ()> {
        let mut left = self.parse_prefix()?;

        while precedence < self.current_precedence() {
            left = self.parse_binary(left)?;
        }

        Ok(left)
    }

    /// Parse prefix expression
    fn parse_prefix(&mut self) -> Result<Expr, ()> {
        match self.peek().kind {
            TokenKind::Number => self.parse_number(),
            TokenKind::String => {
                let token = self.advance();
                Ok(Expr::Literal(Literal::String(token.lexeme.clone()), token.span))
            }
            TokenKind::True | TokenKind::False => {
                let token = self.advance();
                Ok(Expr::Literal(
                    Literal::Bool(token.kind == TokenKind::True),
                    token.span,
                ))
            }
            TokenKind::Identifier => {
                let name = self.consume_identifier("a variable name")?;
                if self.check(TokenKind::LeftParen) {
                    Ok(Expr::Call(self.parse_call(name)?))
                } else {
                    Ok(Expr::Variable(name))
                }
            }
            TokenKind::LeftParen => self.parse_group(),
            TokenKind::Minus | TokenKind::Not => self.parse_unary(),
            _ => {
                self.error("Expected expression");
                Err(())
            }
        }
    }

    /// Get current token precedence
    pub(super) fn current_precedence(&self) -> Precedence {
        match self.peek().kind {
            TokenKind::Or | TokenKind::Xor => Precedence::Or,
            TokenKind::And => Precedence::And,
            TokenKind::EqualEqual | TokenKind::BangEqual => Precedence::Equality,
            TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual => Precedence::Comparison,
            TokenKind::Plus | TokenKind::Minus => Precedence::Term,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Precedence::Factor,
            _ => Precedence::Lowest,
        }
    }

    fn parse_number(&mut self) -> Result<Expr, ()> {
        let token = self.advance();
        let span = token.span;
        match token.lexeme.parse::<i32>() {
            Ok(value) => Ok(Expr::Literal(Literal::Number(value), span)),
            Err(_) => {
                self.error("Number literal does not fit in 32 bits");
                Err(())
            }
        }
    }

    /// `callee(a, b)`; arguments are variable names only
    pub(super) fn parse_call(&mut self, callee: Identifier) -> Result<CallExpr, ()> {
        let (args, end) = self.parse_name_list("a variable name as call argument")?;
        Ok(CallExpr {
            span: callee.span.merge(end),
            callee,
            args,
        })
    }

    fn parse_group(&mut self) -> Result<Expr, ()> {
        let start = self.consume(TokenKind::LeftParen, "Expected '('")?.span;
        let expr = self.parse_expression()?;
        let end = self.consume(TokenKind::RightParen, "Expected ')'")?.span;

        Ok(Expr::Group(GroupExpr {
            expr: Box::new(expr),
            span: start.merge(end),
        }))
    }

    fn parse_unary(&mut self) -> Result<Expr, ()> {
        let op_token = self.advance();
        let op_span = op_token.span;
        let op = if op_token.kind == TokenKind::Minus {
            UnaryOp::Minus
        } else {
            UnaryOp::Not
        };

        let operand = self.parse_precedence(Precedence::Unary)?;

        Ok(Expr::Unary(UnaryExpr {
            op,
            span: op_span.merge(operand.span()),
            expr: Box::new(operand),
        }))
    }

    /// Parse binary expression; all binary operators are left-associative
    fn parse_binary(&mut self, left: Expr) -> Result<Expr, ()> {
        let precedence = self.current_precedence();
        let op = match self.advance().kind {
            TokenKind::Plus => BinaryOp::Arithmetic(ArithmeticOp::Add),
            TokenKind::Minus => BinaryOp::Arithmetic(ArithmeticOp::Sub),
            TokenKind::Star => BinaryOp::Arithmetic(ArithmeticOp::Mul),
            TokenKind::Slash => BinaryOp::Arithmetic(ArithmeticOp::Div),
            TokenKind::Percent => BinaryOp::Arithmetic(ArithmeticOp::Mod),
            TokenKind::And => BinaryOp::Logic(LogicOp::And),
            TokenKind::Or => BinaryOp::Logic(LogicOp::Or),
            TokenKind::Xor => BinaryOp::Logic(LogicOp::Xor),
            TokenKind::EqualEqual => BinaryOp::Comparison(ComparisonOp::Eq),
            TokenKind::BangEqual => BinaryOp::Comparison(ComparisonOp::Ne),
            TokenKind::Less => BinaryOp::Comparison(ComparisonOp::Lt),
            TokenKind::LessEqual => BinaryOp::Comparison(ComparisonOp::Le),
            TokenKind::Greater => BinaryOp::Comparison(ComparisonOp::Gt),
            _ => BinaryOp::Comparison(ComparisonOp::Ge),
        };

        let right = self.parse_precedence(precedence)?;

        Ok(Expr::Binary(BinaryExpr {
            op,
            span: left.span().merge(right.span()),
            left: Box::new(left),
            right: Box::new(right),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn parse_expr(source: &str) -> Expr {
        let program_source = format!("let r = {};", source);
        let (tokens, _) = Lexer::new(&program_source).tokenize();
        let (mut program, diagnostics) = Parser::new(tokens).parse();
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
        match program.root.take() {
            Some(Stmt::Assign(assign)) => assign.value,
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    fn binary(expr: &Expr) -> &BinaryExpr {
        match expr {
            Expr::Binary(binary) => binary,
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_factor_binds_tighter_than_term() {
        let expr = parse_expr("1 + 2 * 3");
        let top = binary(&expr);
        assert_eq!(top.op, BinaryOp::Arithmetic(ArithmeticOp::Add));
        assert_eq!(binary(&top.right).op, BinaryOp::Arithmetic(ArithmeticOp::Mul));
    }

    #[test]
    fn test_left_associative() {
        let expr = parse_expr("10 - 4 - 3");
        let top = binary(&expr);
        assert_eq!(top.op, BinaryOp::Arithmetic(ArithmeticOp::Sub));
        assert!(matches!(*top.left, Expr::Binary(_)));
        assert!(matches!(*top.right, Expr::Literal(Literal::Number(3), _)));
    }

    #[test]
    fn test_logic_precedence() {
        // and binds tighter than or/xor, comparisons tighter than both
        let expr = parse_expr("a or b and c < 1");
        let top = binary(&expr);
        assert_eq!(top.op, BinaryOp::Logic(LogicOp::Or));
        let right = binary(&top.right);
        assert_eq!(right.op, BinaryOp::Logic(LogicOp::And));
        assert_eq!(binary(&right.right).op, BinaryOp::Comparison(ComparisonOp::Lt));
    }

    #[test]
    fn test_unary_and_group() {
        let expr = parse_expr("-(1 + 2)");
        let Expr::Unary(unary) = expr else {
            panic!("expected unary");
        };
        assert_eq!(unary.op, UnaryOp::Minus);
        assert!(matches!(*unary.expr, Expr::Group(_)));

        let expr = parse_expr("not done");
        assert!(matches!(expr, Expr::Unary(UnaryExpr { op: UnaryOp::Not, .. })));
    }

    #[test]
    fn test_call_expression() {
        let expr = parse_expr("add(x, y) + 1");
        let top = binary(&expr);
        let Expr::Call(call) = top.left.as_ref() else {
            panic!("expected call as left operand");
        };
        assert_eq!(call.callee.name, "add");
        assert_eq!(call.args.len(), 2);
    }

    #[test]
    fn test_text_literal() {
        let expr = parse_expr("\"hi\"");
        assert!(matches!(expr, Expr::Literal(Literal::String(ref s), _) if s == "hi"));
    }
}
