//! Literal scanning for the lexer

use crate::diagnostic::error_codes;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl Lexer {
    /// Scan a string literal; the token lexeme holds the unescaped contents
    pub(super) fn string(&mut self) -> Token {
        let mut value = String::new();
        let mut error_token = None;

        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
            }

            if self.peek() == '\\' {
                self.advance();
                if self.is_at_end() {
                    return self.error_token_with_code(
                        error_codes::UNTERMINATED_STRING,
                        "Unterminated string literal",
                    );
                }

                let escape_char = self.advance();
                match escape_char {
                    'n' => value.push('\n'),
                    'r' => value.push('\r'),
                    't' => value.push('\t'),
                    '\\' => value.push('\\'),
                    '"' => value.push('"'),
                    // Keep scanning to the closing quote, report only the first
                    _ if error_token.is_none() => {
                        error_token = Some(self.error_token_with_code(
                            error_codes::INVALID_ESCAPE,
                            &format!("Invalid escape sequence '\\{}'", escape_char),
                        ));
                    }
                    _ => {}
                }
            } else {
                value.push(self.advance());
            }
        }

        if self.is_at_end() {
            return self.error_token_with_code(
                error_codes::UNTERMINATED_STRING,
                "Unterminated string literal",
            );
        }

        self.advance(); // closing "

        match error_token {
            Some(err) => err,
            None => self.make_token(TokenKind::String, &value),
        }
    }

    /// Scan a decimal integer literal that must fit a signed 32-bit integer
    pub(super) fn number(&mut self) -> Token {
        let start = self.current - 1;

        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }

        let lexeme: String = self.chars[start..self.current].iter().collect();
        if lexeme.parse::<i32>().is_err() {
            return self.error_token_with_code(
                error_codes::INVALID_NUMBER,
                &format!("Number literal '{}' does not fit in 32 bits", lexeme),
            );
        }

        self.make_token(TokenKind::Number, &lexeme)
    }

    /// Scan an identifier or keyword
    pub(super) fn identifier(&mut self) -> Token {
        let start = self.current - 1;

        while !self.is_at_end() {
            let c = self.peek();
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let lexeme: String = self.chars[start..self.current].iter().collect();
        let kind = TokenKind::is_keyword(&lexeme).unwrap_or(TokenKind::Identifier);

        self.make_token(kind, &lexeme)
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostic::error_codes;
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn test_string_escapes() {
        let (tokens, diagnostics) = Lexer::new(r#""a\tb\n\"q\"\\""#).tokenize();
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "a\tb\n\"q\"\\");
    }

    #[test]
    fn test_invalid_escape_reported_once() {
        let (tokens, diagnostics) = Lexer::new(r#""\q\z" 1"#).tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, error_codes::INVALID_ESCAPE);
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, diagnostics) = Lexer::new("\"never closed").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(diagnostics[0].code, error_codes::UNTERMINATED_STRING);
    }

    #[test]
    fn test_number_bounds() {
        let (tokens, diagnostics) = Lexer::new("2147483647 2147483648").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "2147483647");
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, error_codes::INVALID_NUMBER);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let (tokens, _) = Lexer::new("notdone whileLoop").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }
}
