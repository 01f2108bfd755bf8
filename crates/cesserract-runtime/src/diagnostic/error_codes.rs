//! Error code registry with descriptions and help text
//!
//! Ranges:
//! - CS0xxx: Runtime errors raised while executing a program
//! - CS1xxx: Syntax/lexer errors
//! - CS9xxx: Internal errors
//! - CWxxxx: Warnings

// CS0xxx - Runtime Errors
pub const TYPE_MISMATCH: &str = "CS0001";
pub const UNDEFINED_VARIABLE: &str = "CS0002";
pub const ARITY_MISMATCH: &str = "CS0003";
pub const INVALID_COMPARISON: &str = "CS0004";
pub const DIVIDE_BY_ZERO: &str = "CS0005";
pub const DUPLICATE_DECLARATION: &str = "CS0006";
pub const UNDEFINED_FUNCTION: &str = "CS0007";
pub const MISSING_RESULT: &str = "CS0008";
pub const RESULT_ALREADY_SET: &str = "CS0009";
pub const NON_BOOLEAN_CONDITION: &str = "CS0010";
pub const ITERATION_LIMIT: &str = "CS0011";
pub const CALL_DEPTH_LIMIT: &str = "CS0012";

// CS1xxx - Syntax Errors
pub const SYNTAX_ERROR: &str = "CS1000";
pub const UNEXPECTED_CHARACTER: &str = "CS1001";
pub const UNTERMINATED_STRING: &str = "CS1002";
pub const INVALID_ESCAPE: &str = "CS1003";
pub const UNTERMINATED_COMMENT: &str = "CS1004";
pub const INVALID_NUMBER: &str = "CS1005";

// CS9xxx - Internal Errors
pub const IO_ERROR: &str = "CS9001";
pub const GENERIC_ERROR: &str = "CS9999";

// CWxxxx - Warnings
pub const STRAY_COMMENT_TERMINATOR: &str = "CW0001";

/// Error code descriptor with code, description, and optional help text
#[derive(Debug, Clone)]
pub struct ErrorCodeInfo {
    /// The error code string (e.g., "CS0001")
    pub code: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Optional contextual help text
    pub help: Option<&'static str>,
}

/// Get info for an error code, if known
pub fn lookup(code: &str) -> Option<ErrorCodeInfo> {
    ERROR_CODES.iter().find(|e| e.code == code).cloned()
}

/// Get help text for an error code
pub fn help_for(code: &str) -> Option<&'static str> {
    lookup(code).and_then(|e| e.help)
}

/// Whether `code` names a fault raised while executing a program
pub fn is_runtime(code: &str) -> bool {
    code.starts_with("CS0")
}

/// All known error codes with descriptions and help
pub static ERROR_CODES: &[ErrorCodeInfo] = &[
    ErrorCodeInfo {
        code: TYPE_MISMATCH,
        description: "Type mismatch",
        help: Some("Operands and reassigned values must keep the kind they were declared with."),
    },
    ErrorCodeInfo {
        code: UNDEFINED_VARIABLE,
        description: "Undefined variable",
        help: Some("Declare the variable with 'let' in this scope or an enclosing one."),
    },
    ErrorCodeInfo {
        code: ARITY_MISMATCH,
        description: "Arity mismatch",
        help: Some("Pass exactly one argument name per declared parameter."),
    },
    ErrorCodeInfo {
        code: INVALID_COMPARISON,
        description: "Invalid comparison",
        help: Some("Text never compares; Logic supports only '==' and '!='."),
    },
    ErrorCodeInfo {
        code: DIVIDE_BY_ZERO,
        description: "Division by zero",
        help: Some("Check that the divisor is not zero before dividing."),
    },
    ErrorCodeInfo {
        code: DUPLICATE_DECLARATION,
        description: "Duplicate declaration",
        help: Some("A name can be declared once per scope. Use 'x = ...' to reassign."),
    },
    ErrorCodeInfo {
        code: UNDEFINED_FUNCTION,
        description: "Undefined function",
        help: Some("Declare the function with 'fn' before calling it."),
    },
    ErrorCodeInfo {
        code: MISSING_RESULT,
        description: "Function does not return anything",
        help: Some("Add a 'return' statement or call the function as a statement."),
    },
    ErrorCodeInfo {
        code: RESULT_ALREADY_SET,
        description: "Result already set",
        help: None,
    },
    ErrorCodeInfo {
        code: NON_BOOLEAN_CONDITION,
        description: "Condition is not a Logic value",
        help: Some("Use a comparison or a Logic variable as the condition."),
    },
    ErrorCodeInfo {
        code: ITERATION_LIMIT,
        description: "Iteration limit exceeded",
        help: Some("Make sure the loop condition eventually becomes false."),
    },
    ErrorCodeInfo {
        code: CALL_DEPTH_LIMIT,
        description: "Call depth limit exceeded",
        help: Some("Check recursive functions for a terminating case."),
    },
    ErrorCodeInfo {
        code: SYNTAX_ERROR,
        description: "Syntax error",
        help: None,
    },
    ErrorCodeInfo {
        code: UNEXPECTED_CHARACTER,
        description: "Unexpected character",
        help: Some("Remove the character or check for a typo."),
    },
    ErrorCodeInfo {
        code: UNTERMINATED_STRING,
        description: "Unterminated string literal",
        help: Some("Add a closing '\"' to the string."),
    },
    ErrorCodeInfo {
        code: INVALID_ESCAPE,
        description: "Invalid escape sequence",
        help: Some("Supported escapes are \\n, \\r, \\t, \\\\ and \\\"."),
    },
    ErrorCodeInfo {
        code: UNTERMINATED_COMMENT,
        description: "Unterminated block comment",
        help: Some("Close every '/*' with a matching '*/'."),
    },
    ErrorCodeInfo {
        code: INVALID_NUMBER,
        description: "Invalid number literal",
        help: Some("Number literals must fit a signed 32-bit integer."),
    },
    ErrorCodeInfo {
        code: IO_ERROR,
        description: "I/O error",
        help: None,
    },
    ErrorCodeInfo {
        code: GENERIC_ERROR,
        description: "Generic error",
        help: None,
    },
    ErrorCodeInfo {
        code: STRAY_COMMENT_TERMINATOR,
        description: "Stray comment terminator",
        help: Some("Remove the '*/' or open the comment with '/*'."),
    },
];
