use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Why a construct could not be translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    UnsupportedType,
    UnsupportedStmt,
    UnsupportedExpr,
    UnexpectedLiteral,
    UnsupportedObjKind,
    UnresolvedIdent,
    UnsupportedArgument,
    ExpectedFunction,
    EmptyBody,
    EmptyResults,
    NotStringLiteral,
    ImportAlias,
    UnsupportedTopLevel,
    InvalidChar,
}

impl Reason {
    /// Fixed message, callers may match on it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::UnsupportedType => "not supported type",
            Reason::UnsupportedStmt => "ast.Stmt type not supported",
            Reason::UnsupportedExpr => "Expr type not supported",
            Reason::UnexpectedLiteral => "unexpected literal type",
            Reason::UnsupportedObjKind => "unsupported Obj kind",
            Reason::UnresolvedIdent => "Ident with empty Obj is not supported",
            Reason::UnsupportedArgument => "argument type not supported",
            Reason::ExpectedFunction => "expected FunctionVal but got",
            Reason::EmptyBody => "empty function body is not supported",
            Reason::EmptyResults => "result list of zero length is not supported",
            Reason::NotStringLiteral => "not a string or char literal",
            Reason::ImportAlias => "import alias is not supported",
            Reason::UnsupportedTopLevel => "top-level declaration is not supported",
            Reason::InvalidChar => "char literal is not a single code point",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum TranslateError {
    /// `dump` is the rendered offending node
    #[error("{reason}:\n{dump}")]
    Unsupported { reason: Reason, dump: String },
    #[error(transparent)]
    Integer(#[from] ParseIntError),
    #[error(transparent)]
    Double(#[from] ParseFloatError),
}

impl TranslateError {
    pub fn reason(&self) -> Option<Reason> {
        match self {
            TranslateError::Unsupported { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Source text could not be parsed.
#[derive(Debug, Error)]
#[error("failed to parse {name}: {count} error(s)\n{report}")]
pub struct ParseError {
    pub name: String,
    pub count: usize,
    /// Rendered diagnostics
    pub report: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Reason, TranslateError};

    #[test]
    fn test_error_messages() {
        let err = TranslateError::Unsupported {
            reason: Reason::EmptyResults,
            dump: "     0  ReturnStmt {\n     1  }\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "result list of zero length is not supported:\n     0  ReturnStmt {\n     1  }\n"
        );
        assert_eq!(err.reason(), Some(Reason::EmptyResults));

        let err = TranslateError::from("0x1F".parse::<i64>().unwrap_err());
        assert_eq!(err.to_string(), "invalid digit found in string");
        assert_eq!(err.reason(), None);
    }
}
