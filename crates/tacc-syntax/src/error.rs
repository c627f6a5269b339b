use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::parser::MAX_NESTING;
use crate::token::{SyntaxKind, Token};

pub type CompileResult<T> = Result<T, CompileError>;

/// Every failure aborts the whole pass; there is no recovery.
#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    #[error("unknown character `{ch}`")]
    #[diagnostic(code(tacc::lex::unknown_character))]
    UnknownCharacter {
        ch: char,
        #[label("not part of the language")]
        span: SourceSpan,
    },

    #[error("unknown token `!`")]
    #[diagnostic(
        code(tacc::lex::lone_bang),
        help("`!` is only valid as the first half of `!=`")
    )]
    LoneBang {
        #[label("expected `=` after this")]
        span: SourceSpan,
    },

    #[error("expected {expected}, got {found}")]
    #[diagnostic(code(tacc::parse::unexpected_token))]
    Unexpected {
        expected: SyntaxKind,
        found: String,
        #[label("expected {expected} here")]
        span: SourceSpan,
    },

    #[error("invalid primary {found}")]
    #[diagnostic(
        code(tacc::parse::invalid_primary),
        help("an operand must be a number, a variable or a parenthesized expression")
    )]
    InvalidPrimary {
        found: String,
        #[label("not an operand")]
        span: SourceSpan,
    },

    #[error("invalid statement {found}")]
    #[diagnostic(
        code(tacc::parse::invalid_statement),
        help("a statement starts with a keyword, a block or a variable")
    )]
    InvalidStatement {
        found: String,
        #[label("no statement starts here")]
        span: SourceSpan,
    },

    #[error("only main supported, got {found}")]
    #[diagnostic(code(tacc::parse::only_main))]
    OnlyMain {
        found: String,
        #[label("function must be named `main`")]
        span: SourceSpan,
    },

    #[error("nesting deeper than {limit} levels at {found}")]
    #[diagnostic(code(tacc::parse::too_deep))]
    TooDeep {
        limit: usize,
        found: String,
        #[label("too deeply nested")]
        span: SourceSpan,
    },

    #[error("failed to write intermediate code")]
    #[diagnostic(code(tacc::io))]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub(crate) fn unexpected(expected: SyntaxKind, found: &Token) -> Self {
        CompileError::Unexpected {
            expected,
            found: found.describe(),
            span: found.span.into(),
        }
    }

    pub(crate) fn invalid_primary(found: &Token) -> Self {
        CompileError::InvalidPrimary {
            found: found.describe(),
            span: found.span.into(),
        }
    }

    pub(crate) fn invalid_statement(found: &Token) -> Self {
        CompileError::InvalidStatement {
            found: found.describe(),
            span: found.span.into(),
        }
    }

    pub(crate) fn only_main(found: &Token) -> Self {
        CompileError::OnlyMain {
            found: found.describe(),
            span: found.span.into(),
        }
    }

    pub(crate) fn too_deep(found: &Token) -> Self {
        CompileError::TooDeep {
            limit: MAX_NESTING,
            found: found.describe(),
            span: found.span.into(),
        }
    }
}
