use std::fmt;

use miette::SourceSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Int,
    Return,
    If,
    While,
    Ident,
    Number,
    Assign,
    EqEq,
    NotEq,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    End,
}

impl SyntaxKind {
    /// Reserved words are matched exactly and case-sensitively.
    pub fn keyword(word: &str) -> Option<SyntaxKind> {
        match word {
            "int" => Some(SyntaxKind::Int),
            "return" => Some(SyntaxKind::Return),
            "if" => Some(SyntaxKind::If),
            "while" => Some(SyntaxKind::While),
            _ => None,
        }
    }

    /// Single-character operators and punctuation. `=` and `!` are
    /// handled by the lexer since they may start a two-character operator.
    pub fn punct(ch: char) -> Option<SyntaxKind> {
        match ch {
            '<' => Some(SyntaxKind::Lt),
            '>' => Some(SyntaxKind::Gt),
            '+' => Some(SyntaxKind::Plus),
            '-' => Some(SyntaxKind::Minus),
            '*' => Some(SyntaxKind::Star),
            '/' => Some(SyntaxKind::Slash),
            '(' => Some(SyntaxKind::LParen),
            ')' => Some(SyntaxKind::RParen),
            '{' => Some(SyntaxKind::LBrace),
            '}' => Some(SyntaxKind::RBrace),
            ';' => Some(SyntaxKind::Semicolon),
            _ => None,
        }
    }

    pub fn is_relational(self) -> bool {
        matches!(
            self,
            SyntaxKind::Lt | SyntaxKind::Gt | SyntaxKind::EqEq | SyntaxKind::NotEq
        )
    }

    pub fn is_additive(self) -> bool {
        matches!(self, SyntaxKind::Plus | SyntaxKind::Minus)
    }

    pub fn is_multiplicative(self) -> bool {
        matches!(self, SyntaxKind::Star | SyntaxKind::Slash)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SyntaxKind::Int => "`int`",
            SyntaxKind::Return => "`return`",
            SyntaxKind::If => "`if`",
            SyntaxKind::While => "`while`",
            SyntaxKind::Ident => "identifier",
            SyntaxKind::Number => "number",
            SyntaxKind::Assign => "`=`",
            SyntaxKind::EqEq => "`==`",
            SyntaxKind::NotEq => "`!=`",
            SyntaxKind::Lt => "`<`",
            SyntaxKind::Gt => "`>`",
            SyntaxKind::Plus => "`+`",
            SyntaxKind::Minus => "`-`",
            SyntaxKind::Star => "`*`",
            SyntaxKind::Slash => "`/`",
            SyntaxKind::LParen => "`(`",
            SyntaxKind::RParen => "`)`",
            SyntaxKind::LBrace => "`{`",
            SyntaxKind::RBrace => "`}`",
            SyntaxKind::Semicolon => "`;`",
            SyntaxKind::End => "end of input",
        };
        f.write_str(s)
    }
}

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Span { offset, len }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.offset, span.len).into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: SyntaxKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// How the token reads in a diagnostic: its source text in backticks,
    /// or `end of input` for the end-marker.
    pub fn describe(&self) -> String {
        match self.kind {
            SyntaxKind::End => SyntaxKind::End.to_string(),
            _ => format!("`{}`", self.text),
        }
    }
}
