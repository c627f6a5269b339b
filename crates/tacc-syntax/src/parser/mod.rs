//! Recursive descent over the token sequence with one token of lookahead.
//!
//! Code is emitted while descending: there is no syntax tree, and an
//! emitted line is never taken back. `expr` holds the precedence levels,
//! `stmt` the statement forms and the `int main()` entry.

mod expr;
mod stmt;

use std::io::Write;

use crate::emit::{Emitter, Instr};
use crate::error::{CompileError, CompileResult};
use crate::names::Names;
use crate::symbols::SymbolTable;
use crate::token::{Span, SyntaxKind, Token};

/// Deepest nesting of statements and parenthesized expressions, counted
/// together, before the pass gives up.
pub const MAX_NESTING: usize = 128;

static END: Token = Token {
    kind: SyntaxKind::End,
    text: String::new(),
    span: Span { offset: 0, len: 0 },
};

/// State of one compilation pass: cursor, counters, symbols and output.
pub struct Parser<'t, W> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
    names: Names,
    symbols: SymbolTable,
    emitter: Emitter<W>,
}

impl<'t, W: Write> Parser<'t, W> {
    pub fn new(tokens: &'t [Token], out: W) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            names: Names::new(),
            symbols: SymbolTable::new(),
            emitter: Emitter::new(out),
        }
    }

    pub fn into_parts(self) -> (Names, SymbolTable, Emitter<W>) {
        (self.names, self.symbols, self.emitter)
    }

    /// The current token. Past the end of the sequence this keeps
    /// answering with an end-marker.
    fn peek(&self) -> &'t Token {
        match self.tokens.get(self.pos) {
            Some(token) => token,
            None => self
                .tokens
                .last()
                .filter(|t| t.kind == SyntaxKind::End)
                .unwrap_or(&END),
        }
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.peek().kind == kind
    }

    fn bump(&mut self) -> &'t Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it has the given kind, fails otherwise.
    fn expect(&mut self, kind: SyntaxKind) -> CompileResult<&'t Token> {
        let token = self.peek();
        if token.kind != kind {
            return Err(CompileError::unexpected(kind, token));
        }
        Ok(self.bump())
    }

    /// Runs `parse` one nesting level deeper, failing at the current token
    /// once `MAX_NESTING` is reached.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> CompileResult<T>,
    ) -> CompileResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(CompileError::too_deep(self.peek()));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn emit(&mut self, instr: Instr<'_>) -> CompileResult<()> {
        self.emitter.emit(instr)
    }
}
