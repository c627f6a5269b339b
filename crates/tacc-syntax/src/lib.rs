//! Single-pass translator from a small C subset to three-address code.
//!
//! - `lexer` turns source text into a token sequence ending in an end-marker.
//! - `parser` walks the tokens once and writes intermediate code as it goes.
//! - `emit` formats individual instructions onto any `io::Write`.
//! - `names` and `symbols` hold the per-pass bookkeeping.

pub mod emit;
pub mod error;
pub mod lexer;
pub mod names;
pub mod parser;
pub mod symbols;
pub mod token;

use std::io::Write;

use tracing::debug;

pub use emit::{COMPLETION_LINE, Emitter, Instr};
pub use error::{CompileError, CompileResult};
pub use lexer::lex;
pub use names::{Label, Names};
pub use parser::Parser;
pub use symbols::SymbolTable;
pub use token::{Span, SyntaxKind, Token};

/// What a successful pass leaves behind besides the emitted code.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub symbols: SymbolTable,
    /// Emitted lines, including the completion line.
    pub lines: usize,
    pub temps: usize,
    pub labels: usize,
}

/// Translates `source`, streaming intermediate code into `out`.
///
/// The source is lexed completely first, so a lexical error writes
/// nothing. A syntax error stops the pass; lines already written for
/// earlier statements stay written.
pub fn translate<W: Write>(source: &str, out: W) -> CompileResult<Compilation> {
    let tokens = lex(source)?;
    let mut parser = Parser::new(&tokens, out);
    parser.parse_program()?;

    let (names, symbols, emitter) = parser.into_parts();
    let compilation = Compilation {
        symbols,
        lines: emitter.lines(),
        temps: names.temps(),
        labels: names.labels(),
    };
    debug!(symbols = compilation.symbols.len(), "pass complete");
    Ok(compilation)
}

/// Translates `source` into a string: either all of the output or an error,
/// never a partial listing.
pub fn translate_to_string(source: &str) -> CompileResult<String> {
    let mut out = Vec::new();
    translate(source, &mut out)?;
    // operands are slices of valid UTF-8 source
    Ok(String::from_utf8_lossy(&out).into_owned())
}
