use std::fmt;
use std::io::Write;

use tracing::trace;

use crate::error::CompileResult;
use crate::names::Label;

/// Printed once the whole program has been translated.
pub const COMPLETION_LINE: &str = "Compilation finished.";

/// One line of intermediate code. Instructions are formatted and written
/// as soon as they are built; nothing keeps a list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr<'a> {
    /// `dst = src`
    Copy { dst: &'a str, src: &'a str },
    /// `dst = lhs op rhs`
    Binary {
        dst: &'a str,
        lhs: &'a str,
        op: &'a str,
        rhs: &'a str,
    },
    Ret(&'a str),
    /// Jump when the value is zero.
    IfZ { cond: &'a str, target: &'a Label },
    Goto(&'a Label),
    Label(&'a Label),
    Finished,
}

impl fmt::Display for Instr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Copy { dst, src } => write!(f, "{dst} = {src}"),
            Instr::Binary { dst, lhs, op, rhs } => write!(f, "{dst} = {lhs} {op} {rhs}"),
            Instr::Ret(value) => write!(f, "RET {value}"),
            Instr::IfZ { cond, target } => write!(f, "IFZ {cond} GOTO {target}"),
            Instr::Goto(target) => write!(f, "GOTO {target}"),
            Instr::Label(label) => write!(f, "{label}:"),
            Instr::Finished => f.write_str(COMPLETION_LINE),
        }
    }
}

/// Append-only writer of intermediate code, one line per instruction.
#[derive(Debug)]
pub struct Emitter<W> {
    out: W,
    lines: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Emitter { out, lines: 0 }
    }

    pub fn emit(&mut self, instr: Instr<'_>) -> CompileResult<()> {
        trace!(line = self.lines, "{instr}");
        writeln!(self.out, "{instr}")?;
        self.lines += 1;
        Ok(())
    }

    /// Lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn flush(&mut self) -> CompileResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
