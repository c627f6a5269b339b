use std::io::Write;

use tracing::debug;

use super::Parser;
use crate::emit::Instr;
use crate::error::{CompileError, CompileResult};
use crate::token::SyntaxKind;

impl<W: Write> Parser<'_, W> {
    /// `int main ( ) { ... }` followed by the end of input.
    pub fn parse_program(&mut self) -> CompileResult<()> {
        self.expect(SyntaxKind::Int)?;
        let name = self.expect(SyntaxKind::Ident)?;
        if name.text != "main" {
            return Err(CompileError::only_main(name));
        }
        self.expect(SyntaxKind::LParen)?;
        self.expect(SyntaxKind::RParen)?;
        self.parse_block()?;
        self.expect(SyntaxKind::End)?;

        self.emit(Instr::Finished)?;
        self.emitter.flush()?;
        debug!(
            lines = self.emitter.lines(),
            temps = self.names.temps(),
            labels = self.names.labels(),
            "translated main"
        );
        Ok(())
    }

    pub(super) fn parse_statement(&mut self) -> CompileResult<()> {
        self.nested(Self::parse_statement_form)
    }

    fn parse_statement_form(&mut self) -> CompileResult<()> {
        let token = self.peek();
        match token.kind {
            SyntaxKind::Int => self.parse_declaration(),
            SyntaxKind::Ident => self.parse_assignment(),
            SyntaxKind::Return => self.parse_return(),
            SyntaxKind::If => self.parse_if(),
            SyntaxKind::While => self.parse_while(),
            SyntaxKind::LBrace => self.parse_block(),
            _ => Err(CompileError::invalid_statement(token)),
        }
    }

    fn parse_declaration(&mut self) -> CompileResult<()> {
        self.expect(SyntaxKind::Int)?;
        let var = self.expect(SyntaxKind::Ident)?;
        self.expect(SyntaxKind::Assign)?;
        let value = self.parse_expression()?;
        self.symbols.declare(&var.text, &value);
        self.emit(Instr::Copy {
            dst: &var.text,
            src: &value,
        })?;
        self.expect(SyntaxKind::Semicolon)?;
        Ok(())
    }

    /// Plain assignment emits the copy but leaves the symbol table as the
    /// declaration left it.
    fn parse_assignment(&mut self) -> CompileResult<()> {
        let var = self.expect(SyntaxKind::Ident)?;
        self.expect(SyntaxKind::Assign)?;
        let value = self.parse_expression()?;
        self.emit(Instr::Copy {
            dst: &var.text,
            src: &value,
        })?;
        self.expect(SyntaxKind::Semicolon)?;
        Ok(())
    }

    fn parse_return(&mut self) -> CompileResult<()> {
        self.expect(SyntaxKind::Return)?;
        let value = self.parse_expression()?;
        self.emit(Instr::Ret(&value))?;
        self.expect(SyntaxKind::Semicolon)?;
        Ok(())
    }

    /// ```text
    ///     IFZ cond GOTO else
    ///     <then>
    ///     GOTO end
    /// else:
    /// end:
    /// ```
    fn parse_if(&mut self) -> CompileResult<()> {
        self.expect(SyntaxKind::If)?;
        self.expect(SyntaxKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(SyntaxKind::RParen)?;

        let label_else = self.names.label();
        let label_end = self.names.label();
        self.emit(Instr::IfZ {
            cond: &cond,
            target: &label_else,
        })?;

        self.parse_statement()?;

        self.emit(Instr::Goto(&label_end))?;
        self.emit(Instr::Label(&label_else))?;
        self.emit(Instr::Label(&label_end))?;
        Ok(())
    }

    /// The condition is emitted between the start label and the exit test,
    /// so the back edge re-evaluates it on every iteration.
    ///
    /// ```text
    /// start:
    ///     <cond>
    ///     IFZ cond GOTO end
    ///     <body>
    ///     GOTO start
    /// end:
    /// ```
    fn parse_while(&mut self) -> CompileResult<()> {
        self.expect(SyntaxKind::While)?;
        let label_start = self.names.label();
        let label_end = self.names.label();
        self.emit(Instr::Label(&label_start))?;

        self.expect(SyntaxKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(SyntaxKind::RParen)?;
        self.emit(Instr::IfZ {
            cond: &cond,
            target: &label_end,
        })?;

        self.parse_statement()?;

        self.emit(Instr::Goto(&label_start))?;
        self.emit(Instr::Label(&label_end))?;
        Ok(())
    }

    fn parse_block(&mut self) -> CompileResult<()> {
        self.expect(SyntaxKind::LBrace)?;
        while !self.at(SyntaxKind::RBrace) {
            self.parse_statement()?;
        }
        self.expect(SyntaxKind::RBrace)?;
        Ok(())
    }
}
