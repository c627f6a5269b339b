use std::io::Write;

use super::Parser;
use crate::emit::Instr;
use crate::error::{CompileError, CompileResult};
use crate::token::SyntaxKind;

impl<W: Write> Parser<'_, W> {
    /// Parses one expression and returns the operand holding its value.
    pub(super) fn parse_expression(&mut self) -> CompileResult<String> {
        self.parse_relational()
    }

    /// At most one comparison; a second relational operator is left for
    /// the caller to trip over.
    fn parse_relational(&mut self) -> CompileResult<String> {
        let left = self.parse_additive()?;
        if !self.peek().kind.is_relational() {
            return Ok(left);
        }
        let op = self.bump();
        let right = self.parse_additive()?;
        self.fold(&left, &op.text, &right)
    }

    fn parse_additive(&mut self) -> CompileResult<String> {
        let mut left = self.parse_multiplicative()?;
        while self.peek().kind.is_additive() {
            let op = self.bump();
            let right = self.parse_multiplicative()?;
            left = self.fold(&left, &op.text, &right)?;
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> CompileResult<String> {
        let mut left = self.parse_primary()?;
        while self.peek().kind.is_multiplicative() {
            let op = self.bump();
            let right = self.parse_primary()?;
            left = self.fold(&left, &op.text, &right)?;
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> CompileResult<String> {
        let token = self.peek();
        match token.kind {
            SyntaxKind::Number | SyntaxKind::Ident => Ok(self.bump().text.clone()),
            SyntaxKind::LParen => self.nested(|p| {
                p.bump();
                let value = p.parse_expression()?;
                p.expect(SyntaxKind::RParen)?;
                Ok(value)
            }),
            _ => Err(CompileError::invalid_primary(token)),
        }
    }

    /// Emits `t = left op right` into a fresh temporary and returns it.
    fn fold(&mut self, left: &str, op: &str, right: &str) -> CompileResult<String> {
        let dst = self.names.temp();
        self.emit(Instr::Binary {
            dst: &dst,
            lhs: left,
            op,
            rhs: right,
        })?;
        Ok(dst)
    }
}
