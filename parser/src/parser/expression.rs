// Copyright (C) The LOLCODE Tooling Team.
// This file is part of lolcode-parser.

// lolcode-parser is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// lolcode-parser is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with lolcode-parser. If not, see <https://www.gnu.org/licenses/>.

use super::Parser;
use crate::token::TokenKind;
use lolcode_ast::*;
use lolcode_errors::Result;
use lolcode_span::Span;

/// Maps a binary-operator keyword token to the `OpKind` it introduces, or
/// `None` if `kind` doesn't open a binary operator.
fn binary_op_kind(kind: &TokenKind) -> Option<OpKind> {
    Some(match kind {
        TokenKind::SumOf => OpKind::Add,
        TokenKind::DiffOf => OpKind::Sub,
        TokenKind::ProduktOf => OpKind::Mult,
        TokenKind::QuoshuntOf => OpKind::Div,
        TokenKind::ModOf => OpKind::Mod,
        TokenKind::BiggrOf => OpKind::Max,
        TokenKind::SmallrOf => OpKind::Min,
        TokenKind::BothOf => OpKind::And,
        TokenKind::EitherOf => OpKind::Or,
        TokenKind::WonOf => OpKind::Xor,
        TokenKind::BothSaem => OpKind::Eq,
        TokenKind::Diffrint => OpKind::Neq,
        _ => return None,
    })
}

impl<'a> Parser<'a> {
    /// Expressions are entirely prefix: the first token alone determines
    /// which production applies. There is no infix parsing and no
    /// precedence climbing.
    pub(crate) fn parse_expr(&mut self) -> Result<Expression> {
        let start = self.cursor.token.span;
        match &self.cursor.token.kind {
            TokenKind::Integer(_) => {
                let value = self.cursor.eat_integer().expect("matched TokenKind::Integer above");
                Ok(Expression::Constant(ConstantExpression { value: Constant::Integer(value), span: start }))
            }
            TokenKind::Float(_) => {
                let value = self.cursor.eat_float().expect("matched TokenKind::Float above");
                Ok(Expression::Constant(ConstantExpression { value: Constant::Float(value), span: start }))
            }
            TokenKind::Str(_) => {
                let value = self.cursor.eat_string().expect("matched TokenKind::Str above");
                Ok(Expression::Constant(ConstantExpression { value: Constant::String(value), span: start }))
            }
            TokenKind::Boolean(_) => {
                let value = self.cursor.eat_boolean().expect("matched TokenKind::Boolean above");
                Ok(Expression::Constant(ConstantExpression { value: Constant::Boolean(value), span: start }))
            }
            TokenKind::It => {
                self.cursor.bump();
                Ok(Expression::ImplicitVar(ImplicitVarExpression { span: start }))
            }
            TokenKind::Maek => self.parse_cast_expr(),
            TokenKind::Smoosh => self.parse_nary(&TokenKind::Smoosh, OpKind::Cat),
            TokenKind::AllOf => self.parse_nary(&TokenKind::AllOf, OpKind::And),
            TokenKind::AnyOf => self.parse_nary(&TokenKind::AnyOf, OpKind::Or),
            TokenKind::Not => self.parse_unary(),
            kind if binary_op_kind(kind).is_some() => self.parse_binary(),
            TokenKind::Ident(_) => self.parse_ident_or_call(),
            _ => self.cursor.unexpected("expression"),
        }
    }

    fn parse_cast_expr(&mut self) -> Result<Expression> {
        let start = self.cursor.expect(&TokenKind::Maek)?;
        let value = self.parse_expr()?;
        self.cursor.expect(&TokenKind::A)?;
        let target_type = self.parse_type()?;
        let end = self.cursor.prev_token.span;
        Ok(Expression::Cast(CastExpression { value: Box::new(value), target_type, span: start + end }))
    }

    /// `NOT Expr` -- the sole unary operator.
    fn parse_unary(&mut self) -> Result<Expression> {
        let start = self.cursor.expect(&TokenKind::Not)?;
        let arg = self.parse_expr()?;
        let span = start + arg.span();
        Ok(Expression::Op(OpExpression::new(OpKind::Not, vec![arg], span)))
    }

    /// `BinKw Expr [AN] Expr` -- every fixed-arity binary operator keyword.
    fn parse_binary(&mut self) -> Result<Expression> {
        let op = binary_op_kind(&self.cursor.token.kind).expect("caller only dispatches here for binary-op tokens");
        let start = self.cursor.token.span;
        self.cursor.bump();
        let lhs = self.parse_expr()?;
        self.cursor.accept(&TokenKind::An);
        let rhs = self.parse_expr()?;
        let span = start + rhs.span();
        Ok(Expression::Op(OpExpression::new(op, vec![lhs, rhs], span)))
    }

    /// `NaryKw Expr {[AN] Expr} MKAY` -- `SMOOSH`, `ALL OF`, `ANY OF`.
    fn parse_nary(&mut self, opener: &TokenKind, op: OpKind) -> Result<Expression> {
        let start = self.cursor.expect(opener)?;
        let mut args = vec![self.parse_expr()?];
        while !self.cursor.peek(&TokenKind::Mkay) {
            self.cursor.accept(&TokenKind::An);
            args.push(self.parse_expr()?);
        }
        let end = self.cursor.expect(&TokenKind::Mkay)?;
        Ok(Expression::Op(OpExpression::new(op, args, start + end)))
    }

    /// An identifier followed by `IZ` is a function call; otherwise it's a
    /// plain variable reference.
    fn parse_ident_or_call(&mut self) -> Result<Expression> {
        let scope = self.cursor.expect_identifier()?;
        if !self.cursor.accept(&TokenKind::Iz) {
            return Ok(Expression::Identifier(scope));
        }

        let name = self.cursor.expect_identifier()?;
        let mut args = Vec::new();
        if self.cursor.accept(&TokenKind::Yr) {
            args.push(self.parse_expr()?);
            while !self.cursor.peek(&TokenKind::Mkay) {
                self.cursor.accept(&TokenKind::An);
                self.cursor.expect(&TokenKind::Yr)?;
                args.push(self.parse_expr()?);
            }
        }
        let end = self.cursor.expect(&TokenKind::Mkay)?;
        let span: Span = scope.span() + end;
        Ok(Expression::FuncCall(FuncCallExpression { scope, name, args, span }))
    }
}
