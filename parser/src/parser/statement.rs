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
use lolcode_errors::{ParseError, Result};

/// Token kinds that close whatever block is currently open: the program
/// (`KTHXBYE`), an if/switch clause (`OIC`, or the next clause's opener),
/// a loop (`IM OUTTA YR`), a function (`IF U SAY SO`), or end of input.
const BLOCK_TERMINATORS: &[TokenKind] = &[
    TokenKind::Kthxbye,
    TokenKind::Oic,
    TokenKind::Yarly,
    TokenKind::Nowai,
    TokenKind::Mebbe,
    TokenKind::Omg,
    TokenKind::Omgwtf,
    TokenKind::ImOuttaYr,
    TokenKind::IfUSaySo,
    TokenKind::Eof,
];

impl<'a> Parser<'a> {
    /// `HAI Float NEWLINE Block KTHXBYE`. A program with no `HAI` fails.
    pub(crate) fn parse_main(&mut self) -> Result<Main> {
        if !self.cursor.accept(&TokenKind::Hai) {
            let span = self.cursor.token.span;
            return Err(self.cursor.handler.emit_err(ParseError::missing_greeting(span)));
        }
        let start = self.cursor.prev_token.span;
        let version = self.cursor.expect_float()?;
        self.cursor.expect(&TokenKind::Newline)?;
        let block = self.parse_block()?;
        let end = self.cursor.expect(&TokenKind::Kthxbye)?;
        Ok(Main { version, block, span: start + end })
    }

    fn at_block_terminator(&self) -> bool {
        BLOCK_TERMINATORS.iter().any(|k| self.cursor.peek(k))
    }

    pub(crate) fn parse_block(&mut self) -> Result<Block> {
        let start = self.cursor.token.span;
        let mut statements = Vec::new();
        while !self.at_block_terminator() {
            statements.push(self.parse_stmt()?);
        }
        let span = statements.last().map_or(start, |s| start + s.span());
        Ok(Block { statements, span })
    }

    fn peek_ident_led_stmt(&self) -> bool {
        self.cursor.look_ahead(1, |t| {
            matches!(t.kind, TokenKind::IsNowA | TokenKind::R | TokenKind::HasA | TokenKind::RNoob)
        })
    }

    pub(crate) fn parse_stmt(&mut self) -> Result<Statement> {
        match &self.cursor.token.kind {
            TokenKind::Visible => self.parse_print().map(Statement::Print),
            TokenKind::Gimmeh => self.parse_input().map(Statement::Input),
            TokenKind::Orly => self.parse_if().map(|s| Statement::IfThenElse(Box::new(s))),
            TokenKind::Wtf => self.parse_switch().map(Statement::Switch),
            TokenKind::Gtfo => self.parse_break().map(Statement::Break),
            TokenKind::FoundYr => self.parse_return().map(Statement::Return),
            TokenKind::ImInYr => self.parse_loop().map(|s| Statement::Loop(Box::new(s))),
            TokenKind::HowIz => self.parse_func_def().map(|s| Statement::FuncDef(Box::new(s))),
            TokenKind::Ident(_) if self.peek_ident_led_stmt() => self.parse_ident_led_stmt(),
            _ => self.parse_expr_stmt().map(Statement::ExprStmt),
        }
    }

    fn parse_print(&mut self) -> Result<PrintStatement> {
        let start = self.cursor.expect(&TokenKind::Visible)?;
        let mut args = vec![self.parse_expr()?];
        while !matches!(self.cursor.token.kind, TokenKind::Bang | TokenKind::Newline) {
            args.push(self.parse_expr()?);
        }
        let suppress_newline = self.cursor.accept(&TokenKind::Bang);
        let end = self.cursor.expect(&TokenKind::Newline)?;
        Ok(PrintStatement { args, suppress_newline, span: start + end })
    }

    fn parse_input(&mut self) -> Result<InputStatement> {
        let start = self.cursor.expect(&TokenKind::Gimmeh)?;
        let target = self.cursor.expect_identifier()?;
        let end = self.cursor.expect(&TokenKind::Newline)?;
        Ok(InputStatement { target, span: start + end })
    }

    fn parse_if(&mut self) -> Result<IfThenElseStatement> {
        let start = self.cursor.expect(&TokenKind::Orly)?;
        self.cursor.expect(&TokenKind::Newline)?;
        self.cursor.expect(&TokenKind::Yarly)?;
        self.cursor.expect(&TokenKind::Newline)?;
        let yes = self.parse_block()?;

        let mut guards = Vec::new();
        let mut blocks = Vec::new();
        while self.cursor.accept(&TokenKind::Mebbe) {
            guards.push(self.parse_expr()?);
            self.cursor.expect(&TokenKind::Newline)?;
            blocks.push(self.parse_block()?);
        }

        let no = if self.cursor.accept(&TokenKind::Nowai) {
            self.cursor.expect(&TokenKind::Newline)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        let end = self.cursor.expect(&TokenKind::Oic)?;
        self.cursor.expect(&TokenKind::Newline)?;
        Ok(IfThenElseStatement { yes, no, guards, blocks, span: start + end })
    }

    fn parse_switch(&mut self) -> Result<SwitchStatement> {
        let start = self.cursor.expect(&TokenKind::Wtf)?;
        self.cursor.expect(&TokenKind::Newline)?;

        let mut guards = Vec::new();
        let mut blocks = Vec::new();
        while self.cursor.accept(&TokenKind::Omg) {
            guards.push(self.parse_expr()?);
            self.cursor.expect(&TokenKind::Newline)?;
            blocks.push(self.parse_block()?);
        }
        if guards.is_empty() {
            let span = self.cursor.token.span;
            return Err(self.cursor.handler.emit_err(ParseError::missing_case(span)));
        }

        let default = if self.cursor.accept(&TokenKind::Omgwtf) {
            self.cursor.expect(&TokenKind::Newline)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        let end = self.cursor.expect(&TokenKind::Oic)?;
        self.cursor.expect(&TokenKind::Newline)?;
        Ok(SwitchStatement { guards, blocks, default, span: start + end })
    }

    fn parse_break(&mut self) -> Result<BreakStatement> {
        let start = self.cursor.expect(&TokenKind::Gtfo)?;
        let end = self.cursor.expect(&TokenKind::Newline)?;
        Ok(BreakStatement { span: start + end })
    }

    fn parse_return(&mut self) -> Result<ReturnStatement> {
        let start = self.cursor.expect(&TokenKind::FoundYr)?;
        let value = self.parse_expr()?;
        let end = self.cursor.expect(&TokenKind::Newline)?;
        Ok(ReturnStatement { value, span: start + end })
    }

    /// `IM IN YR Ident [LoopUpd] [LoopGuard] NEWLINE Block IM OUTTA YR Ident NEWLINE`.
    fn parse_loop(&mut self) -> Result<LoopStatement> {
        let start = self.cursor.expect(&TokenKind::ImInYr)?;
        let name = self.cursor.expect_identifier()?;

        let (var, update) = self.parse_loop_update(&name)?;
        let guard = self.parse_loop_guard()?;

        self.cursor.expect(&TokenKind::Newline)?;
        let body = self.parse_block()?;

        self.cursor.expect(&TokenKind::ImOuttaYr)?;
        let closing = self.cursor.expect_identifier()?;
        if !closing.matches(&name) {
            let span = closing.span();
            return Err(self.cursor.handler.emit_err(ParseError::mismatched_loop_name(name, closing, span)));
        }
        let end = self.cursor.expect(&TokenKind::Newline)?;

        Ok(LoopStatement { name, var, update, guard, body, span: start + end })
    }

    /// Recognizes `UPPIN`, `NERFIN`, or a previously declared unary function
    /// name, each followed by `YR Ident`. Any other token means no update is
    /// present and the loop has no `var`/`update`.
    fn parse_loop_update(&mut self, loop_name: &Identifier) -> Result<(Option<Identifier>, Option<Expression>)> {
        enum Update {
            Increment,
            Decrement,
            Call(Identifier),
        }

        let update_kind = if self.cursor.accept(&TokenKind::Uppin) {
            Update::Increment
        } else if self.cursor.accept(&TokenKind::Nerfin) {
            Update::Decrement
        } else if let TokenKind::Ident(name) = &self.cursor.token.kind {
            if self.is_unary_function(*name) {
                Update::Call(self.cursor.expect_identifier()?)
            } else {
                return Ok((None, None));
            }
        } else {
            return Ok((None, None));
        };

        self.cursor.expect(&TokenKind::Yr)?;
        let var = self.cursor.expect_identifier()?;
        let var_ref = Expression::Identifier(var);

        let update = match update_kind {
            Update::Increment => {
                Expression::Op(OpExpression::new(OpKind::Add, vec![var_ref, one_at(var.span())], var.span()))
            }
            Update::Decrement => {
                Expression::Op(OpExpression::new(OpKind::Sub, vec![var_ref, one_at(var.span())], var.span()))
            }
            // The grammar gives no separate scope token for this shape; the
            // function is looked up and called within the loop's own name.
            Update::Call(func) => Expression::FuncCall(FuncCallExpression {
                scope: *loop_name,
                name: func,
                args: vec![var_ref],
                span: func.span(),
            }),
        };

        Ok((Some(var), Some(update)))
    }

    fn parse_loop_guard(&mut self) -> Result<Option<(LoopGuardKind, Expression)>> {
        if self.cursor.accept(&TokenKind::Til) {
            Ok(Some((LoopGuardKind::Til, self.parse_expr()?)))
        } else if self.cursor.accept(&TokenKind::Wile) {
            Ok(Some((LoopGuardKind::Wile, self.parse_expr()?)))
        } else {
            Ok(None)
        }
    }

    /// `HOW IZ Ident Ident [YR Ident (AN YR Ident)*] NEWLINE Block IF U SAY SO NEWLINE`.
    ///
    /// Registers `(scope, name) -> arity` the moment the header finishes, so
    /// the loop-update lookahead can recognize calls to it from this point on.
    fn parse_func_def(&mut self) -> Result<FuncDefStatement> {
        let start = self.cursor.expect(&TokenKind::HowIz)?;
        let scope = self.cursor.expect_identifier()?;
        let name = self.cursor.expect_identifier()?;

        let mut params = Vec::new();
        if self.cursor.accept(&TokenKind::Yr) {
            params.push(self.cursor.expect_identifier()?);
            while self.cursor.accept(&TokenKind::An) {
                self.cursor.expect(&TokenKind::Yr)?;
                params.push(self.cursor.expect_identifier()?);
            }
        }
        self.declare_function(scope.name, name.name, params.len());

        self.cursor.expect(&TokenKind::Newline)?;
        let body = self.parse_block()?;
        self.cursor.expect(&TokenKind::IfUSaySo)?;
        let end = self.cursor.expect(&TokenKind::Newline)?;

        Ok(FuncDefStatement { scope, name, params, body, span: start + end })
    }

    fn parse_ident_led_stmt(&mut self) -> Result<Statement> {
        let ident = self.cursor.expect_identifier()?;
        match self.cursor.token.kind {
            TokenKind::IsNowA => self.parse_cast(ident).map(Statement::Cast),
            TokenKind::R => self.parse_assign(ident).map(Statement::Assignment),
            TokenKind::HasA => self.parse_declaration(ident).map(Statement::Declaration),
            TokenKind::RNoob => self.parse_dealloc(ident).map(Statement::Deallocation),
            _ => unreachable!("peek_ident_led_stmt only dispatches here for one of the above"),
        }
    }

    fn parse_cast(&mut self, target: Identifier) -> Result<CastStatement> {
        let start = target.span();
        self.cursor.expect(&TokenKind::IsNowA)?;
        let new_type = self.parse_type()?;
        let end = self.cursor.expect(&TokenKind::Newline)?;
        Ok(CastStatement { target, new_type, span: start + end })
    }

    fn parse_assign(&mut self, target: Identifier) -> Result<AssignStatement> {
        let start = target.span();
        self.cursor.expect(&TokenKind::R)?;
        let value = self.parse_expr()?;
        let end = self.cursor.expect(&TokenKind::Newline)?;
        Ok(AssignStatement { target, value, span: start + end })
    }

    /// `Ident HAS A Ident [ ITZ Expr | ITZ A Type ]`. `ITZ` and `ITZ A` are
    /// distinct folded tokens, so `init` and `declared_type` can never both
    /// be populated by this grammar -- `InvalidDeclaration` exists in the
    /// error taxonomy for completeness but this parser never constructs it.
    fn parse_declaration(&mut self, scope: Identifier) -> Result<DeclarationStatement> {
        let start = scope.span();
        self.cursor.expect(&TokenKind::HasA)?;
        let target = self.cursor.expect_identifier()?;

        let mut init = None;
        let mut declared_type = None;
        if self.cursor.accept(&TokenKind::Itz) {
            init = Some(self.parse_expr()?);
        } else if self.cursor.accept(&TokenKind::ItzA) {
            declared_type = Some(self.parse_type()?);
        }

        let end = self.cursor.expect(&TokenKind::Newline)?;
        Ok(DeclarationStatement { scope, target, init, declared_type, span: start + end })
    }

    fn parse_dealloc(&mut self, target: Identifier) -> Result<DeallocationStatement> {
        let start = target.span();
        self.cursor.expect(&TokenKind::RNoob)?;
        let end = self.cursor.expect(&TokenKind::Newline)?;
        Ok(DeallocationStatement { target, span: start + end })
    }

    pub(crate) fn parse_expr_stmt(&mut self) -> Result<ExprStatement> {
        let expression = self.parse_expr()?;
        let end = self.cursor.expect(&TokenKind::Newline)?;
        let span = expression.span() + end;
        Ok(ExprStatement { expression, span })
    }

    pub(crate) fn parse_type(&mut self) -> Result<Type> {
        const KINDS: &[TokenKind] =
            &[TokenKind::Noob, TokenKind::Troof, TokenKind::Numbr, TokenKind::Numbar, TokenKind::Yarn];
        self.cursor.expect_any(KINDS)?;
        Ok(match self.cursor.prev_token.kind {
            TokenKind::Noob => Type::Noob,
            TokenKind::Troof => Type::Troof,
            TokenKind::Numbr => Type::Numbr,
            TokenKind::Numbar => Type::Numbar,
            TokenKind::Yarn => Type::Yarn,
            _ => unreachable!("expect_any(KINDS) only accepts one of the above"),
        })
    }
}

fn one_at(span: lolcode_span::Span) -> Expression {
    Expression::Constant(ConstantExpression { value: Constant::Integer(1), span })
}
