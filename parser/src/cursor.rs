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

use crate::token::{Token, TokenKind};
use lolcode_ast::Identifier;
use lolcode_errors::{Handler, ParseError, Result};
use lolcode_span::{Span, Symbol};
use std::mem;

/// A forward-only, one-token-lookahead view of a finite token stream.
///
/// Owns the tokens for the duration of a single parse; never shared across
/// parses or threads.
pub struct TokenCursor<'a> {
    pub(crate) handler: &'a Handler,
    /// Remaining tokens, reversed so advancing is a cheap `.pop()`.
    tokens: Vec<Token>,
    pub(crate) token: Token,
    pub(crate) prev_token: Token,
}

impl<'a> TokenCursor<'a> {
    /// Builds a cursor over `tokens`, which must end with an `Eof` token.
    pub fn new(handler: &'a Handler, mut tokens: Vec<Token>) -> Self {
        tokens.reverse();
        let dummy = Token::dummy();
        let mut cursor = Self { handler, token: dummy.clone(), prev_token: dummy, tokens };
        cursor.bump();
        cursor
    }

    /// Advances past the current token.
    ///
    /// # Panics
    /// Panics if called after `Eof` has already been bumped past -- that
    /// indicates a parser bug (a production looping past end of input).
    pub fn bump(&mut self) {
        if let TokenKind::Eof = self.prev_token.kind {
            panic!("attempted to bump the cursor past EOF");
        }
        let next = self.tokens.pop().unwrap_or_else(|| Token::new(TokenKind::Eof, self.token.span));
        self.prev_token = mem::replace(&mut self.token, next);
    }

    /// True if the current token has kind `kind`; does not advance.
    pub fn peek(&self, kind: &TokenKind) -> bool {
        &self.token.kind == kind
    }

    /// If `peek(kind)`, advances past it and returns true; otherwise false.
    pub fn accept(&mut self, kind: &TokenKind) -> bool {
        self.peek(kind).then(|| self.bump()).is_some()
    }

    /// Advances past the current token if it has kind `kind`, else emits and
    /// returns a located [`ParseError::unexpected_token`].
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span> {
        if self.accept(kind) {
            Ok(self.prev_token.span)
        } else {
            self.unexpected(kind.to_string())
        }
    }

    /// Advances past the current token if it has any of `kinds`, else errors.
    pub fn expect_any(&mut self, kinds: &[TokenKind]) -> Result<Span> {
        if kinds.iter().any(|k| self.accept(k)) {
            Ok(self.prev_token.span)
        } else {
            let expected = kinds.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", ");
            self.unexpected(expected)
        }
    }

    pub(crate) fn unexpected<T>(&self, expected: impl std::fmt::Display) -> Result<T> {
        let err = if self.token.kind == TokenKind::Eof {
            ParseError::unexpected_eof(expected, self.token.span)
        } else {
            ParseError::unexpected_token(self.token.kind.to_string(), expected, self.token.span)
        };
        Err(self.handler.emit_err(err))
    }

    /// Looks at the token `dist` positions ahead without advancing.
    /// `dist == 0` is the current token.
    pub fn look_ahead<R>(&self, dist: usize, looker: impl FnOnce(&Token) -> R) -> R {
        if dist == 0 {
            return looker(&self.token);
        }
        match self.tokens.len().checked_sub(dist) {
            Some(idx) => looker(self.tokens.get(idx).unwrap_or(&self.token)),
            None => {
                let eof = Token::new(TokenKind::Eof, self.token.span);
                looker(&eof)
            }
        }
    }

    /// True until `Eof` has been reached.
    pub fn has_next(&self) -> bool {
        !matches!(self.token.kind, TokenKind::Eof)
    }

    fn ident_at_prev(&self, name: Symbol) -> Identifier {
        Identifier::new(name, self.prev_token.span)
    }

    /// Consumes the current token if it is an identifier, returning it.
    pub fn eat_identifier(&mut self) -> Option<Identifier> {
        if let TokenKind::Ident(name) = &self.token.kind {
            let name = *name;
            self.bump();
            return Some(self.ident_at_prev(name));
        }
        None
    }

    /// Consumes an identifier, or errors.
    pub fn expect_identifier(&mut self) -> Result<Identifier> {
        match self.eat_identifier() {
            Some(id) => Ok(id),
            None => self.unexpected("identifier"),
        }
    }

    /// Consumes the current token if it is an integer literal.
    pub fn eat_integer(&mut self) -> Option<i64> {
        if let TokenKind::Integer(v) = &self.token.kind {
            let v = *v;
            self.bump();
            return Some(v);
        }
        None
    }

    /// Consumes the current token if it is a float literal.
    pub fn eat_float(&mut self) -> Option<f64> {
        if let TokenKind::Float(v) = &self.token.kind {
            let v = *v;
            self.bump();
            return Some(v);
        }
        None
    }

    /// Consumes an unvalidated float literal (the `HAI` version token), or errors.
    pub fn expect_float(&mut self) -> Result<f64> {
        match self.eat_float() {
            Some(v) => Ok(v),
            None => self.unexpected("float"),
        }
    }

    /// Consumes the current token if it is a string literal.
    pub fn eat_string(&mut self) -> Option<String> {
        if let TokenKind::Str(ref s) = self.token.kind {
            let s = s.clone();
            self.bump();
            return Some(s);
        }
        None
    }

    /// Consumes the current token if it is a boolean literal.
    pub fn eat_boolean(&mut self) -> Option<bool> {
        if let TokenKind::Boolean(v) = &self.token.kind {
            let v = *v;
            self.bump();
            return Some(v);
        }
        None
    }
}
