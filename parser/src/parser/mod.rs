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

//! The recursive-descent driver: one routine per grammar nonterminal,
//! composing [`TokenCursor`](crate::cursor::TokenCursor) primitives and AST
//! constructors, emitting a diagnostic and aborting on the first mismatch.

mod expression;
mod statement;

use crate::cursor::TokenCursor;
use crate::token::Token;
use fxhash::{FxHashMap, FxHashSet};
use lolcode_ast::Main;
use lolcode_errors::{Handler, Result};
use lolcode_span::{create_session_if_not_set_then, Symbol};

/// Parser state: the token cursor plus the transient loop-update function
/// registry described by the loop-update disambiguation rule.
///
/// The registry is local to one parse and is discarded with the `Parser`;
/// it is not part of the returned AST.
pub struct Parser<'a> {
    pub(crate) cursor: TokenCursor<'a>,
    /// `(scope_image, name_image) -> arity`, populated the moment a
    /// `FuncDef` statement header finishes parsing.
    functions: FxHashMap<(Symbol, Symbol), usize>,
    /// Names of declared arity-1 functions, regardless of scope. The
    /// `LoopUpd` grammar position has no scope token to key on, so
    /// loop-update recognition consults this name-only view instead.
    unary_function_names: FxHashSet<Symbol>,
}

impl<'a> Parser<'a> {
    pub fn new(handler: &'a Handler, tokens: Vec<Token>) -> Self {
        Self {
            cursor: TokenCursor::new(handler, tokens),
            functions: FxHashMap::default(),
            unary_function_names: FxHashSet::default(),
        }
    }

    /// Registers a just-parsed function definition's arity so that a later
    /// loop update can recognize its name as a unary-function update.
    pub(crate) fn declare_function(&mut self, scope: Symbol, name: Symbol, arity: usize) {
        self.functions.insert((scope, name), arity);
        if arity == 1 {
            self.unary_function_names.insert(name);
        }
    }

    /// True if `name` names some previously declared arity-1 function.
    pub(crate) fn is_unary_function(&self, name: Symbol) -> bool {
        self.unary_function_names.contains(&name)
    }
}

/// Parses a complete token stream into a [`Main`] program root.
///
/// Wraps the whole parse in a single symbol-interning session so that every
/// `Identifier` produced compares correctly within this parse, without
/// leaking interner state to any other concurrent parse.
pub fn parse(handler: &Handler, tokens: Vec<Token>) -> Result<Main> {
    create_session_if_not_set_then(|_| {
        let mut parser = Parser::new(handler, tokens);
        parser.parse_main()
    })
}
