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

use crate::{simple_node_impl, Expression, Identifier, Node, Type};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `Ident HAS A Ident [ ITZ Expr | ITZ A Type ]` -- introduces a new variable.
///
/// `init` and `declared_type` are mutually exclusive; the parser never
/// constructs one of these with both present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeclarationStatement {
    pub scope: Identifier,
    pub target: Identifier,
    pub init: Option<Expression>,
    pub declared_type: Option<Type>,
    pub span: Span,
}

simple_node_impl!(DeclarationStatement);

impl fmt::Display for DeclarationStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HAS A {}", self.scope, self.target)?;
        if let Some(init) = &self.init {
            write!(f, " ITZ {init}")?;
        } else if let Some(ty) = &self.declared_type {
            write!(f, " ITZ A {ty}")?;
        }
        Ok(())
    }
}
