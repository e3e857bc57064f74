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

use super::Block;
use crate::{simple_node_impl, Identifier, Node};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `HOW IZ ... IF U SAY SO` -- defines a function in a scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuncDefStatement {
    pub scope: Identifier,
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub body: Block,
    pub span: Span,
}

simple_node_impl!(FuncDefStatement);

impl fmt::Display for FuncDefStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HOW IZ {} {}", self.scope, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i == 0 {
                write!(f, " YR {param}")?;
            } else {
                write!(f, " AN YR {param}")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.body)?;
        write!(f, "IF U SAY SO")
    }
}
