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
use crate::{simple_node_impl, Expression, Node};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `ORLY?` -- if/then/else, with zero or more `MEBBE` clauses in between.
///
/// Invariant: `guards.len() == blocks.len()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IfThenElseStatement {
    pub yes: Block,
    pub no: Option<Block>,
    pub guards: Vec<Expression>,
    pub blocks: Vec<Block>,
    pub span: Span,
}

simple_node_impl!(IfThenElseStatement);

impl fmt::Display for IfThenElseStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "O RLY?")?;
        writeln!(f, "YA RLY")?;
        write!(f, "{}", self.yes)?;
        for (guard, block) in self.guards.iter().zip(&self.blocks) {
            writeln!(f, "MEBBE {guard}")?;
            write!(f, "{block}")?;
        }
        if let Some(no) = &self.no {
            writeln!(f, "NO WAI")?;
            write!(f, "{no}")?;
        }
        write!(f, "OIC")
    }
}
