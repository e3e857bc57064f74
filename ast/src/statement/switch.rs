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

/// `WTF?` -- a switch over one or more `OMG` cases with an optional default.
///
/// Invariant: `guards.len() == blocks.len() >= 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
    pub guards: Vec<Expression>,
    pub blocks: Vec<Block>,
    pub default: Option<Block>,
    pub span: Span,
}

simple_node_impl!(SwitchStatement);

impl fmt::Display for SwitchStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WTF?")?;
        for (guard, block) in self.guards.iter().zip(&self.blocks) {
            writeln!(f, "OMG {guard}")?;
            write!(f, "{block}")?;
        }
        if let Some(default) = &self.default {
            writeln!(f, "OMGWTF")?;
            write!(f, "{default}")?;
        }
        write!(f, "OIC")
    }
}
