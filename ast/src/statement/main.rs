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
use crate::{simple_node_impl, Node};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The program root: everything between `HAI <version>` and `KTHXBYE`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Main {
    /// The version float token following `HAI`, unvalidated by the parser.
    pub version: f64,
    pub block: Block,
    pub span: Span,
}

simple_node_impl!(Main);

impl fmt::Display for Main {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HAI {}", self.version)?;
        write!(f, "{}", self.block)?;
        write!(f, "KTHXBYE")
    }
}
