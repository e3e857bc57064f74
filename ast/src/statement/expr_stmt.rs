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

use crate::{simple_node_impl, Expression, Node};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bare expression statement; its value becomes the new implicit variable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExprStatement {
    pub expression: Expression,
    pub span: Span,
}

simple_node_impl!(ExprStatement);

impl fmt::Display for ExprStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
