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

use super::Expression;
use crate::{simple_node_impl, Node, Type};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-destructive type conversion, e.g. `MAEK X A NUMBR`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CastExpression {
    pub value: Box<Expression>,
    pub target_type: Type,
    pub span: Span,
}

simple_node_impl!(CastExpression);

impl fmt::Display for CastExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MAEK {} A {}", self.value, self.target_type)
    }
}
