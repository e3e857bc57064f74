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

use crate::{simple_node_impl, Identifier, Node, Type};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `Ident IS NOW A Type` -- changes the declared type of an existing variable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CastStatement {
    pub target: Identifier,
    pub new_type: Type,
    pub span: Span,
}

simple_node_impl!(CastStatement);

impl fmt::Display for CastStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IS NOW A {}", self.target, self.new_type)
    }
}
