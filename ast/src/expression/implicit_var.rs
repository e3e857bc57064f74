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

use crate::{simple_node_impl, Node};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `IT`, a nullary reference to the runtime's implicit accumulator.
///
/// Purely a parse-level placeholder: the parser attaches no semantics here,
/// it just records where `IT` occurred. Reading the thread-local accumulator
/// it names is the interpreter's responsibility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImplicitVarExpression {
    pub span: Span,
}

simple_node_impl!(ImplicitVarExpression);

impl fmt::Display for ImplicitVarExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IT")
    }
}
