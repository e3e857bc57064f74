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

/// `VISIBLE` -- prints one or more expressions, space-separated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrintStatement {
    pub args: Vec<Expression>,
    /// True when a trailing `!` suppressed the usual newline.
    pub suppress_newline: bool,
    pub span: Span,
}

simple_node_impl!(PrintStatement);

impl fmt::Display for PrintStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VISIBLE")?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        if self.suppress_newline {
            write!(f, " !")?;
        }
        Ok(())
    }
}
