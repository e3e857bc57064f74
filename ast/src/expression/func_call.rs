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
use crate::{simple_node_impl, Identifier, Node};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A call to a previously declared function, e.g. `BOX IZ SCALE YR X MKAY`.
///
/// `scope` and `name` are carried as opaque identifier images; resolving
/// `(scope, name)` to a declaration is the interpreter's job, not the
/// parser's (see the open question on `FuncCallExprNode` in the design notes).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuncCallExpression {
    pub scope: Identifier,
    pub name: Identifier,
    pub args: Vec<Expression>,
    pub span: Span,
}

simple_node_impl!(FuncCallExpression);

impl fmt::Display for FuncCallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IZ {}", self.scope, self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i == 0 {
                write!(f, " YR {arg}")?;
            } else {
                write!(f, " AN YR {arg}")?;
            }
        }
        write!(f, " MKAY")
    }
}
