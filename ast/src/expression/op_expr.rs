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

use super::{Expression, OpKind};
use crate::{simple_node_impl, Node};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A uniform representation for unary, binary, and n-ary operators.
///
/// Construction enforces the arity contract of `op`: `args.len()` is always
/// `>= op.min_arity()`, and equals it exactly unless `op.is_variadic()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpExpression {
    pub op: OpKind,
    pub args: Vec<Expression>,
    pub span: Span,
}

simple_node_impl!(OpExpression);

impl OpExpression {
    /// Builds an `Op` node, asserting that `args` satisfies `op`'s arity contract.
    ///
    /// # Panics
    /// Panics in debug builds if `args` violates the arity contract -- this
    /// indicates a bug in the parser, never malformed user input.
    pub fn new(op: OpKind, args: Vec<Expression>, span: Span) -> Self {
        debug_assert!(args.len() >= op.min_arity(), "{op} built with too few arguments");
        debug_assert!(
            op.is_variadic() || args.len() == op.min_arity(),
            "{op} is not variadic but got {} arguments",
            args.len()
        );
        Self { op, args, span }
    }
}

impl fmt::Display for OpExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        if self.op.is_variadic() {
            write!(f, " MKAY")?;
        }
        Ok(())
    }
}
