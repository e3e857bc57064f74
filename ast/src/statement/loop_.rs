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
use crate::{simple_node_impl, Expression, Identifier, Node};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which keyword introduced a loop's guard expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopGuardKind {
    /// `TIL` -- loop continues while the guard is false.
    Til,
    /// `WILE` -- loop continues while the guard is true.
    Wile,
}

impl fmt::Display for LoopGuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Til => "TIL",
            Self::Wile => "WILE",
        })
    }
}

/// `IM IN YR ... IM OUTTA YR` -- a loop, optionally auto-updating a variable
/// and optionally guarded by a `TIL`/`WILE` condition.
///
/// Invariants: `update.is_some()` implies `var.is_some()`; the closing name
/// must lexically equal `name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopStatement {
    pub name: Identifier,
    pub var: Option<Identifier>,
    pub update: Option<Expression>,
    pub guard: Option<(LoopGuardKind, Expression)>,
    pub body: Block,
    pub span: Span,
}

simple_node_impl!(LoopStatement);

impl fmt::Display for LoopStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IM IN YR {}", self.name)?;
        if let (Some(var), Some(update)) = (&self.var, &self.update) {
            write!(f, " {update} YR {var}")?;
        }
        if let Some((kind, guard)) = &self.guard {
            write!(f, " {kind} {guard}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.body)?;
        write!(f, "IM OUTTA YR {}", self.name)
    }
}
