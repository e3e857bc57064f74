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

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operator of an [`OpExpression`](super::OpExpression).
///
/// Arity is not a fixed property of the tag: `And`/`Or` are binary when
/// parsed from `BOTH OF`/`EITHER OF` and variadic (n >= 2) when parsed from
/// the aggregate `ALL OF`/`ANY OF` forms. [`OpKind::min_arity`] and
/// [`OpKind::is_variadic`] describe what a given construction site must hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Max,
    Min,
    And,
    Or,
    Xor,
    Not,
    Eq,
    Neq,
    Cat,
}

impl OpKind {
    /// The smallest number of arguments a node tagged with this kind may carry.
    pub fn min_arity(self) -> usize {
        match self {
            Self::Not => 1,
            _ => 2,
        }
    }

    /// True if this kind may carry more than its minimum arity, i.e. it was
    /// built from one of the `MKAY`-terminated aggregate surface forms.
    pub fn is_variadic(self) -> bool {
        matches!(self, Self::Cat | Self::And | Self::Or)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Add => "SUM OF",
            Self::Sub => "DIFF OF",
            Self::Mult => "PRODUKT OF",
            Self::Div => "QUOSHUNT OF",
            Self::Mod => "MOD OF",
            Self::Max => "BIGGR OF",
            Self::Min => "SMALLR OF",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "WON OF",
            Self::Not => "NOT",
            Self::Eq => "BOTH SAEM",
            Self::Neq => "DIFFRINT",
            Self::Cat => "SMOOSH",
        })
    }
}
