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

/// A literal value as written in the source, e.g. `5`, `3.14`, `WIN`, `"hi"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    /// A `NUMBR` literal.
    Integer(i64),
    /// A `NUMBAR` literal.
    Float(f64),
    /// A `TROOF` literal, i.e. `WIN` or `FAIL`.
    Boolean(bool),
    /// A `YARN` literal, already unescaped by the scanner.
    String(String),
    /// The `NOOB` literal.
    Nil,
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Boolean(b) => write!(f, "{}", if *b { "WIN" } else { "FAIL" }),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Nil => write!(f, "NOOB"),
        }
    }
}
