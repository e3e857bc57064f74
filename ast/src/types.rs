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

/// One of LOLCODE's five primitive types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    /// `NOOB`, the type of an uninitialized or explicitly nil-valued variable.
    Noob,
    /// `TROOF`, a boolean.
    Troof,
    /// `NUMBR`, an integer.
    Numbr,
    /// `NUMBAR`, a floating point number.
    Numbar,
    /// `YARN`, a string.
    Yarn,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Noob => "NOOB",
            Self::Troof => "TROOF",
            Self::Numbr => "NUMBR",
            Self::Numbar => "NUMBAR",
            Self::Yarn => "YARN",
        })
    }
}
