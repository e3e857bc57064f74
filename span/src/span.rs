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

use crate::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A location in a source file, tracked at line granularity (the scanner this
/// parser consumes tokens from reports only a file name and a 1-based line
/// number per token -- see the upstream token contract).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// The name of the originating file.
    pub file: Symbol,
    /// The first line this span covers (1-based).
    pub line_start: u32,
    /// The last line this span covers (1-based, inclusive).
    pub line_end: u32,
}

impl Span {
    /// Constructs a span covering a single line in `file`.
    pub fn new(file: Symbol, line: u32) -> Self {
        Self { file, line_start: line, line_end: line }
    }

    /// A span with no meaningful location, used for synthetic nodes.
    pub fn dummy() -> Self {
        Self { file: Symbol::intern(""), line_start: 0, line_end: 0 }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::dummy()
    }
}

/// Merges two spans into the smallest span covering both.
impl Add for Span {
    type Output = Span;

    fn add(self, other: Span) -> Span {
        Span {
            file: self.file,
            line_start: self.line_start.min(other.line_start),
            line_end: self.line_end.max(other.line_end),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line_start == self.line_end {
            write!(f, "{}:{}", self.file, self.line_start)
        } else {
            write!(f, "{}:{}-{}", self.file, self.line_start, self.line_end)
        }
    }
}
