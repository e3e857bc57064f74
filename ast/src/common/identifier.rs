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
use lolcode_span::{Span, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A variable, scope, function, or loop name, e.g. `X` in `I HAS A X`.
///
/// Retains the source file and line it was written on for diagnostics;
/// immutable after construction like every other node in the tree.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Identifier {
    /// The characters the user wrote, e.g. `X`.
    pub name: Symbol,
    /// Where this identifier occurred in the source.
    pub span: Span,
}

simple_node_impl!(Identifier);

impl Identifier {
    /// Constructs a new identifier named `name` at `span`.
    pub fn new(name: Symbol, span: Span) -> Self {
        Self { name, span }
    }

    /// True if the two identifiers name the same thing, ignoring span.
    ///
    /// Used for the loop-name equality check at `IM OUTTA YR` and for the
    /// loop-update function-table lookup.
    pub fn matches(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
