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

use lolcode_span::Span;

/// A node in the AST. Every node owns its children exclusively and is
/// immutable once the parser has finished constructing it.
pub trait Node: std::fmt::Debug + Clone + PartialEq {
    /// The span of source this node was parsed from.
    fn span(&self) -> Span;
}

/// Implements [`Node`] for a struct with a `span: Span` field.
#[macro_export]
macro_rules! simple_node_impl {
    ($ty:ty) => {
        impl $crate::Node for $ty {
            fn span(&self) -> lolcode_span::Span {
                self.span
            }
        }
    };
}
