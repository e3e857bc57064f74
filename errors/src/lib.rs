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

//! Diagnostics for the LOLCODE parser.
//!
//! This mirrors the shape of a typical Leo-style `leo-errors` crate, scaled
//! down to the one family of diagnostics a recursive-descent parser with no
//! error recovery needs: [`ParseError`].

pub mod emitter;
pub use emitter::Handler;

mod errors;
pub use errors::*;

pub use lolcode_span::Span;

/// The result of any parsing operation: either a value, or the single
/// [`ParseError`] that aborted the parse.
pub type Result<T> = std::result::Result<T, ParseError>;
