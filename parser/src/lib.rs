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

//! Recursive-descent parser that turns a LOLCODE token stream into a
//! [`lolcode_ast::Main`] program tree.
//!
//! Consumes the finite, `Eof`-terminated token sequence a scanner would
//! produce (see [`token`]) through a forward-only [`cursor::TokenCursor`],
//! and drives the grammar in [`parser`]. The parser never recovers from a
//! mismatch: the first one aborts with a single located [`lolcode_errors::ParseError`].

pub mod cursor;
pub mod parser;
pub mod token;

pub use parser::{parse, Parser};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests;
