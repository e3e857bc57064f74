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

//! The LOLCODE abstract syntax tree: the data model the parser builds and
//! every downstream consumer (interpreter, pretty-printer) traverses.
//!
//! Every node owns its children exclusively; there is no sharing and no
//! cycles. Polymorphic categories (`Expression`, `Statement`, `Constant`,
//! `Type`) are represented as a single Rust enum per category rather than a
//! tag-plus-pointer pair, so the "tag matches payload" invariant is enforced
//! by the type system instead of by convention.

pub mod common;
pub use common::*;

pub mod constant;
pub use constant::*;

pub mod expression;
pub use expression::*;

pub mod statement;
pub use statement::*;

pub mod types;
pub use types::*;
