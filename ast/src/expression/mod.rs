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

use crate::{Identifier, Node};
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

mod cast;
pub use cast::*;

mod constant_expr;
pub use constant_expr::*;

mod func_call;
pub use func_call::*;

mod implicit_var;
pub use implicit_var::*;

mod op;
pub use op::*;

mod op_expr;
pub use op_expr::*;

/// An expression: something that evaluates to a value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// A non-destructive type conversion, e.g. `MAEK X A NUMBR`.
    Cast(CastExpression),
    /// A literal value, e.g. `5`, `"hi"`, `WIN`.
    Constant(ConstantExpression),
    /// A variable reference.
    Identifier(Identifier),
    /// A call to a user-defined function.
    FuncCall(FuncCallExpression),
    /// A unary, binary, or n-ary operator application.
    Op(OpExpression),
    /// `IT`, the implicit accumulator.
    ImplicitVar(ImplicitVarExpression),
}

impl Node for Expression {
    fn span(&self) -> Span {
        match self {
            Self::Cast(e) => e.span(),
            Self::Constant(e) => e.span(),
            Self::Identifier(e) => e.span(),
            Self::FuncCall(e) => e.span(),
            Self::Op(e) => e.span(),
            Self::ImplicitVar(e) => e.span(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cast(e) => e.fmt(f),
            Self::Constant(e) => e.fmt(f),
            Self::Identifier(e) => e.fmt(f),
            Self::FuncCall(e) => e.fmt(f),
            Self::Op(e) => e.fmt(f),
            Self::ImplicitVar(e) => e.fmt(f),
        }
    }
}
