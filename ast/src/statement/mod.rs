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

use crate::Node;
use lolcode_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

mod assign;
pub use assign::*;

mod block;
pub use block::*;

mod break_;
pub use break_::*;

mod cast;
pub use cast::*;

mod conditional;
pub use conditional::*;

mod deallocation;
pub use deallocation::*;

mod declaration;
pub use declaration::*;

mod expr_stmt;
pub use expr_stmt::*;

mod func_def;
pub use func_def::*;

mod input;
pub use input::*;

mod loop_;
pub use loop_::*;

mod main;
pub use main::*;

mod print;
pub use print::*;

mod return_;
pub use return_::*;

mod switch;
pub use switch::*;

/// A statement: one action within a block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Cast(CastStatement),
    Print(PrintStatement),
    Input(InputStatement),
    Assignment(AssignStatement),
    Declaration(DeclarationStatement),
    IfThenElse(Box<IfThenElseStatement>),
    Switch(SwitchStatement),
    Break(BreakStatement),
    Return(ReturnStatement),
    Loop(Box<LoopStatement>),
    Deallocation(DeallocationStatement),
    FuncDef(Box<FuncDefStatement>),
    ExprStmt(ExprStatement),
}

impl Node for Statement {
    fn span(&self) -> Span {
        match self {
            Self::Cast(s) => s.span(),
            Self::Print(s) => s.span(),
            Self::Input(s) => s.span(),
            Self::Assignment(s) => s.span(),
            Self::Declaration(s) => s.span(),
            Self::IfThenElse(s) => s.span(),
            Self::Switch(s) => s.span(),
            Self::Break(s) => s.span(),
            Self::Return(s) => s.span(),
            Self::Loop(s) => s.span(),
            Self::Deallocation(s) => s.span(),
            Self::FuncDef(s) => s.span(),
            Self::ExprStmt(s) => s.span(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cast(s) => s.fmt(f),
            Self::Print(s) => s.fmt(f),
            Self::Input(s) => s.fmt(f),
            Self::Assignment(s) => s.fmt(f),
            Self::Declaration(s) => s.fmt(f),
            Self::IfThenElse(s) => s.fmt(f),
            Self::Switch(s) => s.fmt(f),
            Self::Break(s) => s.fmt(f),
            Self::Return(s) => s.fmt(f),
            Self::Loop(s) => s.fmt(f),
            Self::Deallocation(s) => s.fmt(f),
            Self::FuncDef(s) => s.fmt(f),
            Self::ExprStmt(s) => s.fmt(f),
        }
    }
}
