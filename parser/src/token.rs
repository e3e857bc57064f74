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

use lolcode_span::{Span, Symbol};

/// The closed set of token kinds the scanner may produce.
///
/// Multi-word surface keywords (`IS NOW A`, `HAS A`, `R NOOB`, `IM IN YR`,
/// `IM OUTTA YR`, `HOW IZ`, `IF U SAY SO`, `FOUND YR`, `SUM OF`,
/// `BOTH SAEM`, ...) arrive already folded into a single variant each; the
/// parser never reassembles them out of smaller tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Ident(Symbol),
    Integer(i64),
    Float(f64),
    Str(String),
    Boolean(bool),

    // Program delimiters
    Hai,
    Kthxbye,

    // Statement keywords
    Visible,
    Bang,
    Gimmeh,
    Orly,
    Yarly,
    Mebbe,
    Nowai,
    Oic,
    Wtf,
    Omg,
    Omgwtf,
    Gtfo,
    FoundYr,
    ImInYr,
    ImOuttaYr,
    Til,
    Wile,
    Uppin,
    Nerfin,
    HowIz,
    IfUSaySo,
    IsNowA,
    R,
    HasA,
    Itz,
    ItzA,
    RNoob,

    // Shared punctuation-like keywords
    Yr,
    An,
    A,
    Mkay,
    Iz,
    It,
    Maek,

    // Operator keywords
    Not,
    SumOf,
    DiffOf,
    ProduktOf,
    QuoshuntOf,
    ModOf,
    BiggrOf,
    SmallrOf,
    BothOf,
    EitherOf,
    WonOf,
    BothSaem,
    Diffrint,
    Smoosh,
    AllOf,
    AnyOf,

    // Type keywords
    Noob,
    Troof,
    Numbr,
    Numbar,
    Yarn,

    // Structural
    Newline,
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ident(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Boolean(b) => write!(f, "{}", if *b { "WIN" } else { "FAIL" }),
            Self::Hai => write!(f, "HAI"),
            Self::Kthxbye => write!(f, "KTHXBYE"),
            Self::Visible => write!(f, "VISIBLE"),
            Self::Bang => write!(f, "!"),
            Self::Gimmeh => write!(f, "GIMMEH"),
            Self::Orly => write!(f, "O RLY?"),
            Self::Yarly => write!(f, "YA RLY"),
            Self::Mebbe => write!(f, "MEBBE"),
            Self::Nowai => write!(f, "NO WAI"),
            Self::Oic => write!(f, "OIC"),
            Self::Wtf => write!(f, "WTF?"),
            Self::Omg => write!(f, "OMG"),
            Self::Omgwtf => write!(f, "OMGWTF"),
            Self::Gtfo => write!(f, "GTFO"),
            Self::FoundYr => write!(f, "FOUND YR"),
            Self::ImInYr => write!(f, "IM IN YR"),
            Self::ImOuttaYr => write!(f, "IM OUTTA YR"),
            Self::Til => write!(f, "TIL"),
            Self::Wile => write!(f, "WILE"),
            Self::Uppin => write!(f, "UPPIN"),
            Self::Nerfin => write!(f, "NERFIN"),
            Self::HowIz => write!(f, "HOW IZ"),
            Self::IfUSaySo => write!(f, "IF U SAY SO"),
            Self::IsNowA => write!(f, "IS NOW A"),
            Self::R => write!(f, "R"),
            Self::HasA => write!(f, "HAS A"),
            Self::Itz => write!(f, "ITZ"),
            Self::ItzA => write!(f, "ITZ A"),
            Self::RNoob => write!(f, "R NOOB"),
            Self::Yr => write!(f, "YR"),
            Self::An => write!(f, "AN"),
            Self::A => write!(f, "A"),
            Self::Mkay => write!(f, "MKAY"),
            Self::Iz => write!(f, "IZ"),
            Self::It => write!(f, "IT"),
            Self::Maek => write!(f, "MAEK"),
            Self::Not => write!(f, "NOT"),
            Self::SumOf => write!(f, "SUM OF"),
            Self::DiffOf => write!(f, "DIFF OF"),
            Self::ProduktOf => write!(f, "PRODUKT OF"),
            Self::QuoshuntOf => write!(f, "QUOSHUNT OF"),
            Self::ModOf => write!(f, "MOD OF"),
            Self::BiggrOf => write!(f, "BIGGR OF"),
            Self::SmallrOf => write!(f, "SMALLR OF"),
            Self::BothOf => write!(f, "BOTH OF"),
            Self::EitherOf => write!(f, "EITHER OF"),
            Self::WonOf => write!(f, "WON OF"),
            Self::BothSaem => write!(f, "BOTH SAEM"),
            Self::Diffrint => write!(f, "DIFFRINT"),
            Self::Smoosh => write!(f, "SMOOSH"),
            Self::AllOf => write!(f, "ALL OF"),
            Self::AnyOf => write!(f, "ANY OF"),
            Self::Noob => write!(f, "NOOB"),
            Self::Troof => write!(f, "TROOF"),
            Self::Numbr => write!(f, "NUMBR"),
            Self::Numbar => write!(f, "NUMBAR"),
            Self::Yarn => write!(f, "YARN"),
            Self::Newline => write!(f, "NEWLINE"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

/// A token together with the source position it was scanned from.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn dummy() -> Self {
        Self { kind: TokenKind::Eof, span: Span::dummy() }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
