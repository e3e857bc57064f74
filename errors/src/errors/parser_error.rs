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

use super::macros::create_messages;
use std::fmt::Display;

create_messages!(
    /// Diagnostics raised while recursive-descending through the token stream.
    /// The parser aborts at the first of these it constructs; none are ever collected.
    ParseError,
    code_mask: 2000i32,
    code_prefix: "PAR",

    @formatted
    unexpected_token {
        args: (found: impl Display, expected: impl Display),
        code: 0,
        msg: format!("expected {expected}, found {found}"),
        help: None,
    }

    @formatted
    unexpected_eof {
        args: (expected: impl Display),
        code: 1,
        msg: format!("unexpected end of file, expected {expected}"),
        help: None,
    }

    @formatted
    mismatched_loop_name {
        args: (opened: impl Display, closed: impl Display),
        code: 2,
        msg: format!("loop opened as `{opened}` but closed as `{closed}`"),
        help: Some("the identifier after `IM OUTTA YR` must lexically match the one after `IM IN YR`".to_string()),
    }

    @formatted
    invalid_declaration {
        args: (target: impl Display),
        code: 3,
        msg: format!("declaration of `{target}` supplies both an initial value and a declared type"),
        help: Some("`I HAS A X ITZ <expr>` and `I HAS A X ITZ A <type>` are mutually exclusive".to_string()),
    }

    @formatted
    missing_case {
        args: (),
        code: 4,
        msg: format!("a `WTF?` switch must have at least one `OMG` case"),
        help: None,
    }

    @formatted
    missing_greeting {
        args: (),
        code: 5,
        msg: format!("a program must open with `HAI` followed by a version number"),
        help: None,
    }
);
