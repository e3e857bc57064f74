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

/// Declares a family of formatted diagnostics.
///
/// Mirrors the shape of Leo's `create_messages!`: each `@formatted` block names
/// a constructor taking its own arguments plus a [`lolcode_span::Span`], and
/// the whole family shares a `code_prefix` and `code_mask` used to render a
/// stable four-digit error code (e.g. `PAR0003`).
macro_rules! create_messages {
    (
        $(#[$family_attr:meta])*
        $name:ident,
        code_mask: $code_mask:expr,
        code_prefix: $code_prefix:expr,
        $(
            @formatted
            $title:ident {
                args: ($($arg_name:ident: $arg_ty:ty),* $(,)?),
                code: $code:expr,
                msg: $message:expr,
                help: $help:expr,
            }
        )*
    ) => {
        $(#[$family_attr])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum $name {
            $(
                #[allow(missing_docs)]
                $title { message: String, span: $crate::Span, code: i32, help: Option<String> },
            )*
        }

        impl $name {
            $(
                #[allow(missing_docs)]
                pub fn $title($($arg_name: $arg_ty,)* span: $crate::Span) -> Self {
                    Self::$title {
                        message: $message,
                        span,
                        code: $code_mask + $code,
                        help: $help,
                    }
                }
            )*

            /// The stable numeric code identifying this diagnostic, e.g. `2003`.
            pub fn code(&self) -> i32 {
                match self {
                    $(Self::$title { code, .. } => *code,)*
                }
            }

            /// The source location the diagnostic is anchored to.
            pub fn span(&self) -> $crate::Span {
                match self {
                    $(Self::$title { span, .. } => *span,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$title { message, span, code, help } => {
                            write!(f, "Error [{}{:04}]: {message}\n    --> {span}", $code_prefix, code)?;
                            if let Some(help) = help {
                                write!(f, "\n    = help: {help}")?;
                            }
                            Ok(())
                        }
                    )*
                }
            }
        }

        impl std::error::Error for $name {}
    };
}

pub(crate) use create_messages;
