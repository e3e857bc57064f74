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

//! A small side-channel for observing diagnostics as they're raised.
//!
//! The grammar in this crate never recovers from a parse error -- the first
//! one aborts the parse via `?` -- so the [`Handler`] isn't an accumulator of
//! independent errors the way a recovering parser's would be. Its job is
//! purely observational: give callers (and `tracing` subscribers) a place to
//! see the error as it's constructed, before it propagates up as the `Err`
//! of the parse.

use crate::ParseError;
use std::cell::RefCell;

#[derive(Default)]
struct HandlerInner {
    count: usize,
    last: Option<ParseError>,
}

/// Observes diagnostics emitted during a single parse.
#[derive(Default)]
pub struct Handler {
    inner: RefCell<HandlerInner>,
}

impl Handler {
    /// Creates a fresh handler with no observed errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `err` and logs it, then hands it back so call sites can write
    /// `return Err(self.handler.emit_err(err))`.
    pub fn emit_err(&self, err: ParseError) -> ParseError {
        tracing::error!(code = err.code(), span = %err.span(), "{}", err);
        let mut inner = self.inner.borrow_mut();
        inner.count += 1;
        inner.last = Some(err.clone());
        err
    }

    /// True if any error has been emitted on this handler.
    pub fn had_errors(&self) -> bool {
        self.inner.borrow().count > 0
    }

    /// The number of errors emitted so far.
    pub fn error_count(&self) -> usize {
        self.inner.borrow().count
    }

    /// The most recently emitted error, if any.
    pub fn last_err(&self) -> Option<ParseError> {
        self.inner.borrow().last.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lolcode_span::Span;

    #[test]
    fn emit_err_records_and_returns() {
        let handler = Handler::new();
        assert!(!handler.had_errors());
        let err = handler.emit_err(ParseError::missing_case(Span::dummy()));
        assert!(handler.had_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.last_err(), Some(err));
    }
}
