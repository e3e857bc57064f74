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

//! Global string interning, modeled on the session-scoped interner used
//! throughout the Leo compiler (see `leo_span::symbol`).

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

/// An interned string. Two `Symbol`s are equal iff the strings they name are equal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `string` and returns a handle to it.
    pub fn intern(string: &str) -> Self {
        with_session_globals(|globals| globals.symbol_interner.borrow_mut().intern(string))
    }

    /// Returns the string this symbol names.
    pub fn as_str(self) -> String {
        with_session_globals(|globals| globals.symbol_interner.borrow().get(self).to_owned())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::intern(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::intern(&s)
    }
}

/// Backing storage for [`Symbol`]. Strings are interned once and never freed
/// for the lifetime of a single parse.
#[derive(Default)]
struct Interner {
    strings: Vec<String>,
    names: FxHashMap<String, Symbol>,
}

impl Interner {
    fn intern(&mut self, string: &str) -> Symbol {
        if let Some(&sym) = self.names.get(string) {
            return sym;
        }
        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(string.to_owned());
        self.names.insert(string.to_owned(), sym);
        sym
    }

    fn get(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }
}

/// Per-thread state shared by everything that interns or resolves a [`Symbol`]
/// during one parse. Kept deliberately small: the parser has no other shared
/// mutable state (see the parser's concurrency notes).
pub struct SessionGlobals {
    symbol_interner: RefCell<Interner>,
}

impl SessionGlobals {
    fn new() -> Self {
        Self { symbol_interner: RefCell::new(Interner::default()) }
    }
}

scoped_tls::scoped_thread_local!(static SESSION_GLOBALS: SessionGlobals);

/// Runs `f` with a fresh, isolated interner if one isn't already active on
/// this thread, otherwise reuses the active one. A single call to the
/// top-level `parse` entry point wraps its whole invocation in one of these,
/// so all symbols produced by one parse intern consistently and two
/// concurrent parses on separate threads never share state.
pub fn create_session_if_not_set_then<R>(f: impl FnOnce(&SessionGlobals) -> R) -> R {
    if SESSION_GLOBALS.is_set() {
        SESSION_GLOBALS.with(f)
    } else {
        let globals = SessionGlobals::new();
        SESSION_GLOBALS.set(&globals, || SESSION_GLOBALS.with(f))
    }
}

/// Runs `f` against the active session, creating an ephemeral one if none is set.
pub fn with_session_globals<R>(f: impl FnOnce(&SessionGlobals) -> R) -> R {
    create_session_if_not_set_then(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable_within_a_session() {
        create_session_if_not_set_then(|_| {
            let a = Symbol::intern("VAR");
            let b = Symbol::intern("VAR");
            let c = Symbol::intern("OTHER");
            assert_eq!(a, b);
            assert_ne!(a, c);
            assert_eq!(a.as_str(), "VAR");
        });
    }

    #[test]
    fn nested_sessions_reuse_the_outer_interner() {
        create_session_if_not_set_then(|_| {
            let outer = Symbol::intern("SHARED");
            let inner = create_session_if_not_set_then(|_| Symbol::intern("SHARED"));
            assert_eq!(outer, inner);
        });
    }
}
