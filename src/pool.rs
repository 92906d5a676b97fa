//! Thread-local parser pooling.
//!
//! Eliminates redundant parser creation by maintaining a thread-local pool
//! of reusable parsers, one per language. Creates a parser on first use per
//! thread, reuses it for every later file handled on that thread.

use crate::ts::{ParseError, SourceParser};
use ast_grep_language::SupportLang;
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    // Keyed by the language's debug name; a scan normally touches a single
    // language, so the map stays tiny.
    static PARSERS: RefCell<HashMap<String, SourceParser>> = RefCell::new(HashMap::new());
}

/// Execute `f` with this thread's pooled parser for `lang`.
pub fn with_parser<F, R>(lang: SupportLang, f: F) -> Result<R, ParseError>
where
    F: FnOnce(&mut SourceParser) -> R,
{
    let key = format!("{lang:?}");

    PARSERS.with(|cell| {
        let mut parsers = cell.borrow_mut();
        if !parsers.contains_key(&key) {
            parsers.insert(key.clone(), SourceParser::new(lang)?);
        }
        Ok(f(parsers
            .get_mut(&key)
            .expect("parser was just initialized above")))
    })
}
