//! ast-grep integration: pattern compilation and structural span search.

pub mod errors;
pub mod lang;
pub mod query;

pub use errors::QueryError;
pub use lang::{extensions, parse_lang, SupportLang};
pub use query::{compile, compile_all, PatternMatcher};
