//! Pattern compilation and span search using ast-grep's metavariable syntax.
//!
//! # Metavariable Syntax
//!
//! - `$NAME` - Matches a single node and captures it
//! - `$$$NAME` - Matches zero or more nodes (variadic)
//! - `$_` - Matches any single node (anonymous)
//!
//! # Example Patterns
//!
//! ```text
//! fn $NAME($$$PARAMS) { $$$BODY }     // Match function definition
//! struct $NAME { $$$FIELDS }           // Match struct definition
//! $EXPR.clone()                        // Match .clone() calls
//! ```

use crate::sg::errors::QueryError;
use crate::text::TextRange;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_core::{AstGrep, Pattern};
use ast_grep_language::SupportLang;

/// Compile one pattern for a language. Compilation happens once per run;
/// the compiled object is then evaluated against every file.
pub fn compile(pattern: &str, lang: SupportLang) -> Result<Pattern, QueryError> {
    Pattern::try_new(pattern, lang).map_err(|e| QueryError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Compile every pattern, failing on the first invalid one.
pub fn compile_all(patterns: &[String], lang: SupportLang) -> Result<Vec<Pattern>, QueryError> {
    patterns.iter().map(|p| compile(p, lang)).collect()
}

/// Span search over a single file's syntax tree.
pub struct PatternMatcher {
    sg: AstGrep<StrDoc<SupportLang>>,
}

impl PatternMatcher {
    pub fn new(source: &str, lang: SupportLang) -> Self {
        Self {
            sg: AstGrep::new(source, lang),
        }
    }

    /// Byte spans of all nodes matching `pattern`, in tree order.
    pub fn find_ranges(&self, pattern: &Pattern) -> Vec<TextRange> {
        self.sg
            .root()
            .find_all(pattern)
            .map(|m| TextRange::from(m.get_node().range()))
            .collect()
    }

    /// Pool the spans of every pattern into one list. Overlaps across
    /// patterns are kept; consolidation happens downstream.
    pub fn find_all_ranges(&self, patterns: &[Pattern]) -> Vec<TextRange> {
        let mut ranges = Vec::new();
        for pattern in patterns {
            ranges.extend(self.find_ranges(pattern));
        }
        ranges
    }
}
