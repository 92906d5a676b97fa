//! Tree-sitter parsing with ERROR-node validation.
//!
//! tree-sitter is error-tolerant: it always produces a tree, marking bad
//! regions with ERROR and MISSING nodes. A scan must skip files it cannot
//! make structural sense of, so a tree carrying such nodes is rejected here
//! as unparseable.

use crate::ts::errors::ParseError;
use ast_grep_language::{LanguageExt, SupportLang};
use tree_sitter::{Parser, Tree};

/// Tree-sitter parser bound to one language grammar.
pub struct SourceParser {
    parser: Parser,
    lang: SupportLang,
}

impl SourceParser {
    pub fn new(lang: SupportLang) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        // Get the tree-sitter Language from ast-grep-language
        let ts_lang = lang.get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| ParseError::LanguageSet)?;

        Ok(Self { parser, lang })
    }

    /// The language this parser is bound to.
    pub fn lang(&self) -> SupportLang {
        self.lang
    }

    /// Parse source code into a tree-sitter Tree.
    pub fn parse(&mut self, source: &str) -> Result<Tree, ParseError> {
        self.parser
            .parse(source, None)
            .ok_or(ParseError::ParseFailed)
    }

    /// Parse and reject trees containing ERROR or MISSING nodes, reporting
    /// the first bad node's position.
    pub fn parse_valid(&mut self, source: &str) -> Result<Tree, ParseError> {
        let tree = self.parse(source)?;

        if let Some(node) = first_error_node(tree.root_node()) {
            let point = node.start_position();
            return Err(ParseError::Syntax {
                line: point.row + 1,
                column: point.column + 1,
            });
        }

        Ok(tree)
    }
}

fn first_error_node(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }

    None
}
