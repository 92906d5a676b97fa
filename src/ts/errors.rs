use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to load tree-sitter grammar")]
    LanguageSet,

    #[error("parser produced no tree")]
    ParseFailed,

    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}
