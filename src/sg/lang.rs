//! Language selection via ast-grep-language.
//!
//! We use the built-in `SupportLang` grammars from ast-grep-language instead
//! of maintaining our own Language implementations. One language is active
//! per scan; it decides both pattern compilation and which file extensions
//! are candidates during enumeration.

pub use ast_grep_language::SupportLang;

/// Resolve a language name or common alias. Case-insensitive.
pub fn parse_lang(name: &str) -> Option<SupportLang> {
    let lang = match name.to_ascii_lowercase().as_str() {
        "rust" | "rs" => SupportLang::Rust,
        "javascript" | "js" => SupportLang::JavaScript,
        "typescript" | "ts" => SupportLang::TypeScript,
        "tsx" => SupportLang::Tsx,
        "python" | "py" => SupportLang::Python,
        "go" | "golang" => SupportLang::Go,
        "java" => SupportLang::Java,
        "c" => SupportLang::C,
        "cpp" | "c++" => SupportLang::Cpp,
        "ruby" | "rb" => SupportLang::Ruby,
        "bash" | "sh" => SupportLang::Bash,
        "css" => SupportLang::Css,
        "html" => SupportLang::Html,
        "json" => SupportLang::Json,
        "kotlin" | "kt" => SupportLang::Kotlin,
        "swift" => SupportLang::Swift,
        _ => return None,
    };
    Some(lang)
}

/// File extensions scanned for a language. Directory expansion is
/// restricted to this allow-list; explicitly named files bypass it.
pub fn extensions(lang: SupportLang) -> &'static [&'static str] {
    match lang {
        SupportLang::Rust => &["rs"],
        SupportLang::JavaScript => &["js", "mjs", "cjs", "jsx"],
        SupportLang::TypeScript => &["ts", "mts", "cts"],
        SupportLang::Tsx => &["tsx"],
        SupportLang::Python => &["py", "pyi"],
        SupportLang::Go => &["go"],
        SupportLang::Java => &["java"],
        SupportLang::C => &["c", "h"],
        SupportLang::Cpp => &["cc", "cpp", "cxx", "hpp", "hh"],
        SupportLang::Ruby => &["rb"],
        SupportLang::Bash => &["sh", "bash"],
        SupportLang::Css => &["css"],
        SupportLang::Html => &["html", "htm"],
        SupportLang::Json => &["json"],
        SupportLang::Kotlin => &["kt", "kts"],
        SupportLang::Swift => &["swift"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve() {
        assert_eq!(parse_lang("rust"), Some(SupportLang::Rust));
        assert_eq!(parse_lang("rs"), Some(SupportLang::Rust));
        assert_eq!(parse_lang("TypeScript"), Some(SupportLang::TypeScript));
        assert_eq!(parse_lang("py"), Some(SupportLang::Python));
        assert_eq!(parse_lang("fortran"), None);
    }

    #[test]
    fn extension_allow_lists() {
        assert_eq!(extensions(SupportLang::Rust), &["rs"]);
        assert!(extensions(SupportLang::JavaScript).contains(&"mjs"));
        assert!(!extensions(SupportLang::Rust).contains(&"txt"));
    }
}
