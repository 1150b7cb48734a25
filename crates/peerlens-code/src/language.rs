//! Language names, comment markers and debug-print calls.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source language of a code submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Rust,
    Go,
    Java,
    C,
    Cpp,
    CSharp,
    Ruby,
    Php,
    Shell,
    /// Unrecognized name; both `//` and `#` comments are accepted.
    Other,
}

/// How a debug call is spotted on a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMatch {
    /// Anywhere in the line.
    Contains(&'static str),
    /// Only as the first thing on the line.
    Prefix(&'static str),
}

/// A debug-print call the quality pass asks authors to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugCall {
    pub pattern: CallMatch,
    /// Name used in the suggestion text.
    pub name: &'static str,
}

const fn contains(pattern: &'static str, name: &'static str) -> DebugCall {
    DebugCall {
        pattern: CallMatch::Contains(pattern),
        name,
    }
}

const fn prefix(pattern: &'static str, name: &'static str) -> DebugCall {
    DebugCall {
        pattern: CallMatch::Prefix(pattern),
        name,
    }
}

impl DebugCall {
    pub fn matches(&self, trimmed: &str) -> bool {
        match self.pattern {
            CallMatch::Contains(p) => trimmed.contains(p),
            CallMatch::Prefix(p) => trimmed.starts_with(p),
        }
    }
}

impl Language {
    /// Map a language name or common alias. Unknown names become [`Language::Other`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "javascript" | "js" | "jsx" | "node" => Language::JavaScript,
            "typescript" | "ts" | "tsx" => Language::TypeScript,
            "python" | "py" => Language::Python,
            "rust" | "rs" => Language::Rust,
            "go" | "golang" => Language::Go,
            "java" => Language::Java,
            "c" => Language::C,
            "c++" | "cpp" | "cxx" => Language::Cpp,
            "c#" | "csharp" | "cs" => Language::CSharp,
            "ruby" | "rb" => Language::Ruby,
            "php" => Language::Php,
            "shell" | "bash" | "sh" | "zsh" => Language::Shell,
            _ => Language::Other,
        }
    }

    /// Resolve an optional caller-supplied name, falling back to `default`.
    pub fn resolve(name: Option<&str>, default: &str) -> Self {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => Self::from_name(n),
            None => Self::from_name(default),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Shell => "shell",
            Language::Other => "other",
        }
    }

    pub fn line_comment_markers(self) -> &'static [&'static str] {
        match self {
            Language::Python | Language::Ruby | Language::Shell => &["#"],
            Language::Php | Language::Other => &["//", "#"],
            _ => &["//"],
        }
    }

    pub fn debug_calls(self) -> &'static [DebugCall] {
        const JS: &[DebugCall] = &[contains("console.log", "console.log")];
        const PYTHON: &[DebugCall] = &[contains("print(", "print")];
        const RUST: &[DebugCall] = &[
            contains("println!", "println!"),
            contains("dbg!", "dbg!"),
        ];
        const GO: &[DebugCall] = &[contains("fmt.Println", "fmt.Println")];
        const JAVA: &[DebugCall] = &[contains("System.out.println", "System.out.println")];
        const C: &[DebugCall] = &[contains("printf(", "printf")];
        const CPP: &[DebugCall] = &[
            contains("printf(", "printf"),
            contains("std::cout", "std::cout"),
        ];
        const CSHARP: &[DebugCall] = &[contains("Console.WriteLine", "Console.WriteLine")];
        const RUBY: &[DebugCall] = &[prefix("puts ", "puts"), prefix("p ", "p")];
        const PHP: &[DebugCall] = &[
            contains("var_dump(", "var_dump"),
            contains("print_r(", "print_r"),
            prefix("echo ", "echo"),
        ];
        const SHELL: &[DebugCall] = &[prefix("echo ", "echo")];
        const OTHER: &[DebugCall] = &[
            contains("console.log", "console.log"),
            contains("print(", "print"),
        ];

        match self {
            Language::JavaScript | Language::TypeScript => JS,
            Language::Python => PYTHON,
            Language::Rust => RUST,
            Language::Go => GO,
            Language::Java => JAVA,
            Language::C => C,
            Language::Cpp => CPP,
            Language::CSharp => CSHARP,
            Language::Ruby => RUBY,
            Language::Php => PHP,
            Language::Shell => SHELL,
            Language::Other => OTHER,
        }
    }

    /// True when a trimmed line starts with one of this language's line-comment markers.
    pub fn is_line_comment(self, trimmed: &str) -> bool {
        self.line_comment_markers()
            .iter()
            .any(|m| trimmed.starts_with(m))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve() {
        assert_eq!(Language::from_name("JS"), Language::JavaScript);
        assert_eq!(Language::from_name("c++"), Language::Cpp);
        assert_eq!(Language::from_name(" py "), Language::Python);
        assert_eq!(Language::from_name("cobol"), Language::Other);
    }

    #[test]
    fn missing_name_uses_default() {
        assert_eq!(Language::resolve(None, "javascript"), Language::JavaScript);
        assert_eq!(Language::resolve(Some(""), "python"), Language::Python);
        assert_eq!(Language::resolve(Some("rust"), "python"), Language::Rust);
    }

    #[test]
    fn ruby_p_only_matches_at_line_start() {
        let p = Language::Ruby.debug_calls()[1];
        assert!(p.matches("p value"));
        assert!(!p.matches("map do |x|"));
    }
}
