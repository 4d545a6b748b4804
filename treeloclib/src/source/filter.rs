//! Exclusion policy: which files count and which directories are skipped.
//!
//! The fixed tables here are the only place file names are inspected. The
//! walker asks two questions of every entry it sees:
//!
//! - [`is_code_file`]: does the suffix (case-insensitive, leading dot
//!   included) belong to [`CODE_EXTENSIONS`]?
//! - [`should_skip_directory`]: is the directory a build, dependency,
//!   cache or VCS directory from [`SKIP_DIRS`], or hidden?
//!
//! [`FilterConfig`] adds optional glob patterns on top. They can only narrow
//! what the fixed policy admits.

use std::path::Path;

use glob::Pattern;

use crate::error::TreelocError;
use crate::Result;

/// File suffixes counted as code, markup, config, scripts or docs.
pub const CODE_EXTENSIONS: &[&str] = &[
    ".js",
    ".jsx",
    ".ts",
    ".tsx",
    ".py",
    ".java",
    ".cpp",
    ".c",
    ".h",
    ".hpp",
    ".cs",
    ".php",
    ".rb",
    ".go",
    ".rs",
    ".swift",
    ".kt",
    ".scala",
    ".r",
    ".m",
    ".mm",
    ".vue",
    ".svelte",
    ".html",
    ".css",
    ".scss",
    ".sass",
    ".less",
    ".xml",
    ".json",
    ".yaml",
    ".yml",
    ".toml",
    ".ini",
    ".cfg",
    ".conf",
    ".sql",
    ".sh",
    ".bash",
    ".zsh",
    ".fish",
    ".ps1",
    ".bat",
    ".cmd",
    ".dockerfile",
    ".dockerignore",
    ".gitignore",
    ".env",
    ".md",
    ".txt",
];

/// Directory names never descended into (compared case-insensitively).
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    ".idea",
    "dist",
    "build",
    "out",
    "target",
    "bin",
    "obj",
    ".next",
    ".nuxt",
    "coverage",
    ".nyc_output",
    "emulator",
    "firebase-debug.log",
    "firestore-debug.log",
    ".firebase",
    "venv",
    "env",
    ".env",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    "logs",
    "tmp",
    "temp",
    ".cache",
    ".parcel-cache",
    ".turbo",
];

/// Lowercased suffix of `path` including the leading dot (`"src/Main.RS"` → `".rs"`).
///
/// Dotfiles such as `.gitignore` have no suffix and return `None`, as do
/// files without any extension.
pub fn extension_key(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Check whether a file's suffix is on the allow-list.
pub fn is_code_file(path: &Path) -> bool {
    extension_key(path).is_some_and(|ext| CODE_EXTENSIONS.contains(&ext.as_str()))
}

/// Check whether a directory should be skipped during traversal.
///
/// Applies at every depth, root-level directories included.
pub fn should_skip_directory(path: &Path) -> bool {
    match path.file_name() {
        Some(name) => should_skip_dir_name(&name.to_string_lossy()),
        None => false,
    }
}

fn should_skip_dir_name(name: &str) -> bool {
    name.starts_with('.') || SKIP_DIRS.contains(&name.to_lowercase().as_str())
}

/// Optional glob narrowing applied after the fixed policy.
///
/// Patterns are matched against paths relative to the analyzed root,
/// e.g. `src/generated/api.ts`.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include everything the policy admits)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// True when no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Check if a root-relative path passes the filter.
    ///
    /// Excludes win over includes. With no include patterns every path
    /// that isn't excluded passes.
    pub fn matches(&self, relative: &Path) -> bool {
        let path_str = relative.to_string_lossy();

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(&path_str))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| TreelocError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_file_extensions() {
        assert!(is_code_file(Path::new("src/main.rs")));
        assert!(is_code_file(Path::new("app.js")));
        assert!(is_code_file(Path::new("docs/README.md")));
        assert!(is_code_file(Path::new("config.yaml")));
        assert!(is_code_file(Path::new("deploy.sh")));
        assert!(!is_code_file(Path::new("logo.png")));
        assert!(!is_code_file(Path::new("archive.tar.gz")));
    }

    #[test]
    fn test_code_file_case_insensitive() {
        assert!(is_code_file(Path::new("Main.RS")));
        assert!(is_code_file(Path::new("INDEX.Html")));
        assert_eq!(extension_key(Path::new("Main.RS")), Some(".rs".to_string()));
    }

    #[test]
    fn test_files_without_suffix_are_excluded() {
        assert!(!is_code_file(Path::new("Makefile")));
        assert!(!is_code_file(Path::new("Dockerfile")));
        // dotfiles have no suffix, so the allow-listed ".gitignore" never matches them
        assert!(!is_code_file(Path::new(".gitignore")));
        assert!(!is_code_file(Path::new(".env")));
        assert_eq!(extension_key(Path::new(".gitignore")), None);
    }

    #[test]
    fn test_suffix_named_like_dotfile() {
        assert!(is_code_file(Path::new("web.dockerfile")));
        assert!(is_code_file(Path::new("prod.env")));
    }

    #[test]
    fn test_skip_block_listed_directories() {
        assert!(should_skip_directory(Path::new("node_modules")));
        assert!(should_skip_directory(Path::new("a/b/node_modules")));
        assert!(should_skip_directory(Path::new("target")));
        assert!(should_skip_directory(Path::new("__pycache__")));
        assert!(should_skip_directory(Path::new("Build")));
        assert!(should_skip_directory(Path::new("DIST")));
        assert!(!should_skip_directory(Path::new("src")));
        assert!(!should_skip_directory(Path::new("lib")));
    }

    #[test]
    fn test_skip_hidden_directories() {
        assert!(should_skip_directory(Path::new(".github")));
        assert!(should_skip_directory(Path::new("project/.hidden")));
        assert!(!should_skip_directory(Path::new("project/visible")));
    }

    #[test]
    fn test_filter_empty_matches_everything() {
        let filter = FilterConfig::new();
        assert!(filter.is_empty());
        assert!(filter.matches(Path::new("src/main.rs")));
        assert!(filter.matches(Path::new("README.md")));
    }

    #[test]
    fn test_filter_with_include_pattern() {
        let filter = FilterConfig::new().include("src/**").unwrap();

        assert!(filter.matches(Path::new("src/main.rs")));
        assert!(filter.matches(Path::new("src/utils/helper.rs")));
        assert!(!filter.matches(Path::new("docs/guide.md")));
    }

    #[test]
    fn test_filter_exclude_wins() {
        let filter = FilterConfig::new()
            .include_many(&["src/**", "tests/**"])
            .unwrap()
            .exclude("**/generated/**")
            .unwrap();

        assert!(filter.matches(Path::new("src/lib.rs")));
        assert!(filter.matches(Path::new("tests/it.rs")));
        assert!(!filter.matches(Path::new("src/generated/api.rs")));
        assert!(!filter.matches(Path::new("scripts/run.sh")));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().exclude("[invalid");

        if let Err(TreelocError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}
