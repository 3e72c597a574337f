//! Maps upstream syntax names to highlighter classes.

/// Syntax names the viewer highlights, with the label shown in the filter.
/// Anything else is shown as plain text.
pub const LANGUAGES: [(&str, &str); 10] = [
    ("go", "Go"),
    ("python", "Python"),
    ("ruby", "Ruby"),
    ("javascript", "JavaScript"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("csharp", "C#"),
    ("php", "PHP"),
    ("swift", "Swift"),
    ("rust", "Rust"),
];

/// Fallback class for unknown or missing syntaxes.
pub const PLAINTEXT: &str = "plaintext";

/// Returns the `language-*` suffix to use for an upstream syntax name.
pub fn syntax_class(syntax: &str) -> &'static str {
    LANGUAGES
        .iter()
        .map(|(name, _)| *name)
        .find(|name| *name == syntax)
        .unwrap_or(PLAINTEXT)
}
