/// Substring tokens parsed from a comma-separated ignore pattern.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IgnoreTokens {
    tokens: Vec<String>,
}

impl IgnoreTokens {
    /// Split `pattern` on commas. Surrounding whitespace is trimmed and
    /// empty tokens are dropped, so an empty pattern ignores nothing.
    pub fn new(pattern: &str) -> Self {
        let tokens = pattern
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();

        Self { tokens }
    }

    /// Check whether any token occurs in `relative_path`.
    #[inline]
    pub fn matches(&self, relative_path: &str) -> bool {
        self.tokens
            .iter()
            .any(|token| relative_path.contains(token.as_str()))
    }
}
