/// Ordered set of filter tokens (path substrings).
///
/// A path belongs to the first token, in configured order, that occurs
/// anywhere in it. Its filter-relative name is the path cut at the first
/// occurrence of that token, with leading separators removed, so a token
/// written as `/net/minecraft` yields names starting with `net/minecraft`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    tokens: Vec<String>,
}

impl PathFilter {
    pub fn new(tokens: Vec<String>) -> anyhow::Result<Self> {
        if tokens.is_empty() {
            anyhow::bail!("At least one filter token is required");
        }

        for (idx, token) in tokens.iter().enumerate() {
            if token.trim_matches('/').is_empty() {
                anyhow::bail!("Invalid filter token {token:?}: it must name a path");
            }
            if tokens[..idx].contains(token) {
                anyhow::bail!("Filter token {token} is given more than once");
            }
        }

        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the winning token and the filter-relative name, or `None` when
    /// no token occurs in `path`.
    pub fn resolve(&self, path: &str) -> Option<(&str, String)> {
        self.tokens.iter().find_map(|token| {
            path.find(token.as_str())
                .map(|at| (token.as_str(), path[at..].trim_start_matches('/').to_string()))
        })
    }

    /// Like [`PathFilter::resolve`], but only for paths that `token` wins.
    pub fn restrict(&self, path: &str, token: &str) -> Option<String> {
        match self.resolve(path) {
            Some((winner, name)) if winner == token => Some(name),
            _ => None,
        }
    }
}
