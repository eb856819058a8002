//! Shell-style query tokenization.

use crate::error::{Result, SearchError};

/// Splits a raw query into tokens with shell quoting rules, so a quoted
/// phrase stays one token.
///
/// An empty or all-whitespace query yields no tokens. Unbalanced quoting
/// fails with [`SearchError::MalformedQuery`]; callers treat that as "no
/// tokens matched" rather than aborting the whole search.
///
/// # Example
/// ```
/// use vegcity_search::tokenize;
///
/// let tokens = tokenize(r#"mexican "open late""#).unwrap();
/// assert_eq!(tokens, vec!["mexican", "open late"]);
/// ```
pub fn tokenize(query: &str) -> Result<Vec<String>> {
    shlex::split(query).ok_or_else(|| SearchError::MalformedQuery {
        query: query.to_string(),
    })
}
