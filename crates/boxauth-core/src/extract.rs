//! Text scanning over provider responses.
//!
//! The login pages are HTML meant for a browser and the REST replies are
//! small XML documents; both are read by substring search rather than parsed.

use crate::error::TokenNotFound;

/// Marker preceding the request token in a login page.
pub const REQUEST_TOKEN_MARKER: &str = "request_token";

/// Marker present in a login response once the credentials were accepted.
pub const AUTH_SUCCESS_MARKER: &str = "api_auth_success";

/// Extract the request token from a login page.
///
/// Finds the first occurrence of `request_token` and returns the text between
/// the next two single quotes. When the marker is itself quoted, as in
/// `name='request_token' value='abc123'`, the quote closing the marker is
/// skipped so the value after it is returned.
///
/// # Example
///
/// ```
/// use boxauth_core::extract_request_token;
///
/// let page = "<input type='hidden' name='request_token' value='abc123'>";
/// assert_eq!(extract_request_token(page), Ok("abc123"));
/// assert_eq!(extract_request_token("var request_token = 'x9';"), Ok("x9"));
/// ```
pub fn extract_request_token(body: &str) -> Result<&str, TokenNotFound> {
    let marker = body
        .find(REQUEST_TOKEN_MARKER)
        .ok_or(TokenNotFound::MissingMarker)?;

    let mut rest = &body[marker + REQUEST_TOKEN_MARKER.len()..];
    if body[..marker].ends_with('\'') && rest.starts_with('\'') {
        rest = &rest[1..];
    }

    let open = rest.find('\'').ok_or(TokenNotFound::MissingOpeningQuote)?;
    let value = &rest[open + 1..];
    let close = value
        .find('\'')
        .ok_or(TokenNotFound::MissingClosingQuote)?;

    Ok(&value[..close])
}

/// Returns true if a login response reports a successful authentication.
pub fn is_auth_success(body: &str) -> bool {
    body.contains(AUTH_SUCCESS_MARKER)
}

/// Returns the trimmed text of the first `<name>…</name>` element in `body`.
///
/// # Example
///
/// ```
/// use boxauth_core::element_text;
///
/// let reply = "<response><status>get_ticket_ok</status><ticket>t1</ticket></response>";
/// assert_eq!(element_text(reply, "status"), Some("get_ticket_ok"));
/// assert_eq!(element_text(reply, "auth_token"), None);
/// ```
pub fn element_text<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    let open = format!("<{name}>");
    let close = format!("</{name}>");

    let start = body.find(&open)? + open.len();
    let len = body[start..].find(&close)?;
    Some(body[start..start + len].trim())
}
