//! The provider's login form.

use crate::credentials::Credentials;
use crate::tokens::RequestToken;

/// Build the login form fields in the order the provider's page submits them.
pub(crate) fn login_form(
    credentials: &Credentials,
    request_token: &RequestToken,
) -> Vec<(&'static str, String)> {
    vec![
        ("login", credentials.login().to_string()),
        ("password", credentials.password().to_string()),
        ("_pw_sql", String::new()),
        ("remember_login", "on".to_string()),
        ("__login", "1".to_string()),
        ("dologin", "1".to_string()),
        ("reg_step", String::new()),
        ("submit1", "1".to_string()),
        ("folder", String::new()),
        ("skip_framework_login", "1".to_string()),
        ("login_or_register_mode", "login".to_string()),
        ("new_login_or_register_mode", String::new()),
        ("request_token", request_token.as_str().to_string()),
    ]
}
