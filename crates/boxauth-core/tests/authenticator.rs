//! Login protocol tests against a scripted transport.

mod common;

use boxauth_core::error::{AuthError, ProtocolError, TokenNotFound};
use boxauth_core::{
    Attempt, AuthOutcome, Credentials, Error, Method, RequestToken, SessionAuthenticator,
    TokenState,
};

use common::{
    AUTH_URL, Reply, SUCCESS_PAGE, ScriptedTransport, login_page, provider, rejection_page,
    ticket,
};

fn alice() -> Credentials {
    Credentials::new("alice@example.com", "hunter2").unwrap()
}

// ============================================================================
// Single submissions
// ============================================================================

#[tokio::test]
async fn first_attempt_fetches_page_then_posts_scraped_token() {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("initial-token")),
        Reply::body(SUCCESS_PAGE),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let outcome = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap();

    assert_eq!(outcome, AuthOutcome::Succeeded);
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, AUTH_URL);
    assert_eq!(requests[1].method, Method::Post);
    assert_eq!(requests[1].url, AUTH_URL);
    assert_eq!(requests[1].field("request_token"), Some("initial-token"));
    assert_eq!(requests[1].field("login"), Some("alice@example.com"));
    assert_eq!(requests[1].field("password"), Some("hunter2"));
    assert_eq!(requests[1].field("dologin"), Some("1"));
}

#[tokio::test]
async fn rejection_carries_new_token() {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("initial-token")),
        Reply::body("...name='request_token' value='abc123'..."),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let outcome = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap();

    assert!(outcome.requires_retry());
    let AuthOutcome::Rejected(state) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(state.request_token().unwrap().as_str(), "abc123");
}

#[tokio::test]
async fn success_marker_wins_over_other_content() {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("t0")),
        Reply::body(&format!("{}{}", rejection_page("t1"), SUCCESS_PAGE)),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let outcome = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap();

    assert_eq!(outcome, AuthOutcome::Succeeded);
}

#[tokio::test]
async fn retrying_skips_page_fetch_and_posts_held_token_verbatim() {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("a+b/c=d")),
        Reply::body(&rejection_page("x_Y-9.z")),
        Reply::body(SUCCESS_PAGE),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let AuthOutcome::Rejected(state) = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap()
    else {
        panic!("expected rejection");
    };
    let outcome = authenticator
        .authenticate(&ticket(), &alice(), state)
        .await
        .unwrap();

    assert_eq!(outcome, AuthOutcome::Succeeded);
    assert_eq!(transport.methods(), [Method::Get, Method::Post, Method::Post]);
    let posts = transport.posts();
    assert_eq!(posts[0].field("request_token"), Some("a+b/c=d"));
    assert_eq!(posts[1].field("request_token"), Some("x_Y-9.z"));
}

#[tokio::test]
async fn stale_token_is_an_ordinary_rejection() {
    let stale = rejected_token("stale").await;
    let transport = ScriptedTransport::new([Reply::body(&rejection_page("fresh"))]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let outcome = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Retrying(stale))
        .await
        .unwrap();

    let AuthOutcome::Rejected(state) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(state.request_token().unwrap().as_str(), "fresh");
    assert_eq!(transport.posts()[0].field("request_token"), Some("stale"));
}

/// Obtain a `RequestToken` with the given value by letting the provider reject once.
async fn rejected_token(value: &str) -> RequestToken {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("unused")),
        Reply::body(&rejection_page(value)),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport);
    match authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap()
    {
        AuthOutcome::Rejected(TokenState::Retrying(token)) => token,
        other => panic!("expected rejection, got {other:?}"),
    }
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn transport_failure_on_page_fetch_never_posts() {
    let transport = ScriptedTransport::new([Reply::ConnectionReset]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let err = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(transport.methods(), [Method::Get]);
}

#[tokio::test]
async fn page_without_closing_quote_is_protocol_error() {
    let transport =
        ScriptedTransport::new([Reply::body("<input name='request_token' value='abc123")]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let err = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::RequestToken(
            TokenNotFound::MissingClosingQuote
        ))
    ));
    assert_eq!(transport.methods(), [Method::Get]);
}

#[tokio::test]
async fn page_without_marker_is_protocol_error() {
    let transport = ScriptedTransport::new([Reply::body("<html>Service unavailable</html>")]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let err = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::RequestToken(TokenNotFound::MissingMarker))
    ));
}

#[tokio::test]
async fn empty_token_on_page_is_protocol_error() {
    let transport = ScriptedTransport::new([Reply::body(&login_page(""))]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let err = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Protocol(ProtocolError::EmptyRequestToken)
    ));
    assert_eq!(transport.methods(), [Method::Get]);
}

#[tokio::test]
async fn unscrapable_rejection_is_protocol_error_not_rejection() {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("t0")),
        Reply::body("<p>request_token='broken</p>"),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let err = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap_err();

    assert!(err.is_protocol());
}

#[tokio::test]
async fn error_status_is_distinct_from_transport() {
    let transport = ScriptedTransport::new([Reply::body(&login_page("t0")), Reply::Status(500)]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());

    let err = authenticator
        .authenticate(&ticket(), &alice(), TokenState::Initial)
        .await
        .unwrap_err();

    let Error::Status(status) = err else {
        panic!("expected status error");
    };
    assert_eq!(status.status, 500);
    assert_eq!(status.url, AUTH_URL);
}

// ============================================================================
// Episodes
// ============================================================================

#[tokio::test]
async fn episode_chains_tokens_until_accepted() {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("t0")),
        Reply::body(&rejection_page("t1")),
        Reply::body(&rejection_page("t2")),
        Reply::body(SUCCESS_PAGE),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());
    let mut episode = authenticator.begin(ticket());

    let wrong = Credentials::new("alice@example.com", "wrong").unwrap();
    assert_eq!(
        episode.submit(&wrong).await.unwrap(),
        Attempt::Rejected { attempts: 1 }
    );
    assert_eq!(
        episode.submit(&wrong).await.unwrap(),
        Attempt::Rejected { attempts: 2 }
    );
    assert!(!episode.is_authenticated());
    assert_eq!(episode.submit(&alice()).await.unwrap(), Attempt::Accepted);
    assert!(episode.is_authenticated());
    assert_eq!(episode.attempts(), 3);
    assert_eq!(episode.ticket(), &ticket());

    let tokens: Vec<String> = transport
        .posts()
        .iter()
        .map(|p| p.field("request_token").unwrap().to_string())
        .collect();
    assert_eq!(tokens, ["t0", "t1", "t2"]);
    assert_eq!(
        transport.methods(),
        [Method::Get, Method::Post, Method::Post, Method::Post]
    );
}

#[tokio::test]
async fn episode_refuses_submission_after_success() {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("t0")),
        Reply::body(SUCCESS_PAGE),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());
    let mut episode = authenticator.begin(ticket());

    episode.submit(&alice()).await.unwrap();
    let err = episode.submit(&alice()).await.unwrap_err();

    assert!(matches!(err, Error::Auth(AuthError::AlreadyAuthenticated)));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn episode_keeps_token_after_transient_failure() {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("t0")),
        Reply::body(&rejection_page("t1")),
        Reply::ConnectionReset,
        Reply::body(SUCCESS_PAGE),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());
    let mut episode = authenticator.begin(ticket());

    episode.submit(&alice()).await.unwrap();
    assert!(episode.submit(&alice()).await.unwrap_err().is_transport());
    assert_eq!(episode.attempts(), 1);
    assert_eq!(episode.submit(&alice()).await.unwrap(), Attempt::Accepted);

    let posts = transport.posts();
    assert_eq!(posts[1].field("request_token"), Some("t1"));
    assert_eq!(posts[2].field("request_token"), Some("t1"));
}

#[tokio::test]
async fn abandoned_episode_sends_nothing() {
    let transport = ScriptedTransport::new([
        Reply::body(&login_page("t0")),
        Reply::body(&rejection_page("t1")),
    ]);
    let authenticator = SessionAuthenticator::new(provider(), transport.clone());
    let mut episode = authenticator.begin(ticket());

    episode.submit(&alice()).await.unwrap();
    episode.abandon();

    assert_eq!(transport.requests().len(), 2);
}
