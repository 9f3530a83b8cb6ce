use super::*;
use admin_session::Method;

#[tokio::test]
async fn send_fails_as_transport_error_outside_browser() {
    let request = HttpRequest::new(Method::Get, "/api/stories");
    let result = GlooTransport.send(request).await;
    assert_eq!(result, Err(HttpError::Transport(UNAVAILABLE.to_owned())));
}

#[tokio::test]
async fn bearer_request_fails_the_same_way() {
    let request = HttpRequest::new(Method::Post, "/api/auth/logout").with_bearer("t1");
    let err = GlooTransport.send(request).await.expect_err("no fetch");
    assert!(err.status().is_none());
}
