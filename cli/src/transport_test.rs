use super::*;

#[test]
fn every_method_maps_to_the_same_verb() {
    for method in [Method::Get, Method::Post, Method::Put, Method::Patch, Method::Delete] {
        assert_eq!(to_reqwest(method).as_str(), method.as_str());
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
    // Port 1 on loopback refuses connections.
    let request = HttpRequest::new(Method::Get, "http://127.0.0.1:1/api/stories");

    let err = transport.send(request).await.expect_err("connection refused");

    assert!(matches!(err, HttpError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn malformed_url_is_a_transport_error() {
    let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
    let request = HttpRequest::new(Method::Post, "/api/auth/login");

    assert!(matches!(transport.send(request).await, Err(HttpError::Transport(_))));
}
