use super::*;
use std::time::Duration;

#[tokio::test]
async fn retrying_client_aggregates_api_errors() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-2.0-flash:generateContent")
        .with_status(429)
        .with_body(
            serde_json::json!({"error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }})
            .to_string(),
        )
        .expect(3)
        .create_async()
        .await;

    let client = RetryingClient::new(gemini_backend(&server))
        .retry_after_fail_n_times(2)
        .retry_delay(Duration::ZERO);
    match client.generate("p").await {
        Err(CompletionError::ExceededRetryCount { errors, .. }) => {
            assert_eq!(errors.len(), 3);
            assert!(errors
                .iter()
                .all(|e| matches!(e, ClientError::ApiError(api) if api.message == "Resource has been exhausted")));
        }
        other => panic!("expected ExceededRetryCount, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn service_unavailable_then_success() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("POST", "/models/gemini-2.0-flash:generateContent")
        .with_status(503)
        .with_body(serde_json::json!({"error": {"message": "overloaded"}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = RetryingClient::new(gemini_backend(&server))
        .retry_after_fail_n_times(1)
        .retry_delay(Duration::ZERO);

    let first = client.generator.generate("p").await;
    assert!(matches!(first, Err(ClientError::ServiceUnavailable { .. })));
    failing.assert_async().await;
    failing.remove_async().await;

    let ok = server
        .mock("POST", "/models/gemini-2.0-flash:generateContent")
        .with_status(200)
        .with_body(gemini_body("{\"t\": [\"x\"]}"))
        .create_async()
        .await;
    assert_eq!(client.generate("p").await.unwrap(), "{\"t\": [\"x\"]}");
    ok.assert_async().await;
}
