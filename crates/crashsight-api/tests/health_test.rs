//! Health endpoint integration tests.

mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn test_health_reports_ok() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["message"].as_str().unwrap().len() > 0);
}
