//! Integration tests for the Telegram notification sink

use sentinel::config::TelegramConfig;
use sentinel::services::telegram::{NotificationSink, TelegramNotifier};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> TelegramConfig {
    TelegramConfig {
        token: "TESTTOKEN".to_string(),
        chat_id: "424242".to_string(),
        api_base: server.uri(),
    }
}

#[tokio::test]
async fn sends_one_markdown_message_to_the_configured_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTESTTOKEN/sendMessage"))
        .and(body_string_contains("chat_id=424242"))
        .and(body_string_contains("parse_mode=Markdown"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(config(&server));
    notifier.send("screener summary").await.unwrap();
}

#[tokio::test]
async fn api_rejection_surfaces_as_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTESTTOKEN/sendMessage"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "ok": false,
            "description": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(config(&server));
    assert!(notifier.send("screener summary").await.is_err());
}
