use super::*;
use crate::state::test_helpers::{seeded_app_state, test_app_state};

async fn serve(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api_routes(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn todo_list_is_gzipped_when_accepted() {
    let (state, _) = seeded_app_state(&["buy milk", "walk dog", "write report", "file taxes"]).await;
    let base = serve(state).await;

    let resp = reqwest::Client::new()
        .get(format!("{base}/api/todos"))
        .header("accept-encoding", "gzip")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let encoding = resp.headers().get("content-encoding").and_then(|v| v.to_str().ok());
    assert_eq!(encoding, Some("gzip"));
}

#[tokio::test]
async fn todo_list_is_plain_without_accept_encoding() {
    let (state, _) = seeded_app_state(&["buy milk", "walk dog", "write report", "file taxes"]).await;
    let base = serve(state).await;

    let resp = reqwest::get(format!("{base}/api/todos")).await.unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.headers().get("content-encoding").is_none());
    assert!(resp.text().await.unwrap().contains("walk dog"));
}

#[tokio::test]
async fn healthz_responds_ok() {
    let base = serve(test_app_state()).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
