use std::time::{SystemTime, UNIX_EPOCH};

use blog_client::{BlogClient, BlogClientError};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

/// Токен выпускается заранее: `blog-server issue-token --author-id <id>`.
fn client_from_env() -> BlogClient {
    let base_url =
        std::env::var("BLOG_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let token = std::env::var("BLOG_TOKEN").expect("BLOG_TOKEN must be set");

    let mut client = BlogClient::new(base_url).expect("client must build");
    client.set_token(token);
    client
}

#[tokio::test]
#[ignore = "requires running HTTP server, database and BLOG_TOKEN"]
async fn http_smoke_flow() {
    let client = client_from_env();
    let suffix = unique_suffix();
    let title = format!("smoke title {suffix}");

    let id = client
        .create_post(&title, "smoke content")
        .await
        .expect("create_post must succeed");
    assert!(!id.is_empty());

    let fetched = client
        .get_post(&id)
        .await
        .expect("get_post must succeed")
        .expect("post must exist");
    assert_eq!(fetched.title, title);
    assert_eq!(fetched.content, "smoke content");

    let listed = client.list_posts().await.expect("list_posts must succeed");
    assert!(listed.iter().any(|post| post.id == id));

    let updated_title = format!("{title} updated");
    let echoed = client
        .update_post(&id, Some(&updated_title), None)
        .await
        .expect("update_post must succeed");
    assert_eq!(echoed, id);

    let fetched = client
        .get_post(&id)
        .await
        .expect("get_post must succeed")
        .expect("post must exist");
    assert_eq!(fetched.title, updated_title);
    assert_eq!(fetched.content, "smoke content");

    let missing = client
        .get_post(&format!("missing-{suffix}"))
        .await
        .expect("missing post is not an error");
    assert!(missing.is_none());

    let err = client
        .update_post(&format!("missing-{suffix}"), Some("t"), None)
        .await
        .expect_err("updating a missing post must fail");
    assert!(matches!(err, BlogClientError::InvalidRequest(_)));
}

#[tokio::test]
#[ignore = "requires running HTTP server"]
async fn http_rejects_foreign_token() {
    let base_url =
        std::env::var("BLOG_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let mut client = BlogClient::new(base_url).expect("client must build");
    client.set_token("not-a-real-token");

    let err = client.list_posts().await.expect_err("token must be rejected");
    assert!(matches!(err, BlogClientError::Unauthorized));
}
