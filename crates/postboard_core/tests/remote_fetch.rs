use postboard_core::{
    normalize_posts, normalize_users, FeedSession, FetchError, PostId, RawPostRecord,
    RawUserRecord, RemoteClient,
};

#[test]
fn raw_post_record_decodes_the_origin_wire_shape() {
    let record: RawPostRecord = serde_json::from_value(serde_json::json!({
        "userId": 7,
        "id": 21,
        "title": "qui est esse",
        "body": "est rerum tempore vitae\nsequi sint"
    }))
    .unwrap();

    let posts = normalize_posts(vec![record]);
    assert_eq!(posts[0].id, PostId::Remote(21));
    assert_eq!(posts[0].owner, Some(7));
    assert!(posts[0].content.contains("rerum tempore"));
}

#[test]
fn raw_user_record_ignores_unknown_origin_fields() {
    let record: RawUserRecord = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Clementine Bauch",
        "username": "Samantha",
        "email": "Nathan@yesenia.net",
        "address": { "street": "Douglas Extension" }
    }))
    .unwrap();

    let users = normalize_users(vec![record]);
    assert_eq!(users[0].id, 3);
    assert_eq!(users[0].name, "Clementine Bauch");
    assert_eq!(users[0].email, "Nathan@yesenia.net");
}

#[test]
fn load_failure_sets_error_and_clears_loading() {
    let mut session = FeedSession::new();
    session.begin_load();
    assert!(session.loading());
    assert!(session.error().is_none());

    session.apply_remote_result(Err(FetchError::Status {
        url: "https://example.invalid/posts".to_string(),
        status: 503,
    }));

    assert!(!session.loading());
    assert!(matches!(
        session.error(),
        Some(FetchError::Status { status: 503, .. })
    ));
    assert!(!session.has_loaded());
    assert!(session.remote().is_empty());
}

#[test]
fn successful_retry_clears_error_and_repopulates() {
    let mut session = FeedSession::new();
    session.begin_load();
    session.apply_remote_result(Err(FetchError::Transport {
        url: "https://example.invalid/posts".to_string(),
        message: "connection refused".to_string(),
    }));
    assert!(session.error().is_some());

    // Explicit retry re-runs the whole load from scratch.
    session.begin_load();
    assert!(session.error().is_none());
    let records: Vec<RawPostRecord> = serde_json::from_value(serde_json::json!([
        { "id": 1, "title": "back", "body": "online", "userId": 1 }
    ]))
    .unwrap();
    session.apply_remote_result(Ok(normalize_posts(records)));

    assert!(!session.loading());
    assert!(session.error().is_none());
    assert!(session.has_loaded());
    assert_eq!(session.remote().len(), 1);
}

#[test]
fn failed_reload_keeps_the_previous_display_set() {
    let mut session = FeedSession::new();
    let records: Vec<RawPostRecord> = serde_json::from_value(serde_json::json!([
        { "id": 1, "title": "survivor", "body": "still here", "userId": 1 }
    ]))
    .unwrap();
    session.begin_load();
    session.apply_remote_result(Ok(normalize_posts(records)));

    session.begin_load();
    session.apply_remote_result(Err(FetchError::Status {
        url: "https://example.invalid/posts".to_string(),
        status: 500,
    }));

    assert!(session.error().is_some());
    assert_eq!(session.remote().len(), 1);
    assert!(session.has_loaded());
}

#[test]
fn fetch_error_messages_are_human_readable() {
    let transport = FetchError::Transport {
        url: "https://example.invalid/posts".to_string(),
        message: "dns failure".to_string(),
    };
    assert!(transport.to_string().contains("dns failure"));

    let status = FetchError::Status {
        url: "https://example.invalid/posts".to_string(),
        status: 404,
    };
    assert!(status.to_string().contains("404"));
}

#[tokio::test]
#[ignore] // Requires network access to the live origin
async fn live_origin_fetch_normalizes_posts_and_users() {
    let client = RemoteClient::new().unwrap();

    let posts = client.fetch_posts().await.unwrap();
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|post| post.owner.is_some()));

    let users = client.fetch_users().await.unwrap();
    assert!(!users.is_empty());
}
