use super::*;

fn client(base_url: &str) -> RemoteClient {
    RemoteClient::new(&RemoteConfig {
        base_url: base_url.to_string(),
        token: None,
    })
    .expect("build client")
}

#[test]
fn endpoint_appends_segments_to_the_prefix() {
    let c = client("http://localhost:8080/seed-i18n");
    let url = c.endpoint(&["translations", "fr", "app.title"]).expect("url");
    assert_eq!(
        url.as_str(),
        "http://localhost:8080/seed-i18n/translations/fr/app.title"
    );
}

#[test]
fn endpoint_tolerates_trailing_slash_and_encodes_segments() {
    let c = client("http://localhost:8080/seed-i18n/");
    let url = c.endpoint(&["keys", "a b/c"]).expect("url");
    assert_eq!(url.as_str(), "http://localhost:8080/seed-i18n/keys/a%20b%2Fc");
}

#[test]
fn new_rejects_unusable_base_urls() {
    let err = RemoteClient::new(&RemoteConfig {
        base_url: "not a url".to_string(),
        token: None,
    })
    .expect_err("invalid url");
    assert!(matches!(err, ApiError::InvalidUrl(_)));

    let err = RemoteClient::new(&RemoteConfig {
        base_url: "mailto:someone@example.com".to_string(),
        token: None,
    })
    .expect_err("cannot be a base");
    assert!(matches!(err, ApiError::InvalidUrl(_)));
}

#[test]
fn error_message_prefers_json_message_fields() {
    assert_eq!(error_message("  plain text\n"), "plain text");
    assert_eq!(error_message(r#"{"message":"bad key"}"#), "bad key");
    assert_eq!(error_message(r#"{"error":"nope"}"#), "nope");
    assert_eq!(error_message(r#"{"other":1}"#), r#"{"other":1}"#);
}

#[test]
fn paged_body_keeps_server_metadata() {
    let body: ListBody<Key> = serde_json::from_value(serde_json::json!({
        "view": [{"name": "a"}, {"name": "b"}],
        "pageIndex": 1,
        "pageSize": 2,
        "resultSize": 5,
        "pagesCount": 3
    }))
    .expect("parse paged body");
    let page = body.into_page(0, 10);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.page_index, 1);
    assert_eq!(page.page_size, 2);
    assert_eq!(page.total_count, 5);
    assert_eq!(page.pages_count, 3);
}

#[test]
fn paged_body_fills_missing_metadata_from_the_query() {
    let body: ListBody<Key> = serde_json::from_value(serde_json::json!({
        "list": [{"name": "a"}],
        "resultSize": 21
    }))
    .expect("parse paged body");
    let page = body.into_page(4, 10);
    assert_eq!(page.page_index, 4);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.pages_count, 3);
}

#[test]
fn plain_array_body_is_a_single_page() {
    let body: ListBody<Key> =
        serde_json::from_value(serde_json::json!([{"name": "a"}, {"name": "b"}]))
            .expect("parse plain body");
    let page = body.into_page(0, 10);
    assert_eq!(page.total_count, 2);
    assert_eq!(page.pages_count, 1);
}

#[test]
fn api_error_reports_status_codes() {
    assert_eq!(ApiError::Validation("x".into()).status(), Some(400));
    assert_eq!(ApiError::Conflict(String::new()).status(), Some(409));
    assert_eq!(
        ApiError::Status {
            status: 503,
            body: String::new()
        }
        .status(),
        Some(503)
    );
    assert_eq!(ApiError::InvalidUrl("x".into()).status(), None);
}
