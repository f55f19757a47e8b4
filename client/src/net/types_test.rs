use super::*;

#[test]
fn post_summary_parses_with_defaults() {
    let raw = r#"{"slug":"hello","title":"Hello","date":"2021-03-04"}"#;
    let post: PostSummary = serde_json::from_str(raw).unwrap();
    assert_eq!(post.date, NaiveDate::from_ymd_opt(2021, 3, 4).unwrap());
    assert_eq!(post.reading_time_minutes, 0);
    assert!(post.excerpt.is_empty());
    assert!(post.featured_image.is_none());
}

#[test]
fn post_summary_accepts_camel_case_aliases() {
    let raw = r#"{"slug":"a","title":"A","date":"2020-01-01","readingTime":7,
                 "featuredImage":{"src":"/img/a.png"}}"#;
    let post: PostSummary = serde_json::from_str(raw).unwrap();
    assert_eq!(post.reading_time_minutes, 7);
    assert_eq!(post.featured_image.unwrap().src, "/img/a.png");
}

#[test]
fn post_flattens_summary_and_keeps_html() {
    let raw = r#"{"slug":"a","title":"A","date":"2020-01-01","html":"<p>x</p>"}"#;
    let post: Post = serde_json::from_str(raw).unwrap();
    assert_eq!(post.summary.slug, "a");
    assert_eq!(post.html, "<p>x</p>");
}

#[test]
fn subscribe_request_sends_email_and_name() {
    let req = SubscribeRequest { email: "a@b.co".to_owned(), name: "Sam".to_owned() };
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"email":"a@b.co","name":"Sam"}"#);
}

#[test]
fn subscribe_response_parses_both_shapes() {
    let a: SubscribeResponse = serde_json::from_str(r#"{"status":"duplicate","message":"dup"}"#).unwrap();
    assert_eq!(a.status, SubscribeStatus::Duplicate);
    let b: SubscribeResponse = serde_json::from_str(r#"{"result":"success","msg":"Thanks!"}"#).unwrap();
    assert_eq!(b.status, SubscribeStatus::Success);
    assert_eq!(b.message, "Thanks!");
}

#[test]
fn normalized_detects_already_subscribed_errors() {
    let resp = SubscribeResponse {
        status: SubscribeStatus::Error,
        message: "a@b.co is Already Subscribed to list Blog.".to_owned(),
    };
    assert_eq!(resp.normalized().status, SubscribeStatus::Duplicate);
}

#[test]
fn normalized_leaves_other_errors() {
    let resp = SubscribeResponse { status: SubscribeStatus::Error, message: "invalid address".to_owned() };
    assert_eq!(resp.normalized().status, SubscribeStatus::Error);
}
