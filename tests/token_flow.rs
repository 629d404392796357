//! Token creation / revocation against fake page + API

mod support;

use registry_web::tokens::{create_token, revoke_token, RevokeOutcome, SubmitOutcome};
use support::{rejected, token, FakeApi, FakePage};

#[tokio::test]
async fn non_empty_name_sends_exactly_one_request() {
    let api = FakeApi::default();
    let page = FakePage::default();

    create_token(&api, &page, "ci-key").await;

    assert_eq!(api.created(), vec!["ci-key".to_string()]);
}

#[tokio::test]
async fn empty_name_sends_nothing_and_shows_nothing() {
    let api = FakeApi::default();
    let page = FakePage::with_placeholder();

    let outcome = create_token(&api, &page, "").await;

    assert!(matches!(outcome, SubmitOutcome::Skipped));
    assert!(api.created().is_empty());
    assert!(page.events().is_empty());
    assert!(*page.placeholder.borrow());
}

#[tokio::test]
async fn whitespace_name_is_still_sent() {
    let api = FakeApi::default();
    let page = FakePage::default();

    create_token(&api, &page, "  ").await;

    assert_eq!(api.created(), vec!["  ".to_string()]);
}

#[tokio::test]
async fn success_appends_item_and_drops_placeholder() {
    let api = FakeApi::answering(Ok(token("t1", "ci-key", "abc123")));
    let page = FakePage::with_placeholder();

    let outcome = create_token(&api, &page, "ci-key").await;

    match outcome {
        SubmitOutcome::Created(t) => assert_eq!(t, token("t1", "ci-key", "abc123")),
        other => panic!("expected Created, got {other:?}"),
    }
    let items = page.items.borrow();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "ci-key");
    assert_eq!(items[0].token, "abc123");
    assert!(!*page.placeholder.borrow());
    assert_eq!(page.events(), vec!["remove-placeholder", "append:t1"]);
}

#[tokio::test]
async fn failure_shows_raw_body_and_adds_nothing() {
    let api = FakeApi::answering(Err(rejected(409, "name already exists")));
    let page = FakePage::with_placeholder();

    let outcome = create_token(&api, &page, "ci-key").await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(page.error.borrow().as_deref(), Some("name already exists"));
    assert!(page.items.borrow().is_empty());
    assert!(*page.placeholder.borrow());
}

#[tokio::test]
async fn later_success_leaves_previous_error_in_place() {
    let api = FakeApi::answering(Err(rejected(409, "name already exists")));
    let page = FakePage::default();

    create_token(&api, &page, "dup").await;
    create_token(&api, &page, "fresh").await;

    assert_eq!(page.error.borrow().as_deref(), Some("name already exists"));
    assert_eq!(page.items.borrow().len(), 1);
    assert_eq!(api.created(), vec!["dup".to_string(), "fresh".to_string()]);
}

#[tokio::test]
async fn revoke_removes_item() {
    let api = FakeApi::default();
    let page = FakePage::default();
    create_token(&api, &page, "ci").await;
    let id = page.items.borrow()[0].id.clone();

    let outcome = revoke_token(&api, &page, &id).await;

    assert!(matches!(outcome, RevokeOutcome::Revoked));
    assert_eq!(*api.revoked.borrow(), vec![id]);
    assert!(page.items.borrow().is_empty());
}

#[tokio::test]
async fn revoke_failure_keeps_item_and_shows_body() {
    let api = FakeApi::default();
    *api.revoke_error.borrow_mut() = Some(rejected(404, "token not found"));
    let page = FakePage::default();
    create_token(&api, &page, "ci").await;
    let id = page.items.borrow()[0].id.clone();

    let outcome = revoke_token(&api, &page, &id).await;

    assert!(matches!(outcome, RevokeOutcome::Failed(_)));
    assert_eq!(page.items.borrow().len(), 1);
    assert_eq!(page.error.borrow().as_deref(), Some("token not found"));
}

#[tokio::test]
async fn revoke_without_id_is_skipped() {
    let api = FakeApi::default();
    let page = FakePage::default();

    let outcome = revoke_token(&api, &page, "").await;

    assert!(matches!(outcome, RevokeOutcome::Skipped));
    assert!(api.revoked.borrow().is_empty());
}
