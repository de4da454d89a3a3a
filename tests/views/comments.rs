//! comment.create / comment.update / comment.delete.

use serde_json::json;
use todo_comments::web::{HandlerError, Request, Response, Session};
use todo_comments::{RecordsExt, Todo};

use crate::support::{self, ALICE, ALICE_TODO, BOB, BOB_TODO, ROOT};

// ============================================================================
// Create
// ============================================================================

#[test]
fn create_attaches_comment_to_todo_and_author() {
    let service = support::service();
    let request = Request::post(Session::user(BOB), json!({ "message": "  I can help  " }))
        .with_param("todo_id", ALICE_TODO);

    let response = service.dispatch("comment.create", request).unwrap();
    assert_eq!(response, Response::Redirect("/todos/todo-alice".to_string()));

    let comments = support::comments_on(&service, ALICE_TODO);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].message, "I can help");
    assert_eq!(comments[0].user_id, BOB);
    assert_eq!(comments[0].created_at, comments[0].updated_at);
}

#[test]
fn create_with_empty_message_rerenders_without_saving() {
    let service = support::service();
    let request =
        Request::post(Session::user(ALICE), json!({ "message": "" })).with_param("todo_id", ALICE_TODO);

    let response = service.dispatch("comment.create", request).unwrap();
    assert!(matches!(response, Response::Invalid(_)), "got {response:?}");
    let view = response.view().unwrap();
    assert_eq!(view["form"]["errors"]["message"][0], "This field is required.");
    assert_eq!(view["action_url"], "/todos/todo-alice/comments");
    assert!(support::comments_on(&service, ALICE_TODO).is_empty());
}

#[test]
fn create_on_missing_todo_is_not_found() {
    let service = support::service();
    let request =
        Request::post(Session::user(ALICE), json!({ "message": "hello" })).with_param("todo_id", "ghost");

    let err = service.dispatch("comment.create", request).unwrap_err();
    assert!(matches!(err, HandlerError::NotFound(_)));
    assert!(support::comments_on(&service, "ghost").is_empty());
}

#[test]
fn redirect_escapes_awkward_todo_ids() {
    let service = support::service();
    service
        .store()
        .records::<Todo>()
        .insert(&Todo::new(ALICE, "Odd id").with_id("a b/c?d"))
        .unwrap();
    let request =
        Request::post(Session::user(ALICE), json!({ "message": "hi" })).with_param("todo_id", "a b/c?d");

    let response = service.dispatch("comment.create", request).unwrap();
    assert_eq!(response.location(), Some("/todos/a%20b%2Fc%3Fd"));
    assert_eq!(support::comments_on(&service, "a b/c?d").len(), 1);
}

#[test]
fn get_create_renders_blank_form() {
    let service = support::service();
    let request = Request::get(Session::user(ALICE)).with_param("todo_id", ALICE_TODO);

    let response = service.dispatch("comment.create", request).unwrap();
    let view = response.view().unwrap();
    assert_eq!(view["form"]["message"], "");
    assert_eq!(view["todo_url"], "/todos/todo-alice");
}

#[test]
fn anonymous_create_never_saves() {
    let service = support::service();
    let request =
        Request::post(Session::new(), json!({ "message": "spam" })).with_param("todo_id", ALICE_TODO);

    let err = service.dispatch("comment.create", request).unwrap_err();
    assert!(matches!(err, HandlerError::Unauthenticated));
    assert!(support::comments_on(&service, ALICE_TODO).is_empty());
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn author_updates_message_and_is_redirected() {
    let service = support::service();
    let seeded = support::seed_comments(&service, ALICE_TODO, BOB, 1).remove(0);
    let request = Request::post(Session::user(BOB), json!({ "message": "edited" }))
        .with_param("pk", seeded.id.clone());

    let response = service.dispatch("comment.update", request).unwrap();
    assert_eq!(response.location(), Some("/todos/todo-alice"));

    let stored = support::comment(&service, &seeded.id).unwrap();
    assert_eq!(stored.message, "edited");
    assert_eq!(stored.created_at, seeded.created_at);
    assert!(stored.updated_at > seeded.updated_at);
}

#[test]
fn get_update_prefills_form() {
    let service = support::service();
    let seeded = support::seed_comments(&service, BOB_TODO, BOB, 1).remove(0);
    let request = Request::get(Session::user(BOB)).with_param("pk", seeded.id.clone());

    let response = service.dispatch("comment.update", request).unwrap();
    let view = response.view().unwrap();
    assert_eq!(view["form"]["message"], "comment 1");
    assert_eq!(view["action_url"], format!("/comments/{}/update", seeded.id));
}

#[test]
fn stranger_cannot_update() {
    let service = support::service();
    let seeded = support::seed_comments(&service, ALICE_TODO, ALICE, 1).remove(0);
    let request = Request::post(Session::user(BOB), json!({ "message": "hijacked" }))
        .with_param("pk", seeded.id.clone());

    let err = service.dispatch("comment.update", request).unwrap_err();
    match err {
        HandlerError::NotFound(msg) => assert_eq!(msg, "해당 댓글을 수정할 권한이 없습니다."),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(support::comment(&service, &seeded.id).unwrap(), seeded);
}

#[test]
fn superuser_can_update_any_comment() {
    let service = support::service();
    let seeded = support::seed_comments(&service, ALICE_TODO, ALICE, 1).remove(0);
    let request = Request::post(Session::superuser(ROOT), json!({ "message": "moderated" }))
        .with_param("pk", seeded.id.clone());

    service.dispatch("comment.update", request).unwrap();
    let stored = support::comment(&service, &seeded.id).unwrap();
    assert_eq!(stored.message, "moderated");
    assert_eq!(stored.user_id, ALICE);
}

#[test]
fn update_with_blank_message_keeps_record() {
    let service = support::service();
    let seeded = support::seed_comments(&service, ALICE_TODO, ALICE, 1).remove(0);
    let request = Request::post(Session::user(ALICE), json!({ "message": "   " }))
        .with_param("pk", seeded.id.clone());

    let response = service.dispatch("comment.update", request).unwrap();
    assert!(matches!(response, Response::Invalid(_)));
    assert_eq!(support::comment(&service, &seeded.id).unwrap(), seeded);
}

#[test]
fn update_missing_comment_is_not_found() {
    let service = support::service();
    let request = Request::post(Session::superuser(ROOT), json!({ "message": "x" })).with_param("pk", "ghost");

    let err = service.dispatch("comment.update", request).unwrap_err();
    assert!(matches!(err, HandlerError::NotFound(_)));
}

#[test]
fn concurrent_edits_last_writer_wins() {
    let service = support::service();
    let seeded = support::seed_comments(&service, ALICE_TODO, ALICE, 1).remove(0);

    for (session, message) in [(Session::user(ALICE), "first"), (Session::superuser(ROOT), "second")] {
        let request = Request::post(session, json!({ "message": message })).with_param("pk", seeded.id.clone());
        service.dispatch("comment.update", request).unwrap();
    }

    assert_eq!(support::comment(&service, &seeded.id).unwrap().message, "second");
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn author_deletes_comment() {
    let service = support::service();
    let seeded = support::seed_comments(&service, ALICE_TODO, BOB, 2);
    let request = Request::post(Session::user(BOB), serde_json::Value::Null).with_param("pk", seeded[0].id.clone());

    let response = service.dispatch("comment.delete", request).unwrap();
    assert_eq!(response.location(), Some("/todos/todo-alice"));

    assert!(support::comment(&service, &seeded[0].id).is_none());
    assert!(support::comment(&service, &seeded[1].id).is_some());
}

#[test]
fn deleted_comment_no_longer_resolves() {
    let service = support::service();
    let seeded = support::seed_comments(&service, ALICE_TODO, ALICE, 1).remove(0);
    let delete = || Request::post(Session::user(ALICE), json!({})).with_param("pk", seeded.id.clone());

    service.dispatch("comment.delete", delete()).unwrap();
    let err = service.dispatch("comment.delete", delete()).unwrap_err();
    assert!(matches!(err, HandlerError::NotFound(_)));

    let update = Request::post(Session::user(ALICE), json!({ "message": "back?" })).with_param("pk", seeded.id.clone());
    assert!(matches!(
        service.dispatch("comment.update", update),
        Err(HandlerError::NotFound(_))
    ));
}

#[test]
fn get_delete_asks_for_confirmation_without_deleting() {
    let service = support::service();
    let seeded = support::seed_comments(&service, ALICE_TODO, ALICE, 1).remove(0);
    let request = Request::get(Session::user(ALICE)).with_param("pk", seeded.id.clone());

    let response = service.dispatch("comment.delete", request).unwrap();
    let view = response.view().unwrap();
    assert_eq!(view["comment"]["message"], "comment 1");
    assert_eq!(view["action_url"], format!("/comments/{}/delete", seeded.id));
    assert_eq!(view["todo_url"], "/todos/todo-alice");
    assert!(support::comment(&service, &seeded.id).is_some());
}

#[test]
fn stranger_cannot_delete() {
    let service = support::service();
    let seeded = support::seed_comments(&service, ALICE_TODO, ALICE, 1).remove(0);

    for method_request in [
        Request::get(Session::user(BOB)),
        Request::post(Session::user(BOB), json!({})),
    ] {
        let err = service
            .dispatch("comment.delete", method_request.with_param("pk", seeded.id.clone()))
            .unwrap_err();
        match err {
            HandlerError::NotFound(msg) => assert_eq!(msg, "해당 댓글을 삭제할 권한이 없습니다."),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
    assert_eq!(support::comment(&service, &seeded.id).unwrap(), seeded);
}

#[test]
fn superuser_can_delete_any_comment() {
    let service = support::service();
    let seeded = support::seed_comments(&service, BOB_TODO, BOB, 1).remove(0);
    let request = Request::post(Session::superuser(ROOT), json!({})).with_param("pk", seeded.id.clone());

    service.dispatch("comment.delete", request).unwrap();
    assert!(support::comment(&service, &seeded.id).is_none());
}
