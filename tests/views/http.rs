//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest. Redirects are not
//! followed so their targets can be checked.

use std::sync::Arc;

use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use todo_comments::web::{self, SUPERUSER_HEADER, USER_ID_HEADER};
use todo_comments::{RecordsExt, Todo};

use crate::support::{self, ALICE, ALICE_TODO, BOB, ROOT};

/// Bind to port 0 and return the base URL plus a handle on the service.
async fn start_server() -> (String, Arc<web::Service<todo_comments::InMemoryRecordStore>>) {
    let service = Arc::new(support::service());
    let app = web::router(service.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), service)
}

fn client() -> Client {
    Client::builder().redirect(Policy::none()).build().unwrap()
}

fn location(resp: &reqwest::Response) -> &str {
    resp.headers()[reqwest::header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn health_check() {
    let (base, _) = start_server().await;

    let resp = client().get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(
        body["routes"],
        serde_json::json!(["comment.create", "comment.delete", "comment.update", "todo.detail"])
    );
}

#[tokio::test]
async fn detail_renders_for_owner() {
    let (base, service) = start_server().await;
    support::seed_comments(&service, ALICE_TODO, ALICE, 7);

    let resp = client()
        .get(format!("{base}/todos/{ALICE_TODO}?page=2"))
        .header(USER_ID_HEADER, ALICE)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["todo"]["title"], "Buy groceries");
    assert_eq!(body["page_obj"]["number"], 2);
    assert_eq!(body["page_obj"]["object_list"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn detail_hidden_from_stranger() {
    let (base, _) = start_server().await;

    let resp = client()
        .get(format!("{base}/todos/{ALICE_TODO}"))
        .header(USER_ID_HEADER, BOB)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("권한이 없습니다"));
}

#[tokio::test]
async fn superuser_header_grants_access() {
    let (base, _) = start_server().await;

    let resp = client()
        .get(format!("{base}/todos/{ALICE_TODO}"))
        .header(USER_ID_HEADER, ROOT)
        .header(SUPERUSER_HEADER, "true")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn anonymous_is_redirected_to_login() {
    let (base, _) = start_server().await;

    let resp = client().get(format!("{base}/todos/{ALICE_TODO}")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/accounts/login/?next=/todos/todo-alice");
}

#[tokio::test]
async fn encoded_ids_resolve_to_their_todo() {
    let (base, service) = start_server().await;
    service
        .store()
        .records::<Todo>()
        .insert(&Todo::new(ALICE, "Odd id").with_id("a b/c"))
        .unwrap();

    let resp = client()
        .post(format!("{base}/todos/a%20b%2Fc/comments"))
        .header(USER_ID_HEADER, ALICE)
        .form(&[("message", "still works")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    let next = location(&resp).to_string();
    assert_eq!(next, "/todos/a%20b%2Fc");

    let resp = client()
        .get(format!("{base}{next}"))
        .header(USER_ID_HEADER, ALICE)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["todo"]["title"], "Odd id");
    assert_eq!(body["page_obj"]["object_list"][0]["message"], "still works");
}

#[tokio::test]
async fn form_post_creates_and_redirects() {
    let (base, service) = start_server().await;

    let resp = client()
        .post(format!("{base}/todos/{ALICE_TODO}/comments"))
        .header(USER_ID_HEADER, BOB)
        .form(&[("message", "count me in")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/todos/todo-alice");

    let comments = support::comments_on(&service, ALICE_TODO);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].message, "count me in");
}

#[tokio::test]
async fn invalid_form_is_unprocessable() {
    let (base, service) = start_server().await;

    let resp = client()
        .post(format!("{base}/todos/{ALICE_TODO}/comments"))
        .header(USER_ID_HEADER, ALICE)
        .form(&[("message", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["form"]["errors"]["message"][0], "This field is required.");
    assert!(support::comments_on(&service, ALICE_TODO).is_empty());
}

#[tokio::test]
async fn update_and_delete_round_trip() {
    let (base, service) = start_server().await;
    let seeded = support::seed_comments(&service, ALICE_TODO, ALICE, 1).remove(0);

    let resp = client()
        .post(format!("{base}/comments/{}/update", seeded.id))
        .header(USER_ID_HEADER, ALICE)
        .form(&[("message", "updated over http")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/todos/todo-alice");
    assert_eq!(support::comment(&service, &seeded.id).unwrap().message, "updated over http");

    let resp = client()
        .post(format!("{base}/comments/{}/delete", seeded.id))
        .header(USER_ID_HEADER, BOB)
        .form(&[("confirm", "yes")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(support::comment(&service, &seeded.id).is_some());

    let resp = client()
        .post(format!("{base}/comments/{}/delete", seeded.id))
        .header(USER_ID_HEADER, ALICE)
        .form(&[("confirm", "yes")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert!(support::comment(&service, &seeded.id).is_none());
}

#[tokio::test]
async fn detail_does_not_accept_post() {
    let (base, _) = start_server().await;

    let resp = client()
        .post(format!("{base}/todos/{ALICE_TODO}"))
        .header(USER_ID_HEADER, ALICE)
        .form(&[("message", "nope")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
