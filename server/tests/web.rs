use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use todo_core::{Todo, TodoStore};
use todo_server::app;

fn test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let store = TodoStore::open(dir.path().join("todos.db")).unwrap();
    (dir, app(Arc::new(store)))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- home page ---

#[tokio::test]
async fn home_empty_shows_placeholder() {
    let (_dir, app) = test_app();
    let resp = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page = body_text(resp).await;
    assert!(page.contains("Nothing to do yet."));
    assert!(page.contains("action=\"/add\""));
}

// --- add ---

#[tokio::test]
async fn add_redirects_to_home_with_see_other() {
    let (_dir, app) = test_app();
    let resp = app
        .oneshot(form_request("/add", "title=Buy+milk"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(http::header::LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn add_empty_title_returns_422_page() {
    let (_dir, app) = test_app();
    let resp = app.oneshot(form_request("/add", "title=")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let content_type = resp.headers().get(http::header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    let page = body_text(resp).await;
    assert!(page.contains("todo title must not be empty"));
}

#[tokio::test]
async fn add_without_title_field_returns_422() {
    let (_dir, app) = test_app();
    let resp = app.oneshot(form_request("/add", "task=x")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- toggle and delete links ---

#[tokio::test]
async fn toggle_unknown_id_renders_404_page() {
    let (_dir, app) = test_app();
    let resp = app.oneshot(get_request("/update/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let page = body_text(resp).await;
    assert!(page.contains("no todo with id 999"));
}

#[tokio::test]
async fn delete_unknown_id_renders_404_page() {
    let (_dir, app) = test_app();
    let resp = app.oneshot(get_request("/delete/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let page = body_text(resp).await;
    assert!(page.contains("no todo with id 999"));
}

#[tokio::test]
async fn toggle_bad_id_returns_400() {
    let (_dir, app) = test_app();
    let resp = app.oneshot(get_request("/update/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- escaping ---

#[tokio::test]
async fn titles_are_escaped_on_the_page() {
    use tower::Service;

    let (_dir, app) = test_app();
    let mut app = app.into_service();

    // title is <b>bold</b>, url-encoded
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request("/add", "title=%3Cb%3Ebold%3C%2Fb%3E"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/"))
        .await
        .unwrap();
    let page = body_text(resp).await;
    assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!page.contains("<b>"));
}

// --- both surfaces share the store ---

#[tokio::test]
async fn api_created_todos_appear_on_the_page() {
    use tower::Service;

    let (_dir, app) = test_app();
    let mut app = app.into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("POST")
                .uri("/api/todo/new")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(r#"{"title":"From the API"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/"))
        .await
        .unwrap();
    let page = body_text(resp).await;
    assert!(page.contains("From the API"));
}

// --- full page lifecycle ---

#[tokio::test]
async fn page_lifecycle() {
    use tower::Service;

    let (_dir, app) = test_app();
    let mut app = app.into_service();

    // add a todo through the form
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request("/add", "title=Walk+dog"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    // home shows it, not yet done
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/"))
        .await
        .unwrap();
    let page = body_text(resp).await;
    assert!(page.contains("Walk dog"));
    assert!(!page.contains("class=\"done\""));

    // the id is visible through the shared store on the API surface
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/todo/list"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 1);
    let id = todos[0].id;

    // toggle link redirects back home
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/update/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(http::header::LOCATION).unwrap(), "/");

    // home now marks it done
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/"))
        .await
        .unwrap();
    let page = body_text(resp).await;
    assert!(page.contains("class=\"done\""));

    // delete link redirects back home
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/delete/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(http::header::LOCATION).unwrap(), "/");

    // home is empty again
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/"))
        .await
        .unwrap();
    let page = body_text(resp).await;
    assert!(page.contains("Nothing to do yet."));
    assert!(!page.contains("Walk dog"));
}
