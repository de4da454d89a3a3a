//! HTTP transport: maps HTTP requests to view dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /todos/:pk`: todo detail (`?page=N` selects the comment page).
//! - `GET|POST /todos/:todo_id/comments`: comment form / create.
//! - `GET|POST /comments/:pk/update`: comment form / update.
//! - `GET|POST /comments/:pk/delete`: confirmation / delete.
//! - `GET /health`: `{ "ok": true, "routes": [...] }`.
//!
//! The session comes from the `x-user-id` and `x-user-superuser` headers set
//! by the authenticating proxy. POST bodies are urlencoded forms.
//!
//! Outcomes: rendered views are 200 JSON, re-rendered invalid forms are 422
//! JSON, redirects are 302 with `Location`, anonymous requests are sent to
//! the login URL, and errors are `{ "error": ... }` with the error's status.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{MatchedPath, Path, Query, State};
use axum::http::{header, HeaderMap, Method as HttpMethod, StatusCode, Uri};
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde_json::{json, Map, Value};
use tracing::{error, info};

use super::error::HandlerError;
use super::request::{Method, Request, Response};
use super::service::Service;
use super::session::Session;
use super::urls;

/// Build an axum `Router` serving the registered views.
pub fn router<S: Send + Sync + 'static>(service: Arc<Service<S>>) -> Router {
    let mut router = Router::new().route("/health", get(health_handler::<S>));

    for (name, template) in urls::ROUTES {
        if !service.routes().contains(name) {
            continue;
        }
        let method_router = if *name == urls::TODO_DETAIL {
            get(view_handler::<S>)
        } else {
            get(view_handler::<S>).post(view_handler::<S>)
        };
        router = router.route(template, method_router);
    }

    router.with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:8000"`).
pub async fn serve<S: Send + Sync + 'static>(
    service: Arc<Service<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!(addr = %local, "listening");
    axum::serve(listener, app).await
}

/// `GET /health`: returns `{ "ok": true, "routes": [...] }`.
async fn health_handler<S: Send + Sync + 'static>(
    State(service): State<Arc<Service<S>>>,
) -> impl IntoResponse {
    let mut routes = service.routes();
    routes.sort_unstable();
    Json(json!({ "ok": true, "routes": routes }))
}

/// Dispatch a view route. The route name comes from the matched template.
async fn view_handler<S: Send + Sync + 'static>(
    State(service): State<Arc<Service<S>>>,
    matched: MatchedPath,
    method: HttpMethod,
    uri: Uri,
    Path(params): Path<HashMap<String, String>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    form: Option<Form<HashMap<String, String>>>,
) -> HttpResponse {
    let Some(route) = urls::route_for_path(matched.as_str()) else {
        return error_response(HandlerError::UnknownRoute(matched.as_str().to_string()));
    };

    let request = Request {
        method: if method == HttpMethod::POST {
            Method::Post
        } else {
            Method::Get
        },
        params,
        query,
        form: form.map_or(Value::Null, |Form(fields)| form_value(fields)),
        session: session_from_headers(&headers),
    };

    match service.dispatch(route, request) {
        Ok(Response::Render(view)) => (StatusCode::OK, Json(view)).into_response(),
        Ok(Response::Invalid(view)) => (StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response(),
        Ok(Response::Redirect(url)) => found(url),
        Err(HandlerError::Unauthenticated) => found(service.settings().login_redirect(uri.path())),
        Err(e) => error_response(e),
    }
}

/// 302 Found, the status plain form posts expect.
fn found(url: String) -> HttpResponse {
    (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
}

fn error_response(e: HandlerError) -> HttpResponse {
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %e, "view failed");
    }
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}

fn form_value(fields: HashMap<String, String>) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect::<Map<String, Value>>(),
    )
}

/// Extract session variables from HTTP headers.
///
/// All headers are lowercased and included as session variables.
fn session_from_headers(headers: &HeaderMap) -> Session {
    let mut vars = HashMap::new();
    for (name, value) in headers.iter() {
        if let Ok(v) = value.to_str() {
            vars.insert(name.as_str().to_string(), v.to_string());
        }
    }
    Session::from_map(vars)
}
