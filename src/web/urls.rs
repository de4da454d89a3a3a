//! Named routes and URL reversal.
//!
//! Path templates use `:param` segments, the syntax the HTTP router expects.

pub const TODO_DETAIL: &str = "todo.detail";
pub const COMMENT_CREATE: &str = "comment.create";
pub const COMMENT_UPDATE: &str = "comment.update";
pub const COMMENT_DELETE: &str = "comment.delete";

/// Route name -> path template. Every template has exactly one parameter.
pub const ROUTES: &[(&str, &str)] = &[
    (TODO_DETAIL, "/todos/:pk"),
    (COMMENT_CREATE, "/todos/:todo_id/comments"),
    (COMMENT_UPDATE, "/comments/:pk/update"),
    (COMMENT_DELETE, "/comments/:pk/delete"),
];

/// The path template registered for `route`.
pub fn path(route: &str) -> Option<&'static str> {
    ROUTES
        .iter()
        .find(|(name, _)| *name == route)
        .map(|(_, template)| *template)
}

/// The route name registered for a path template.
pub fn route_for_path(template: &str) -> Option<&'static str> {
    ROUTES
        .iter()
        .find(|(_, t)| *t == template)
        .map(|(name, _)| *name)
}

/// Build the URL of `route` for the record `id`.
///
/// The id is percent-encoded as a single path segment, so `/`, `?` and
/// spaces in it cannot change which route the URL resolves to.
pub fn reverse(route: &str, id: &str) -> Option<String> {
    let template = path(route)?;
    let id = urlencoding::encode(id);
    let url = template
        .split('/')
        .map(|segment| if segment.starts_with(':') { &*id } else { segment })
        .collect::<Vec<_>>()
        .join("/");
    Some(url)
}

/// URL of a todo's detail page.
pub fn todo_detail_url(todo_id: &str) -> String {
    reverse(TODO_DETAIL, todo_id).unwrap_or_default()
}
