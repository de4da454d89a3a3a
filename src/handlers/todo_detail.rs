//! Handler: todo.detail
//!
//! Shows one todo with an empty comment form and a page of its comments,
//! newest first. Only the owner or a superuser may see it.

use serde::Serialize;

use super::{comments_newest_first, fetch_todo, CommentItem};
use crate::form::CommentForm;
use crate::guard::{ensure_owner, Access};
use crate::models::Todo;
use crate::paginate::{Page, Paginator};
use crate::record::RecordStore;
use crate::web::{urls, Context, HandlerError, Response};

pub const ROUTE: &str = urls::TODO_DETAIL;

#[derive(Debug, Clone, Serialize)]
pub struct TodoDetailView {
    pub todo: Todo,
    pub comment_form: CommentForm,
    pub comment_create_url: String,
    pub page_obj: Page<CommentItem>,
}

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let todo = fetch_todo(ctx.store(), ctx.param("pk")?)?;
    let todo = ensure_owner(todo, ctx.session(), Access::ViewTodo)?;

    let comments = comments_newest_first(ctx.store(), &todo.id)?;
    let page = Paginator::new(comments, ctx.settings().page_size)
        .get_page(ctx.query("page"))
        .map(|comment| CommentItem::new(comment, ctx.session()));

    Response::render(&TodoDetailView {
        comment_create_url: urls::reverse(urls::COMMENT_CREATE, &todo.id).unwrap_or_default(),
        todo,
        comment_form: CommentForm::new(),
        page_obj: page,
    })
}
