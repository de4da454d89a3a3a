//! Handler: comment.create
//!
//! GET shows a blank form; POST validates it and attaches a new comment,
//! authored by the acting user, to the todo in the path. Any signed-in user
//! may comment on a todo they know the id of.

use tracing::info;

use super::{fetch_todo, CommentFormView};
use crate::form::CommentForm;
use crate::models::Comment;
use crate::record::{RecordStore, RecordsExt};
use crate::web::{urls, Context, HandlerError, Response};

pub const ROUTE: &str = urls::COMMENT_CREATE;

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let todo_id = ctx.param("todo_id")?;
    let user_id = ctx.user_id()?;
    let view = |form| CommentFormView {
        form,
        action_url: urls::reverse(ROUTE, todo_id).unwrap_or_default(),
        todo_url: urls::todo_detail_url(todo_id),
    };

    if !ctx.is_post() {
        return Response::render(&view(CommentForm::new()));
    }

    let clean = match CommentForm::bind(ctx.form()).clean() {
        Ok(clean) => clean,
        Err(form) => return Response::invalid(&view(form)),
    };

    let todo = fetch_todo(ctx.store(), todo_id)?;
    let comment = Comment::new(&todo.id, user_id, clean.message);
    ctx.store().records::<Comment>().insert(&comment)?;
    info!(comment_id = %comment.id, todo_id = %todo.id, user_id, "comment created");

    Ok(Response::redirect(urls::todo_detail_url(&todo.id)))
}
