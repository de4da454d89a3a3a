//! Handler: comment.delete
//!
//! GET asks for confirmation, POST deletes.

use serde::Serialize;
use tracing::info;

use super::{fetch_comment, CommentItem};
use crate::guard::Access;
use crate::models::Comment;
use crate::record::{RecordStore, RecordsExt};
use crate::web::{urls, Context, HandlerError, Response};

pub const ROUTE: &str = urls::COMMENT_DELETE;

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmDeleteView {
    pub comment: CommentItem,
    pub action_url: String,
    pub todo_url: String,
}

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let user_id = ctx.user_id()?;
    let comment = fetch_comment(ctx, Access::DeleteComment)?;
    let todo_url = urls::todo_detail_url(&comment.todo_id);

    if !ctx.is_post() {
        return Response::render(&ConfirmDeleteView {
            action_url: urls::reverse(ROUTE, &comment.id).unwrap_or_default(),
            comment: CommentItem::new(comment, ctx.session()),
            todo_url,
        });
    }

    ctx.store().records::<Comment>().delete(&comment.id)?;
    info!(comment_id = %comment.id, user_id, "comment deleted");

    Ok(Response::redirect(todo_url))
}
