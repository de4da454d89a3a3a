//! Handler: comment.update

use tracing::info;

use super::{fetch_comment, CommentFormView};
use crate::form::CommentForm;
use crate::guard::Access;
use crate::models::Comment;
use crate::record::{RecordStore, RecordsExt};
use crate::web::{urls, Context, HandlerError, Response};

pub const ROUTE: &str = urls::COMMENT_UPDATE;

pub fn handle<S: RecordStore>(ctx: &Context<S>) -> Result<Response, HandlerError> {
    let user_id = ctx.user_id()?;
    let mut comment = fetch_comment(ctx, Access::UpdateComment)?;
    let view = |form| CommentFormView {
        form,
        action_url: urls::reverse(ROUTE, &comment.id).unwrap_or_default(),
        todo_url: urls::todo_detail_url(&comment.todo_id),
    };

    if !ctx.is_post() {
        return Response::render(&view(CommentForm::with_initial(&comment.message)));
    }

    let clean = match CommentForm::bind(ctx.form()).clean() {
        Ok(clean) => clean,
        Err(form) => return Response::invalid(&view(form)),
    };

    comment.edit(clean.message);
    ctx.store().records::<Comment>().save(&comment)?;
    info!(comment_id = %comment.id, user_id, "comment updated");

    Ok(Response::redirect(urls::todo_detail_url(&comment.todo_id)))
}
