//! View handlers, one module per route.

pub mod comment_create;
pub mod comment_delete;
pub mod comment_update;
pub mod todo_detail;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::form::CommentForm;
use crate::guard::{can_access, ensure_owner, Access};
use crate::models::{Comment, Todo};
use crate::record::{RecordStore, RecordsExt};
use crate::web::{urls, Context, HandlerError, Session};

/// A comment as shown in lists and confirmation pages.
#[derive(Debug, Clone, Serialize)]
pub struct CommentItem {
    pub id: String,
    pub todo_id: String,
    pub user_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Whether the viewer may edit or delete it.
    pub can_edit: bool,
    pub update_url: String,
    pub delete_url: String,
}

impl CommentItem {
    pub fn new(comment: Comment, viewer: &Session) -> Self {
        let can_edit = viewer
            .user_id()
            .is_some_and(|actor| can_access(&comment.user_id, actor, viewer.is_superuser()));
        Self {
            update_url: urls::reverse(urls::COMMENT_UPDATE, &comment.id).unwrap_or_default(),
            delete_url: urls::reverse(urls::COMMENT_DELETE, &comment.id).unwrap_or_default(),
            can_edit,
            id: comment.id,
            todo_id: comment.todo_id,
            user_id: comment.user_id,
            message: comment.message,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// The comment form page, used for create and update.
#[derive(Debug, Clone, Serialize)]
pub struct CommentFormView {
    pub form: CommentForm,
    /// Where the form posts to.
    pub action_url: String,
    /// The owning todo's detail page.
    pub todo_url: String,
}

fn todo_not_found(id: &str) -> HandlerError {
    HandlerError::NotFound(format!("todo {}", id))
}

/// Look up a todo by id. No ownership check.
pub(crate) fn fetch_todo<S: RecordStore>(store: &S, id: &str) -> Result<Todo, HandlerError> {
    store
        .records::<Todo>()
        .get(id)?
        .ok_or_else(|| todo_not_found(id))
}

/// Look up the comment named by the `pk` path parameter and apply the
/// ownership guard for `access`.
pub(crate) fn fetch_comment<S: RecordStore>(
    ctx: &Context<S>,
    access: Access,
) -> Result<Comment, HandlerError> {
    let id = ctx.param("pk")?;
    let comment = ctx
        .store()
        .records::<Comment>()
        .get(id)?
        .ok_or_else(|| HandlerError::NotFound(format!("comment {}", id)))?;
    ensure_owner(comment, ctx.session(), access)
}

/// All comments on a todo, newest first. Equal timestamps keep the most
/// recently inserted first.
pub(crate) fn comments_newest_first<S: RecordStore>(
    store: &S,
    todo_id: &str,
) -> Result<Vec<Comment>, HandlerError> {
    let mut comments = store
        .records::<Comment>()
        .find(&|c: &Comment| c.todo_id == todo_id)?;
    comments.reverse();
    comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(comments)
}
