//! Ownership guard shared by every view that fetches an owned record.
//!
//! A record is visible to its owner and to superusers. Everyone else gets
//! `NotFound`, never a distinct "forbidden", so the response does not reveal
//! whether the record exists.

use tracing::warn;

use crate::record::{Owned, Record};
use crate::web::{HandlerError, Session};

/// What the acting user is attempting; selects the denial message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ViewTodo,
    UpdateComment,
    DeleteComment,
}

impl Access {
    /// Localized message embedded in the NotFound error.
    pub fn denial_message(self) -> &'static str {
        match self {
            Access::ViewTodo => "해당 To Do를 조회할 권한이 없습니다.",
            Access::UpdateComment => "해당 댓글을 수정할 권한이 없습니다.",
            Access::DeleteComment => "해당 댓글을 삭제할 권한이 없습니다.",
        }
    }
}

/// The access policy: owner or superuser.
pub fn can_access(owner_id: &str, actor_id: &str, is_superuser: bool) -> bool {
    owner_id == actor_id || is_superuser
}

/// Return `record` unchanged when the session may act on it.
pub fn ensure_owner<M: Record + Owned>(
    record: M,
    session: &Session,
    access: Access,
) -> Result<M, HandlerError> {
    let allowed = session
        .user_id()
        .is_some_and(|actor| can_access(record.owner_id(), actor, session.is_superuser()));
    if allowed {
        return Ok(record);
    }

    let actor = session.user_id().unwrap_or("-");
    warn!(
        collection = M::COLLECTION,
        id = record.id(),
        actor,
        ?access,
        "ownership check denied"
    );
    Err(HandlerError::NotFound(access.denial_message().to_string()))
}
