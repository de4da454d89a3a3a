//! Settings the views read at runtime.

use crate::paginate::DEFAULT_PAGE_SIZE;

pub const DEFAULT_LOGIN_URL: &str = "/accounts/login/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Comments per page on the todo detail view.
    pub page_size: usize,
    /// Where anonymous requests are sent; `?next=<path>` is appended.
    pub login_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            login_url: DEFAULT_LOGIN_URL.to_string(),
        }
    }
}

impl Settings {
    /// Login redirect target for an anonymous request to `path`.
    ///
    /// `next` is query-encoded with `/` left readable.
    pub fn login_redirect(&self, path: &str) -> String {
        let sep = if self.login_url.contains('?') { '&' } else { '?' };
        let next = path
            .split('/')
            .map(urlencoding::encode)
            .collect::<Vec<_>>()
            .join("/");
        format!("{}{}next={}", self.login_url, sep, next)
    }
}
