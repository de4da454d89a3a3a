//! Page-number pagination over an already ordered sequence.

use std::num::IntErrorKind;

use serde::Serialize;

/// Comments shown per page on the todo detail view.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Splits an ordered list into 1-based pages of `per_page` items.
///
/// An empty list still has one (empty) page.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    per_page: usize,
}

impl<T> Paginator<T> {
    /// `per_page` below 1 is treated as 1.
    pub fn new(items: Vec<T>, per_page: usize) -> Self {
        Self {
            items,
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn num_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page).max(1)
    }

    /// Resolve a raw `page` query value to a valid page number.
    ///
    /// Missing or non-numeric values select page 1; numbers below 1 clamp to
    /// the first page and numbers past the end clamp to the last.
    pub fn page_number(&self, raw: Option<&str>) -> usize {
        let last = self.num_pages();
        let Some(raw) = raw.map(str::trim) else {
            return 1;
        };
        match raw.parse::<i64>() {
            Ok(n) if n < 1 => 1,
            Ok(n) => usize::try_from(n).map_or(last, |n| n.min(last)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => last,
                _ => 1,
            },
        }
    }

    /// Consume the paginator and return the requested page.
    pub fn get_page(self, raw: Option<&str>) -> Page<T> {
        let number = self.page_number(raw);
        self.page(number)
    }

    /// Return page `number`, which must already be valid.
    fn page(self, number: usize) -> Page<T> {
        let count = self.count();
        let num_pages = self.num_pages();
        let start = (number - 1) * self.per_page;
        let end = (start + self.per_page).min(count);

        let object_list: Vec<T> = self
            .items
            .into_iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect();

        let (start_index, end_index) = if object_list.is_empty() {
            (0, 0)
        } else {
            (start + 1, end)
        };

        Page {
            object_list,
            number,
            num_pages,
            count,
            has_next: number < num_pages,
            has_previous: number > 1,
            next_page_number: (number < num_pages).then_some(number + 1),
            previous_page_number: (number > 1).then(|| number - 1),
            start_index,
            end_index,
        }
    }
}

/// One page of items plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub object_list: Vec<T>,
    /// 1-based page number.
    pub number: usize,
    pub num_pages: usize,
    /// Total items across all pages.
    pub count: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub next_page_number: Option<usize>,
    pub previous_page_number: Option<usize>,
    /// 1-based index of the first item on this page; 0 when empty.
    pub start_index: usize,
    /// 1-based index of the last item on this page; 0 when empty.
    pub end_index: usize,
}

impl<T> Page<T> {
    /// Convert the items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            object_list: self.object_list.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            has_next: self.has_next,
            has_previous: self.has_previous,
            next_page_number: self.next_page_number,
            previous_page_number: self.previous_page_number,
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }
}
