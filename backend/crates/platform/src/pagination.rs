//! Offset Pagination
//!
//! Page requests for in-memory listings, the query string values they are
//! read from, and SQL-style null ordering for the sorts that precede them.

use std::cmp::Ordering;

use thiserror::Error;

/// Default and maximum `pageSize` for one listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: u32,
    pub max_size: u32,
}

impl PageLimits {
    pub const fn new(default_size: u32, max_size: u32) -> Self {
        Self {
            default_size,
            max_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid page or pageSize parameters")]
pub struct InvalidPage;

/// Validated 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64, limits: PageLimits) -> Result<Self, InvalidPage> {
        if page < 1 || page_size < 1 || page_size > i64::from(limits.max_size) {
            return Err(InvalidPage);
        }
        let page = u32::try_from(page).map_err(|_| InvalidPage)?;
        Ok(Self {
            page,
            page_size: page_size as u32,
        })
    }

    /// Parse query string values; absent or empty means the default
    pub fn parse(
        page: Option<&str>,
        page_size: Option<&str>,
        limits: PageLimits,
    ) -> Result<Self, InvalidPage> {
        let page = parse_or(page, 1)?;
        let page_size = parse_or(page_size, i64::from(limits.default_size))?;
        Self::new(page, page_size, limits)
    }

    /// First page at the default size
    pub fn first(limits: PageLimits) -> Self {
        Self {
            page: 1,
            page_size: limits.default_size,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> Result<i64, InvalidPage> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(text) => text.parse().map_err(|_| InvalidPage),
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching items across all pages
    pub count: usize,
    pub page: u32,
    pub page_size: u32,
    pub next: Option<u32>,
    pub previous: Option<u32>,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Replace the items, keeping the page position
    pub fn map_items<U>(self, f: impl FnOnce(Vec<T>) -> Vec<U>) -> Page<U> {
        Page {
            items: f(self.items),
            count: self.count,
            page: self.page,
            page_size: self.page_size,
            next: self.next,
            previous: self.previous,
        }
    }
}

/// Cut one page out of an already ordered listing
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let count = items.len();
    let offset = request.offset();
    let page_size = request.page_size() as usize;

    let items: Vec<T> = items.into_iter().skip(offset).take(page_size).collect();
    let has_more = offset.saturating_add(page_size) < count;

    Page {
        items,
        count,
        page: request.page(),
        page_size: request.page_size(),
        next: has_more.then(|| request.page() + 1),
        previous: (request.page() > 1).then(|| request.page() - 1),
    }
}

/// First value for `key` among decoded query pairs
///
/// Repeated keys do not make a request unreadable; later values are ignored.
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

pub fn asc_nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Postgres default for `DESC`
pub fn desc_nulls_first<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

pub fn desc_nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
