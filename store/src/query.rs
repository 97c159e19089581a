//! # List view-model for the Users table
//!
//! [`UserQuery`] holds the user-entered search text, status filter, sort
//! order, and current page, and derives the visible window through a pure
//! filter → filter → sort → slice pipeline over the working set. The view
//! recomputes [`UserQuery::run`] only when one of those inputs changes.
//!
//! Changing the search text, filter, or order resets the page to 1 so the
//! window can never land past the end of a newly narrowed result set.

use crate::models::{Status, User};

/// Records shown per page.
pub const PAGE_SIZE: usize = 5;

/// Status filter control state. `All` keeps every record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == Status::Active,
            StatusFilter::Inactive => status == Status::Inactive,
        }
    }

    /// Value attribute of the corresponding `<option>`.
    pub fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    /// Parse a `<select>` value. Unknown values fall back to `All`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }
}

/// Name sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_value(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Parse a `<select>` value. Unknown values fall back to ascending.
    pub fn from_value(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}

/// Query state owned by the Users view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
    pub status: StatusFilter,
    pub order: SortOrder,
    /// 1-based.
    pub page: usize,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::default(),
            order: SortOrder::default(),
            page: 1,
        }
    }
}

/// One derived window over the filtered/sorted working set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<User>,
    /// Count after filtering, before slicing.
    pub filtered_total: usize,
    pub page: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl UserQuery {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
        self.page = 1;
    }

    pub fn next_page(&mut self, filtered_total: usize) {
        if self.page * PAGE_SIZE < filtered_total {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Run the pipeline: search filter, status filter, stable name sort,
    /// page slice.
    pub fn run(&self, users: &[User]) -> PageView {
        let needle = self.search.to_lowercase();
        let mut matched: Vec<User> = users
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle))
            .filter(|u| self.status.matches(u.status))
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            let (a, b) = (a.name.to_lowercase(), b.name.to_lowercase());
            match self.order {
                SortOrder::Ascending => a.cmp(&b),
                SortOrder::Descending => b.cmp(&a),
            }
        });

        let filtered_total = matched.len();
        let start = (self.page - 1) * PAGE_SIZE;
        let rows: Vec<User> = matched.into_iter().skip(start).take(PAGE_SIZE).collect();

        PageView {
            rows,
            filtered_total,
            page: self.page,
            has_prev: self.page > 1,
            has_next: self.page * PAGE_SIZE < filtered_total,
        }
    }
}
