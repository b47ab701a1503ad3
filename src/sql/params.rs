//! Review-listing parameters: raw query-string input and its whitelisted form.

use crate::error::{AppError, BAD_SORT_QUERY, INVALID_QUERY};
use serde::Deserialize;
use std::str::FromStr;

/// Columns a review listing may be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    Category,
    #[default]
    CreatedAt,
    Designer,
    Owner,
    ReviewId,
    ReviewImgUrl,
    Title,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub const ALL: [SortColumn; 9] = [
        SortColumn::Category,
        SortColumn::CreatedAt,
        SortColumn::Designer,
        SortColumn::Owner,
        SortColumn::ReviewId,
        SortColumn::ReviewImgUrl,
        SortColumn::Title,
        SortColumn::Votes,
        SortColumn::CommentCount,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::Category => "category",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Designer => "designer",
            SortColumn::Owner => "owner",
            SortColumn::ReviewId => "review_id",
            SortColumn::ReviewImgUrl => "review_img_url",
            SortColumn::Title => "title",
            SortColumn::Votes => "votes",
            SortColumn::CommentCount => "comment_count",
        }
    }

    /// True for the aggregate column, which is an output alias rather than a table column.
    pub fn is_computed(self) -> bool {
        matches!(self, SortColumn::CommentCount)
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::bad_request(BAD_SORT_QUERY))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Case-sensitive: only `ASC` and `DESC` are accepted.
impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(AppError::bad_request(INVALID_QUERY)),
        }
    }
}

/// Query string of `GET /api/reviews` as received.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReviewListParams {
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Validated listing request. Only whitelisted values survive construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewListQuery {
    pub category: Option<String>,
    pub sort_by: SortColumn,
    pub order: SortOrder,
}

impl ReviewListQuery {
    /// Absent `sort_by` / `order` fall back to `created_at` / `DESC`. `order` is checked first.
    pub fn from_params(params: &ReviewListParams) -> Result<Self, AppError> {
        let order = match params.order.as_deref() {
            Some(o) => o.parse()?,
            None => SortOrder::default(),
        };
        let sort_by = match params.sort_by.as_deref() {
            Some(s) => s.parse()?,
            None => SortColumn::default(),
        };
        Ok(ReviewListQuery {
            category: params.category.clone(),
            sort_by,
            order,
        })
    }
}
