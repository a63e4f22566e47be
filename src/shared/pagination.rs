// src/shared/pagination.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.per_page as u64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

/// Query string shared by the admin listings. Zero means "use the default".
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,
}

impl From<PageQuery> for PageRequest {
    fn from(q: PageQuery) -> Self {
        PageRequest {
            page: if q.page == 0 { 1 } else { q.page },
            per_page: match q.per_page {
                0 => DEFAULT_PER_PAGE,
                n => n.min(MAX_PER_PAGE),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values_fall_back_to_defaults() {
        let page: PageRequest = PageQuery::default().into();
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn test_per_page_is_capped() {
        let page: PageRequest = PageQuery {
            page: 3,
            per_page: 500,
        }
        .into();

        assert_eq!(page.page, 3);
        assert_eq!(page.per_page, MAX_PER_PAGE);
        assert_eq!(page.offset(), 200);
    }
}
