use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaginationInfo {
    pub current_page: u32, // 1-based
    pub total_pages: u32,
    pub total_items: u64,
    pub page_size: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationInfo {
    pub fn new(current_page: u32, page_size: u32, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            // Divide in u64; narrowing first would truncate large catalogs.
            total_items.div_ceil(u64::from(page_size)) as u32
        };
        Self {
            current_page,
            total_pages,
            total_items,
            page_size,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PaginationQuery {
    pub page: Option<u32>, // 1-based
    pub page_size: Option<u32>,
}

impl PaginationQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(20).clamp(1, 100)
    }

    pub fn offset(&self) -> u32 {
        (self.page() - 1) * self.page_size()
    }
}

/// Offset/limit query for the library "load more" endpoints.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoadMoreQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_info() {
        let info = PaginationInfo::new(2, 20, 45);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_next_page);
        assert!(info.has_previous_page);

        let empty = PaginationInfo::new(1, 20, 0);
        assert_eq!(empty.total_pages, 1);
        assert!(!empty.has_next_page);
        assert!(!empty.has_previous_page);
    }

    #[test]
    fn test_pagination_info_beyond_u32_items() {
        let big = PaginationInfo::new(1, 100, 5_000_000_001);
        assert_eq!(big.total_pages, 50_000_001);
        assert!(big.has_next_page);
    }
}
