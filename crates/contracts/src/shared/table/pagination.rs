/// Page position over the visible rows (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn total_pages(&self, total_count: usize) -> usize {
        if total_count == 0 {
            1
        } else {
            (total_count + self.page_size - 1) / self.page_size
        }
    }

    /// Keeps `page` inside the range after the visible set changed.
    pub fn clamp(&mut self, total_count: usize) {
        let total_pages = self.total_pages(total_count);
        if self.page >= total_pages {
            self.page = total_pages.saturating_sub(1);
        }
    }

    pub fn range(&self, total_count: usize) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(total_count);
        let end = (start + self.page_size).min(total_count);
        start..end
    }
}
