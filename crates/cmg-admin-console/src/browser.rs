/*
[INPUT]:  Category pages returned by the API and operator navigation
[OUTPUT]: Current list query, loaded rows and pagination window
[POS]:    Successor panel list state
[UPDATE]: When table columns, page sizes or pagination rules change
*/

use uuid::Uuid;

use cmg_admin_adapter::{Category, CategoryField, CategoryPage, CategoryQuery, SortOrder};

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 20, 50];

/// Table headers, left to right
pub const COLUMNS: [&str; 5] = ["Definition", "Label", "Description", "Type", "Priority"];

/// Sortable/filterable field behind a table column
pub fn column_field(index: usize) -> Option<CategoryField> {
    COLUMNS
        .get(index)
        .and_then(|header| CategoryField::from_column_header(header))
}

/// Page links around the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub total_pages: u32,
    pub pages: Vec<u32>,
    pub show_first: bool,
    pub show_last: bool,
    pub gap_before: bool,
    pub gap_after: bool,
}

#[derive(Debug, Clone)]
pub struct CategoryBrowser {
    query: CategoryQuery,
    default_page_size: u32,
    rows: Vec<Category>,
    total: u64,
    pub loading: bool,
}

impl Default for CategoryBrowser {
    fn default() -> Self {
        Self::new(cmg_admin_adapter::DEFAULT_PAGE_SIZE)
    }
}

impl CategoryBrowser {
    pub fn new(page_size: u32) -> Self {
        let page_size = if PAGE_SIZE_OPTIONS.contains(&page_size) {
            page_size
        } else {
            cmg_admin_adapter::DEFAULT_PAGE_SIZE
        };
        Self {
            query: CategoryQuery::page(1, page_size),
            default_page_size: page_size,
            rows: Vec::new(),
            total: 0,
            loading: false,
        }
    }

    pub fn query(&self) -> &CategoryQuery {
        &self.query
    }

    pub fn rows(&self) -> &[Category] {
        &self.rows
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn page_size(&self) -> u32 {
        self.query.page_size
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    pub fn apply_page(&mut self, page: CategoryPage) {
        self.rows = page.items;
        self.total = page.total;
        self.loading = false;
    }

    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.query.page_size.max(1));
        let pages = self.total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Move to `page`, clamped into the valid range. Returns whether it changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let clamped = page.clamp(1, self.total_pages());
        let changed = clamped != self.query.page;
        self.query.page = clamped;
        changed
    }

    pub fn next_page(&mut self) -> bool {
        if self.query.page >= self.total_pages() {
            return false;
        }
        self.set_page(self.query.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        if self.query.page <= 1 {
            return false;
        }
        self.set_page(self.query.page - 1)
    }

    /// Accepts only the page size options; resets to the first page
    pub fn set_page_size(&mut self, size: u32) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.query.page_size = size;
        self.query.page = 1;
        true
    }

    /// Step through the page size options, stopping at either end
    pub fn cycle_page_size(&mut self, delta: i32) -> bool {
        let current = PAGE_SIZE_OPTIONS
            .iter()
            .position(|size| *size == self.query.page_size)
            .unwrap_or(1) as i32;
        let last = PAGE_SIZE_OPTIONS.len() as i32 - 1;
        let next = (current + delta).clamp(0, last) as usize;
        if PAGE_SIZE_OPTIONS[next] == self.query.page_size {
            return false;
        }
        self.set_page_size(PAGE_SIZE_OPTIONS[next])
    }

    pub fn sort(&mut self, field: CategoryField, order: SortOrder) {
        self.query.sort_by = Some(field);
        self.query.sort_order = order;
    }

    /// Filter on `field`; an empty value clears the filter
    pub fn filter(&mut self, field: CategoryField, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.query.filter_by = None;
            self.query.filter_value = None;
        } else {
            self.query.filter_by = Some(field);
            self.query.filter_value = Some(value.to_string());
        }
        self.query.page = 1;
    }

    pub fn reset(&mut self) {
        self.query = CategoryQuery::page(1, self.default_page_size);
    }

    pub fn replace_row(&mut self, category: Category) -> bool {
        match self.rows.iter_mut().find(|row| row.id == category.id) {
            Some(row) => {
                *row = category;
                true
            }
            None => false,
        }
    }

    pub fn remove_row(&mut self, id: Uuid) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        if removed {
            self.total = self.total.saturating_sub(1);
        }
        removed
    }

    pub fn page_window(&self) -> PageWindow {
        let current = self.query.page;
        let total_pages = self.total_pages();
        let start = current.saturating_sub(2).max(1);
        let end = current.saturating_add(2).min(total_pages);

        PageWindow {
            current,
            total_pages,
            pages: (start..=end).collect(),
            show_first: current > 3,
            show_last: current + 2 < total_pages,
            gap_before: current > 4,
            gap_after: current + 3 < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmg_admin_adapter::CategoryType;

    fn category(label: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            label: label.to_string(),
            value_definition: format!("{}_def", label.to_lowercase()),
            description: String::new(),
            category_type: CategoryType::ApiTag,
            priority: 1,
        }
    }

    fn browser_with_total(total: u64) -> CategoryBrowser {
        let mut browser = CategoryBrowser::new(10);
        browser.apply_page(CategoryPage {
            items: vec![category("Revenue"), category("Costs")],
            total,
        });
        browser
    }

    #[test]
    fn test_columns_map_to_fields() {
        assert_eq!(column_field(0), Some(CategoryField::ValueDefinition));
        assert_eq!(column_field(3), Some(CategoryField::Type));
        assert_eq!(column_field(4), Some(CategoryField::Priority));
        assert_eq!(column_field(9), None);
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(browser_with_total(0).total_pages(), 1);
        assert_eq!(browser_with_total(10).total_pages(), 1);
        assert_eq!(browser_with_total(11).total_pages(), 2);
    }

    #[test]
    fn test_paging_is_clamped() {
        let mut browser = browser_with_total(25);
        assert!(!browser.prev_page());
        assert!(browser.next_page());
        assert!(browser.next_page());
        assert!(!browser.next_page());
        assert_eq!(browser.page(), 3);

        browser.set_page(99);
        assert_eq!(browser.page(), 3);
        browser.set_page(0);
        assert_eq!(browser.page(), 1);
    }

    #[test]
    fn test_page_size_options() {
        let mut browser = browser_with_total(100);
        browser.set_page(4);
        assert!(!browser.set_page_size(15));
        assert!(browser.set_page_size(20));
        assert_eq!(browser.page(), 1);

        assert!(browser.cycle_page_size(1));
        assert_eq!(browser.page_size(), 50);
        assert!(!browser.cycle_page_size(1));
        browser.cycle_page_size(-1);
        browser.cycle_page_size(-1);
        browser.cycle_page_size(-1);
        assert_eq!(browser.page_size(), 5);
    }

    #[test]
    fn test_sort_keeps_page_and_filter() {
        let mut browser = browser_with_total(100);
        browser.filter(CategoryField::Label, "rev");
        browser.set_page(3);
        browser.sort(CategoryField::Priority, SortOrder::Desc);

        let query = browser.query();
        assert_eq!(query.page, 3);
        assert_eq!(query.sort_by, Some(CategoryField::Priority));
        assert_eq!(query.active_filter(), Some((CategoryField::Label, "rev")));
    }

    #[test]
    fn test_filter_resets_page_and_keeps_sort() {
        let mut browser = browser_with_total(100);
        browser.sort(CategoryField::Label, SortOrder::Asc);
        browser.set_page(5);
        browser.filter(CategoryField::Description, "  gross ");

        let query = browser.query();
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_by, Some(CategoryField::Label));
        assert_eq!(query.filter_value.as_deref(), Some("gross"));

        browser.filter(CategoryField::Description, "   ");
        assert!(browser.query().active_filter().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut browser = CategoryBrowser::new(20);
        browser.sort(CategoryField::Label, SortOrder::Desc);
        browser.filter(CategoryField::Label, "x");
        browser.set_page_size(50);
        browser.reset();
        assert_eq!(browser.query(), &CategoryQuery::page(1, 20));
    }

    #[test]
    fn test_optimistic_row_updates() {
        let mut browser = browser_with_total(12);
        let mut edited = browser.rows()[0].clone();
        edited.label = "Gross revenue".to_string();
        assert!(browser.replace_row(edited.clone()));
        assert_eq!(browser.rows()[0].label, "Gross revenue");

        assert!(browser.remove_row(edited.id));
        assert_eq!(browser.rows().len(), 1);
        assert_eq!(browser.total(), 11);
        assert!(!browser.remove_row(edited.id));
        assert_eq!(browser.total(), 11);
    }

    #[test]
    fn test_page_window_middle() {
        let mut browser = browser_with_total(200);
        browser.set_page(10);
        let window = browser.page_window();
        assert_eq!(window.pages, vec![8, 9, 10, 11, 12]);
        assert!(window.show_first && window.gap_before);
        assert!(window.show_last && window.gap_after);
    }

    #[test]
    fn test_page_window_edges() {
        let mut browser = browser_with_total(200);
        let window = browser.page_window();
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(!window.show_first && !window.gap_before);
        assert!(window.show_last && window.gap_after);

        browser.set_page(4);
        let window = browser.page_window();
        assert!(window.show_first);
        assert!(!window.gap_before);

        browser.set_page(20);
        let window = browser.page_window();
        assert_eq!(window.pages, vec![18, 19, 20]);
        assert!(!window.show_last && !window.gap_after);
    }
}
