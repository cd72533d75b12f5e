/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{CategoryField, CategoryType, SortOrder};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Query parameters for `GET /admin/categories`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuery {
    pub page: u32,
    pub page_size: u32,
    pub sort_by: Option<CategoryField>,
    pub sort_order: SortOrder,
    pub filter_by: Option<CategoryField>,
    pub filter_value: Option<String>,
}

impl Default for CategoryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_order: SortOrder::Asc,
            filter_by: None,
            filter_value: None,
        }
    }
}

impl CategoryQuery {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    pub fn sorted(mut self, field: CategoryField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = order;
        self
    }

    pub fn filtered(mut self, field: CategoryField, value: impl Into<String>) -> Self {
        self.filter_by = Some(field);
        self.filter_value = Some(value.into());
        self
    }

    /// Active filter, only when both the column and a non-empty value are set
    pub fn active_filter(&self) -> Option<(CategoryField, &str)> {
        let field = self.filter_by?;
        let value = self.filter_value.as_deref()?.trim();
        if value.is_empty() {
            None
        } else {
            Some((field, value))
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(field) = self.sort_by {
            params.push(("sort_by", field.as_str().to_string()));
            params.push(("sort_order", self.sort_order.as_str().to_string()));
        }
        if let Some((field, value)) = self.active_filter() {
            params.push(("filter_by", field.as_str().to_string()));
            params.push(("filter_value", value.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub label: String,
    pub value_definition: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub priority: i64,
}

/// Partial update; absent fields are left untouched by the server
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_type: Option<CategoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl CategoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.value_definition.is_none()
            && self.description.is_none()
            && self.category_type.is_none()
            && self.priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_pairs() {
        let pairs = CategoryQuery::default().to_query_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("page_size", "10".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_with_sort_and_filter() {
        let query = CategoryQuery::page(2, 20)
            .sorted(CategoryField::Priority, SortOrder::Desc)
            .filtered(CategoryField::Label, "rev");
        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("sort_by", "priority".to_string())));
        assert!(pairs.contains(&("sort_order", "desc".to_string())));
        assert!(pairs.contains(&("filter_by", "label".to_string())));
        assert!(pairs.contains(&("filter_value", "rev".to_string())));
    }

    #[test]
    fn test_blank_filter_is_not_sent() {
        let query = CategoryQuery::default().filtered(CategoryField::Label, "   ");
        assert!(query.active_filter().is_none());
        assert!(!query.to_query_pairs().iter().any(|(key, _)| *key == "filter_by"));
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let update = CategoryUpdate {
            priority: Some(3),
            ..CategoryUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"priority": 3}));
        assert!(CategoryUpdate::default().is_empty());
    }
}
