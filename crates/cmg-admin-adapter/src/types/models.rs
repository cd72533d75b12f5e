/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::CategoryType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub label: String,
    pub value_definition: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub priority: i64,
}

/// One page of the category listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryPage {
    pub items: Vec<Category>,
    #[serde(alias = "total_amount")]
    pub total: u64,
}
