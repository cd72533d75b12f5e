/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a category's value is defined upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    #[default]
    ApiTag,
    CustomFormula,
    ExactValue,
}

impl CategoryType {
    pub const ALL: [CategoryType; 3] = [
        CategoryType::ApiTag,
        CategoryType::CustomFormula,
        CategoryType::ExactValue,
    ];

    /// Wire value, as sent to and returned by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::ApiTag => "api_tag",
            CategoryType::CustomFormula => "custom_formula",
            CategoryType::ExactValue => "exact_value",
        }
    }

    /// Human readable label for select inputs
    pub fn label(&self) -> &'static str {
        match self {
            CategoryType::ApiTag => "API Tag",
            CategoryType::CustomFormula => "Custom Formula",
            CategoryType::ExactValue => "Exact Value",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CategoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CategoryType::ALL
            .into_iter()
            .find(|kind| {
                kind.as_str().eq_ignore_ascii_case(needle) || kind.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("Invalid category type: {needle}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascend" => Ok(SortOrder::Asc),
            "desc" | "descend" => Ok(SortOrder::Desc),
            other => Err(format!("Invalid sort order: {other}")),
        }
    }
}

/// Category columns the API can sort and filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    Id,
    Label,
    ValueDefinition,
    Description,
    #[serde(rename = "type")]
    Type,
    Priority,
}

impl CategoryField {
    pub const ALL: [CategoryField; 6] = [
        CategoryField::Id,
        CategoryField::Label,
        CategoryField::ValueDefinition,
        CategoryField::Description,
        CategoryField::Type,
        CategoryField::Priority,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryField::Id => "id",
            CategoryField::Label => "label",
            CategoryField::ValueDefinition => "value_definition",
            CategoryField::Description => "description",
            CategoryField::Type => "type",
            CategoryField::Priority => "priority",
        }
    }

    /// Map a table column header onto the field it sorts/filters.
    ///
    /// Any header mentioning "definition" targets `value_definition`, every
    /// other header is matched by its lowercase name.
    pub fn from_column_header(header: &str) -> Option<Self> {
        let lowered = header.trim().to_lowercase();
        if lowered.contains("definition") {
            return Some(CategoryField::ValueDefinition);
        }
        lowered.parse().ok()
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CategoryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CategoryField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown category field: {needle}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_type_parses_wire_and_label() {
        assert_eq!("api_tag".parse::<CategoryType>(), Ok(CategoryType::ApiTag));
        assert_eq!(
            "Custom Formula".parse::<CategoryType>(),
            Ok(CategoryType::CustomFormula)
        );
        assert!("formula".parse::<CategoryType>().is_err());
    }

    #[test]
    fn test_category_type_serde() {
        let json = serde_json::to_string(&CategoryType::ExactValue).unwrap();
        assert_eq!(json, "\"exact_value\"");
    }

    #[test]
    fn test_field_from_column_header() {
        assert_eq!(
            CategoryField::from_column_header("Definition"),
            Some(CategoryField::ValueDefinition)
        );
        assert_eq!(
            CategoryField::from_column_header("Value Definition"),
            Some(CategoryField::ValueDefinition)
        );
        assert_eq!(
            CategoryField::from_column_header("Priority"),
            Some(CategoryField::Priority)
        );
        assert_eq!(CategoryField::from_column_header("Type"), Some(CategoryField::Type));
        assert_eq!(CategoryField::from_column_header("Actions"), None);
    }

    #[test]
    fn test_sort_order_reversed() {
        assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
    }
}
