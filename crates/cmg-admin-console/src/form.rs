/*
[INPUT]:  Operator-entered form text
[OUTPUT]: Validated create/update payloads and login credentials
[POS]:    Form validation shared by the TUI and scripted commands
[UPDATE]: When category or login form rules change
*/

use cmg_admin_adapter::auth::{MIN_LOGIN_PASSWORD_LEN, check_email};
use cmg_admin_adapter::{Category, CategoryType, CategoryUpdate, LoginData, NewCategory};

pub const CREATE_PRIORITY_FLOOR: &str = "Priority can't be a negative number or 0.";
pub const UPDATE_PRIORITY_FLOOR: &str = "Priority must be at least 1.";

/// Editable text of a category form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub label: String,
    pub value_definition: String,
    pub description: String,
    pub category_type: CategoryType,
    pub priority: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            label: String::new(),
            value_definition: String::new(),
            description: String::new(),
            category_type: CategoryType::ApiTag,
            priority: "0".to_string(),
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            label: category.label.clone(),
            value_definition: category.value_definition.clone(),
            description: category.description.clone(),
            category_type: category.category_type,
            priority: category.priority.to_string(),
        }
    }
}

impl CategoryDraft {
    /// Every failing rule, in field order, worded for the create form
    pub fn validate(&self) -> Vec<String> {
        self.validate_with(CREATE_PRIORITY_FLOOR)
    }

    /// Same rules as [`validate`](Self::validate), worded for the update form
    pub fn validate_update(&self) -> Vec<String> {
        self.validate_with(UPDATE_PRIORITY_FLOOR)
    }

    pub fn to_new_category(&self) -> Result<NewCategory, Vec<String>> {
        self.build(CREATE_PRIORITY_FLOOR)
    }

    /// Only the fields that differ from `original`
    pub fn to_update(&self, original: &Category) -> Result<CategoryUpdate, Vec<String>> {
        let new = self.build(UPDATE_PRIORITY_FLOOR)?;
        let changed = |current: &str, next: String| (current != next).then_some(next);

        Ok(CategoryUpdate {
            label: changed(&original.label, new.label),
            value_definition: changed(&original.value_definition, new.value_definition),
            description: changed(&original.description, new.description),
            category_type: (original.category_type != new.category_type)
                .then_some(new.category_type),
            priority: (original.priority != new.priority).then_some(new.priority),
        })
    }

    fn validate_with(&self, priority_floor: &str) -> Vec<String> {
        let mut errors = Vec::new();
        if self.label.trim().is_empty() {
            errors.push("Label is required".to_string());
        }
        if self.value_definition.trim().is_empty() {
            errors.push("Value definition is required".to_string());
        }
        if self.description.trim().is_empty() {
            errors.push("Description is required".to_string());
        }
        if let Err(message) = self.parsed_priority(priority_floor) {
            errors.push(message);
        }
        errors
    }

    fn build(&self, priority_floor: &str) -> Result<NewCategory, Vec<String>> {
        let errors = self.validate_with(priority_floor);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewCategory {
            label: self.label.trim().to_string(),
            value_definition: self.value_definition.trim().to_string(),
            description: self.description.trim().to_string(),
            category_type: self.category_type,
            priority: self
                .parsed_priority(priority_floor)
                .map_err(|err| vec![err])?,
        })
    }

    fn parsed_priority(&self, priority_floor: &str) -> Result<i64, String> {
        let text = self.priority.trim();
        if text.is_empty() {
            return Err("Priority is required".to_string());
        }
        let value: i64 = text
            .parse()
            .map_err(|_| "Priority must be a number".to_string())?;
        if value < 1 {
            return Err(priority_floor.to_string());
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !check_email(email) {
            errors.push("Invalid email address".to_string());
        }

        if self.password.is_empty() {
            errors.push("Password is required".to_string());
        } else if self.password.chars().count() < MIN_LOGIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {MIN_LOGIN_PASSWORD_LEN} characters"
            ));
        }
        errors
    }

    pub fn to_login_data(&self) -> Result<LoginData, Vec<String>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginData {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
