/*
[INPUT]:  Parsed categories/login subcommands and an authenticated AuthManager
[OUTPUT]: Category listings and operation results on stdout
[POS]:    CLI scripted mode
[UPDATE]: When adding subcommands or changing their output
*/

use std::io::Write;

use anyhow::{Context, Result, anyhow, bail};
use dialoguer::{Confirm, Password, theme::ColorfulTheme};
use unicode_width::UnicodeWidthStr;

use cmg_admin_adapter::{AuthManager, Category, CategoryQuery, CategoryUpdate};

use super::{CategoriesCommand, CreateArgs, ListArgs, UpdateArgs};
use crate::form::{CategoryDraft, LoginDraft, UPDATE_PRIORITY_FLOOR};

const TABLE_HEADERS: [&str; 6] = [
    "ID",
    "Label",
    "Value definition",
    "Description",
    "Type",
    "Priority",
];

pub async fn login(auth: &AuthManager, email: String, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()
            .context("read password")?,
    };
    let credentials = LoginDraft { email, password }
        .to_login_data()
        .map_err(|errors| anyhow!(errors.join("; ")))?;

    auth.login(&credentials).await.context("login failed")?;
    let subject = auth
        .session()
        .and_then(|session| session.subject())
        .unwrap_or_else(|| credentials.email.clone());
    println!("Logged in as {subject}");
    Ok(())
}

pub fn logout(auth: &AuthManager) -> Result<()> {
    auth.logout().context("clear session")?;
    println!("Logged out");
    Ok(())
}

pub async fn run_categories(
    auth: &AuthManager,
    command: CategoriesCommand,
    out: &mut impl Write,
) -> Result<()> {
    let client = auth.client();
    match command {
        CategoriesCommand::List(args) => {
            let query = list_query(&args);
            let page = client
                .list_categories(&query)
                .await
                .context("list categories")?;
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&page)?)?;
            } else {
                write!(out, "{}", format_table(&page.items))?;
                writeln!(
                    out,
                    "page {} | {} per page | {} total",
                    query.page, query.page_size, page.total
                )?;
            }
        }
        CategoriesCommand::Get { id, json } => {
            let category = client
                .get_category(id)
                .await
                .with_context(|| format!("get category {id}"))?;
            print_category(out, &category, json)?;
        }
        CategoriesCommand::Create(args) => {
            let json = args.json;
            let new = create_draft(&args)
                .to_new_category()
                .map_err(|errors| anyhow!(errors.join("; ")))?;
            let created = client
                .create_category(&new)
                .await
                .context("create category")?;
            print_category(out, &created, json)?;
        }
        CategoriesCommand::Update(args) => {
            let update = build_update(&args)?;
            let updated = client
                .update_category(args.id, &update)
                .await
                .with_context(|| format!("update category {}", args.id))?;
            print_category(out, &updated, args.json)?;
        }
        CategoriesCommand::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Delete category {id}?"))
                    .default(false)
                    .interact()
                    .context("read confirmation")?;
                if !confirmed {
                    writeln!(out, "Aborted")?;
                    return Ok(());
                }
            }
            let response = client
                .delete_category(id)
                .await
                .with_context(|| format!("delete category {id}"))?;
            writeln!(out, "{}", response.detail)?;
        }
    }
    Ok(())
}

fn list_query(args: &ListArgs) -> CategoryQuery {
    let mut query = CategoryQuery::page(args.page.max(1), args.page_size.max(1));
    if let Some(field) = args.sort_by {
        query = query.sorted(field, args.sort_order);
    }
    if let (Some(field), Some(value)) = (args.filter_by, args.filter_value.as_deref()) {
        query = query.filtered(field, value);
    }
    query
}

fn create_draft(args: &CreateArgs) -> CategoryDraft {
    CategoryDraft {
        label: args.label.clone(),
        value_definition: args.value_definition.clone(),
        description: args.description.clone(),
        category_type: args.category_type,
        priority: args.priority.to_string(),
    }
}

fn build_update(args: &UpdateArgs) -> Result<CategoryUpdate> {
    let trimmed = |value: &Option<String>, name: &str| -> Result<Option<String>> {
        match value.as_deref().map(str::trim) {
            Some("") => bail!("{name} can't be empty"),
            other => Ok(other.map(str::to_string)),
        }
    };
    if matches!(args.priority, Some(priority) if priority < 1) {
        bail!(UPDATE_PRIORITY_FLOOR);
    }

    let update = CategoryUpdate {
        label: trimmed(&args.label, "Label")?,
        value_definition: trimmed(&args.value_definition, "Value definition")?,
        description: trimmed(&args.description, "Description")?,
        category_type: args.category_type,
        priority: args.priority,
    };
    if update.is_empty() {
        bail!("Nothing to update");
    }
    Ok(update)
}

fn print_category(out: &mut impl Write, category: &Category, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(category)?)?;
    } else {
        write!(out, "{}", format_table(std::slice::from_ref(category)))?;
    }
    Ok(())
}

/// Plain-text table with one row per category
pub fn format_table(categories: &[Category]) -> String {
    let rows: Vec<[String; 6]> = categories
        .iter()
        .map(|category| {
            [
                category.id.to_string(),
                category.label.clone(),
                category.value_definition.clone(),
                category.description.clone(),
                category.category_type.label().to_string(),
                category.priority.to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|header| UnicodeWidthStr::width(header));
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let mut table = String::new();
    let headers = TABLE_HEADERS.map(str::to_string);
    for row in std::iter::once(&headers).chain(rows.iter()) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let padding = width.saturating_sub(UnicodeWidthStr::width(cell.as_str()));
                format!("{cell}{}", " ".repeat(padding))
            })
            .collect();
        table.push_str(cells.join("  ").trim_end());
        table.push('\n');
    }
    if rows.is_empty() {
        table.push_str("(no categories)\n");
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    use cmg_admin_adapter::{AdminClient, CategoryField, CategoryType, ClientConfig, SortOrder};
    use tokio_test::assert_ok;
    use uuid::Uuid;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn auth_for(server: &MockServer) -> AuthManager {
        let client = AdminClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap();
        client
            .session()
            .set_tokens("access".to_string(), "refresh".to_string())
            .unwrap();
        AuthManager::new(client)
    }

    fn category(label: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            label: label.to_string(),
            value_definition: label.to_lowercase(),
            description: format!("{label} total"),
            category_type: CategoryType::ExactValue,
            priority: 2,
        }
    }

    fn list_args() -> ListArgs {
        ListArgs {
            page: 2,
            page_size: 20,
            sort_by: Some(CategoryField::Label),
            sort_order: SortOrder::Desc,
            filter_by: None,
            filter_value: None,
            json: true,
        }
    }

    #[test]
    fn test_format_table_aligns_columns() {
        let rows = vec![category("Revenue"), category("Costs")];
        let table = format_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Revenue  "));
        assert!(lines[2].contains("Exact Value"));
        assert_eq!(lines[1].find("revenue"), lines[2].find("costs"));
    }

    #[test]
    fn test_format_table_empty() {
        assert!(format_table(&[]).ends_with("(no categories)\n"));
    }

    #[test]
    fn test_update_requires_a_change() {
        let args = UpdateArgs {
            id: Uuid::new_v4(),
            label: None,
            value_definition: None,
            description: None,
            category_type: None,
            priority: None,
            json: false,
        };
        assert!(build_update(&args).is_err());

        let args = UpdateArgs {
            label: Some("  ".to_string()),
            ..args
        };
        assert!(build_update(&args).is_err());

        let args = UpdateArgs {
            label: None,
            priority: Some(0),
            ..args
        };
        let err = build_update(&args).unwrap_err();
        assert_eq!(err.to_string(), UPDATE_PRIORITY_FLOOR);
    }

    #[tokio::test]
    async fn test_list_sends_query_and_prints_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/categories"))
            .and(query_param("page", "2"))
            .and(query_param("page_size", "20"))
            .and(query_param("sort_by", "label"))
            .and(query_param("sort_order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [category("Revenue")],
                "total": 21
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        run_categories(
            &auth_for(&server),
            CategoriesCommand::List(list_args()),
            &mut out,
        )
        .await
        .unwrap();

        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed["total"], 21);
        assert_eq!(printed["items"][0]["label"], "Revenue");
    }

    #[tokio::test]
    async fn test_update_sends_only_given_fields() {
        let server = MockServer::start().await;
        let mut existing = category("Revenue");
        existing.priority = 5;
        Mock::given(method("PATCH"))
            .and(path(format!("/admin/categories/{}", existing.id)))
            .and(body_json(serde_json::json!({"priority": 5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(&existing))
            .expect(1)
            .mount(&server)
            .await;

        let args = UpdateArgs {
            id: existing.id,
            label: None,
            value_definition: None,
            description: None,
            category_type: None,
            priority: Some(5),
            json: false,
        };
        let mut out = Vec::new();
        run_categories(&auth_for(&server), CategoriesCommand::Update(args), &mut out)
            .await
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Revenue"));
    }

    #[tokio::test]
    async fn test_delete_with_yes_skips_prompt() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();
        Mock::given(method("DELETE"))
            .and(path(format!("/admin/categories/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"detail": "Category deleted successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        assert_ok!(
            run_categories(
                &auth_for(&server),
                CategoriesCommand::Delete { id, yes: true },
                &mut out,
            )
            .await
        );
        assert_eq!(String::from_utf8(out).unwrap(), "Category deleted successfully\n");
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let args = CreateArgs {
            label: "Costs".to_string(),
            value_definition: String::new(),
            description: "Operating costs".to_string(),
            category_type: CategoryType::ApiTag,
            priority: 0,
            json: false,
        };
        let err = run_categories(&auth_for(&server), CategoriesCommand::Create(args), &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Value definition is required"));
    }
}
