/*
[INPUT]:  AuthManager and operator input via dialoguer prompts
[OUTPUT]: Read-only paged category listing in the terminal
[POS]:    CLI legacy panel
[UPDATE]: When changing the legacy menu or listing controls
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use cmg_admin_adapter::{
    AdminError, AuthManager, CategoryField, CategoryPage, CategoryQuery, SortOrder,
};

use super::commands::format_table;
use crate::form::LoginDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Categories,
    Logout,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListingAction {
    NextPage,
    PrevPage,
    SortField,
    ToggleDirection,
    Back,
}

impl ListingAction {
    fn label(&self) -> &'static str {
        match self {
            ListingAction::NextPage => "Next page",
            ListingAction::PrevPage => "Previous page",
            ListingAction::SortField => "Sort by field",
            ListingAction::ToggleDirection => "Toggle sort direction",
            ListingAction::Back => "Back",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ListingExit {
    Back,
    SessionExpired,
}

pub async fn run_legacy(auth: &AuthManager, page_size: u32) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("CMG Admin (legacy panel)").bold().cyan());

    loop {
        if !auth.is_authenticated() && !prompt_login(auth, &theme).await? {
            return Ok(());
        }

        let choices = [MenuChoice::Categories, MenuChoice::Logout, MenuChoice::Exit];
        let labels = ["Categories", "Logout", "Exit"];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&labels)
            .default(0)
            .interact()?;

        match choices[selection] {
            MenuChoice::Categories => match browse_categories(auth, &theme, page_size).await? {
                ListingExit::Back => {}
                ListingExit::SessionExpired => {
                    println!("{}", style(AdminError::SessionExpired.to_string()).yellow());
                }
            },
            MenuChoice::Logout => {
                auth.logout().context("clear session")?;
                println!("{}", style("Logged out").green());
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}

/// Returns `false` when the operator gives up on logging in
async fn prompt_login(auth: &AuthManager, theme: &ColorfulTheme) -> Result<bool> {
    loop {
        let email: String = Input::with_theme(theme)
            .with_prompt("Email (empty to quit)")
            .allow_empty(true)
            .interact_text()?;
        if email.trim().is_empty() {
            return Ok(false);
        }
        let password = Password::with_theme(theme)
            .with_prompt("Password")
            .interact()?;

        let credentials = match (LoginDraft { email, password }).to_login_data() {
            Ok(credentials) => credentials,
            Err(errors) => {
                println!("{}", style(errors.join("; ")).red());
                continue;
            }
        };
        match auth.login(&credentials).await {
            Ok(_) => {
                println!("{}", style("You were logged in successfully").green());
                return Ok(true);
            }
            Err(err) => println!("{}", style(err.user_message()).red()),
        }
    }
}

async fn browse_categories(
    auth: &AuthManager,
    theme: &ColorfulTheme,
    page_size: u32,
) -> Result<ListingExit> {
    let mut query = CategoryQuery::page(1, page_size).sorted(CategoryField::Id, SortOrder::Asc);

    loop {
        let page = match auth.client().list_categories(&query).await {
            Ok(page) => page,
            Err(err) if err.is_auth_error() => {
                auth.logout().context("clear session")?;
                return Ok(ListingExit::SessionExpired);
            }
            Err(err) => {
                println!("{}", style(err.user_message()).red());
                return Ok(ListingExit::Back);
            }
        };
        let total_pages = total_pages(&page, query.page_size);
        print!("{}", format_table(&page.items));
        println!(
            "{}",
            style(format!(
                "page {}/{} | sorted by {} {} | {} total",
                query.page,
                total_pages,
                query.sort_by.unwrap_or(CategoryField::Id),
                query.sort_order,
                page.total
            ))
            .dim()
        );

        let actions = listing_actions(query.page, total_pages);
        let labels: Vec<&str> = actions.iter().map(ListingAction::label).collect();
        let selection = Select::with_theme(theme)
            .with_prompt("Categories")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            ListingAction::SortField => {
                let fields: Vec<&str> = CategoryField::ALL.iter().map(CategoryField::as_str).collect();
                let picked = Select::with_theme(theme)
                    .with_prompt("Sort by")
                    .items(&fields)
                    .default(0)
                    .interact()?;
                query = apply_action(query, ListingAction::SortField, Some(CategoryField::ALL[picked]));
            }
            ListingAction::Back => return Ok(ListingExit::Back),
            action => query = apply_action(query, action, None),
        }
    }
}

fn total_pages(page: &CategoryPage, page_size: u32) -> u32 {
    let pages = page.total.div_ceil(u64::from(page_size.max(1))).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

fn listing_actions(page: u32, total_pages: u32) -> Vec<ListingAction> {
    let mut actions = Vec::new();
    if page < total_pages {
        actions.push(ListingAction::NextPage);
    }
    if page > 1 {
        actions.push(ListingAction::PrevPage);
    }
    actions.extend([
        ListingAction::SortField,
        ListingAction::ToggleDirection,
        ListingAction::Back,
    ]);
    actions
}

fn apply_action(
    mut query: CategoryQuery,
    action: ListingAction,
    field: Option<CategoryField>,
) -> CategoryQuery {
    match action {
        ListingAction::NextPage => query.page += 1,
        ListingAction::PrevPage => query.page = query.page.saturating_sub(1).max(1),
        ListingAction::SortField => {
            if let Some(field) = field {
                query.sort_by = Some(field);
                query.page = 1;
            }
        }
        ListingAction::ToggleDirection => {
            query.sort_order = query.sort_order.reversed();
            query.page = 1;
        }
        ListingAction::Back => {}
    }
    query
}
