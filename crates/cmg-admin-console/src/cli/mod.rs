/*
[INPUT]:  Process arguments
[OUTPUT]: Parsed command line for the cmg-admin binary
[POS]:    CLI surface - flags, subcommands and their dispatch targets
[UPDATE]: When adding subcommands or flags
*/

pub mod commands;
pub mod legacy;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use cmg_admin_adapter::{CategoryField, CategoryType, SortOrder};

#[derive(Parser, Debug)]
#[command(name = "cmg-admin", version, about = "Category admin console")]
pub struct Cli {
    /// YAML configuration file
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    /// Admin API base URL, overrides the config file and environment
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Full-screen categories panel (default)
    Tui,
    /// Prompt-driven read-only panel
    Legacy,
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the persisted session
    Logout,
    /// Scripted category operations
    #[command(subcommand)]
    Categories(CategoriesCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CategoriesCommand {
    List(ListArgs),
    Get {
        id: Uuid,
        #[arg(long)]
        json: bool,
    },
    Create(CreateArgs),
    Update(UpdateArgs),
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long = "page-size", default_value_t = cmg_admin_adapter::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
    #[arg(long = "sort-by")]
    pub sort_by: Option<CategoryField>,
    #[arg(long = "sort-order", default_value_t = SortOrder::Asc)]
    pub sort_order: SortOrder,
    #[arg(long = "filter-by", requires = "filter_value")]
    pub filter_by: Option<CategoryField>,
    #[arg(long = "filter-value", requires = "filter_by")]
    pub filter_value: Option<String>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CreateArgs {
    #[arg(long)]
    pub label: String,
    #[arg(long = "value-definition")]
    pub value_definition: String,
    #[arg(long)]
    pub description: String,
    #[arg(long = "type", default_value_t = CategoryType::ApiTag)]
    pub category_type: CategoryType,
    #[arg(long, default_value_t = 1)]
    pub priority: i64,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct UpdateArgs {
    pub id: Uuid,
    #[arg(long)]
    pub label: Option<String>,
    #[arg(long = "value-definition")]
    pub value_definition: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long = "type")]
    pub category_type: Option<CategoryType>,
    #[arg(long)]
    pub priority: Option<i64>,
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = Cli::try_parse_from(["cmg-admin"]).unwrap();
        assert_eq!(cli.command(), Command::Tui);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_list_flags_parse_into_typed_values() {
        let cli = Cli::try_parse_from([
            "cmg-admin",
            "categories",
            "list",
            "--sort-by",
            "priority",
            "--sort-order",
            "desc",
            "--filter-by",
            "label",
            "--filter-value",
            "rev",
            "--api-url",
            "http://api.test",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://api.test"));
        let Some(Command::Categories(CategoriesCommand::List(args))) = cli.command else {
            panic!("expected categories list");
        };
        assert_eq!(args.sort_by, Some(CategoryField::Priority));
        assert_eq!(args.sort_order, SortOrder::Desc);
        assert_eq!(args.filter_by, Some(CategoryField::Label));
        assert_eq!(args.page, 1);
    }

    #[test]
    fn test_filter_by_requires_value() {
        let result = Cli::try_parse_from(["cmg-admin", "categories", "list", "--filter-by", "label"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_rejects_unknown_type() {
        let result = Cli::try_parse_from([
            "cmg-admin",
            "categories",
            "create",
            "--label",
            "Costs",
            "--value-definition",
            "costs",
            "--description",
            "Operating costs",
            "--type",
            "formula",
        ]);
        assert!(result.is_err());
    }
}
