//! Command-line interface definitions.

use clap::{Parser, Subcommand, ValueEnum};
use shopdesk::domain::shop::ShopConstraint;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shopdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Shopdesk back-office toolkit")]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON); `shopdesk.toml` is used when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Check whether options shared by every shop can be changed
    CanChange {
        /// Treat multistore as enabled, whatever the configured features
        #[arg(long)]
        multistore: bool,

        /// Shop context of the request; defaults to `multistore.default_context`
        #[arg(long, value_enum)]
        context: Option<ContextArg>,

        /// Shop or shop group id for the `single` and `group` contexts
        #[arg(long, default_value_t = 1)]
        id: u32,
    },
    /// Search aliases
    Aliases {
        #[command(subcommand)]
        action: AliasAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum AliasAction {
    /// Print the search terms whose aliases match the query
    Search {
        query: String,

        /// Maximum number of terms; defaults to `search.default_limit`
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContextArg {
    Single,
    Group,
    All,
}

impl ContextArg {
    pub const fn constraint(self, id: u32) -> ShopConstraint {
        match self {
            Self::Single => ShopConstraint::shop(id),
            Self::Group => ShopConstraint::shop_group(id),
            Self::All => ShopConstraint::all_shops(),
        }
    }
}
