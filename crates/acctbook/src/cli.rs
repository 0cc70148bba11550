use std::path::PathBuf;

use acctbook_core::AccountType;
use clap::{Parser, Subcommand, ValueEnum};

/// acctbook — manage a persisted list of LOCAL and LDAP accounts.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Directory holding the persisted account list.
    #[arg(long, default_value = ".acctbook", env = "ACCTBOOK_DATA_DIR")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print all accounts as JSON.
    List,

    /// Add an empty LOCAL account and print its id.
    Add,

    /// Remove an account by id.
    Remove { id: String },

    /// Edit fields of an existing account.
    Set {
        id: String,

        /// Label tags separated by `;`.
        #[arg(long)]
        label: Option<String>,

        #[arg(long)]
        login: Option<String>,

        /// Password (LOCAL accounts only).
        #[arg(long)]
        password: Option<String>,
    },

    /// Switch an account between LOCAL and LDAP.
    ChangeType { id: String, account_type: TypeArg },

    /// Show how a label string is split into tags.
    ParseLabel { text: String },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TypeArg {
    Local,
    Ldap,
}

impl From<TypeArg> for AccountType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Local => AccountType::Local,
            TypeArg::Ldap => AccountType::Ldap,
        }
    }
}
