//! Command handlers. Each takes the one store built in `main` by
//! reference and returns the text to print.

use acctbook_core::account::{items_to_label_string, parse_label_to_items};
use acctbook_core::storage::Storage;
use acctbook_core::{AccountId, AccountStore, AccountType};
use eyre::{bail, eyre, WrapErr};

use crate::cli::Command;

pub fn run<S: Storage>(store: &mut AccountStore<S>, command: Command) -> eyre::Result<String> {
    match command {
        Command::List => list(store),
        Command::Add => {
            let account = store.add_account().context("add account")?;
            Ok(account.id.to_string())
        }
        Command::Remove { id } => {
            store
                .remove_account(&AccountId::new(id))
                .context("remove account")?;
            Ok(String::new())
        }
        Command::Set {
            id,
            label,
            login,
            password,
        } => set(store, AccountId::new(id), label, login, password),
        Command::ChangeType { id, account_type } => {
            store
                .change_type(&AccountId::new(id), account_type.into())
                .context("change account type")?;
            Ok(String::new())
        }
        Command::ParseLabel { text } => parse_label(&text),
    }
}

fn list<S: Storage>(store: &AccountStore<S>) -> eyre::Result<String> {
    serde_json::to_string_pretty(store.accounts()).context("render account list")
}

fn set<S: Storage>(
    store: &mut AccountStore<S>,
    id: AccountId,
    label: Option<String>,
    login: Option<String>,
    password: Option<String>,
) -> eyre::Result<String> {
    let mut account = store
        .get(&id)
        .cloned()
        .ok_or_else(|| eyre!("no account with id `{id}`"))?;

    if let Some(label) = label {
        account.label = parse_label_to_items(&label);
    }
    if let Some(login) = login {
        account.login = login;
    }
    if let Some(password) = password {
        if account.account_type == AccountType::Ldap {
            bail!("account `{id}` is LDAP and cannot hold a password");
        }
        account.password = Some(password);
    }

    if !account.is_consistent() {
        tracing::warn!(account_id = %id, "saving account whose password does not match its type");
    }
    store.save_account(account).context("save account")?;
    Ok(String::new())
}

fn parse_label(text: &str) -> eyre::Result<String> {
    let items = parse_label_to_items(text);
    let json = serde_json::to_string_pretty(&items).context("render label items")?;
    Ok(format!("{json}\n{}", items_to_label_string(&items)))
}
