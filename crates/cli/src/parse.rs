//! ArgMatches → FormAction conversion.

use clap::ArgMatches;

/// What the user did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Look at the form without changing it
    Show,
    /// Replace the name field
    Type(String),
    /// Empty the name field
    Clear,
    /// Rebind the form to another store key
    Move(String),
}

/// Translate parsed arguments into a form action.
pub fn matches_to_action(matches: &ArgMatches) -> anyhow::Result<FormAction> {
    let action = match matches.subcommand() {
        Some(("show", _)) => FormAction::Show,
        Some(("type", sub)) => {
            let words: Vec<&str> = sub
                .get_many::<String>("text")
                .map(|vals| vals.map(String::as_str).collect())
                .unwrap_or_default();
            FormAction::Type(words.join(" "))
        }
        Some(("clear", _)) => FormAction::Clear,
        Some(("move", sub)) => {
            let key = sub
                .get_one::<String>("new_key")
                .ok_or_else(|| anyhow::anyhow!("move needs a key"))?;
            FormAction::Move(key.clone())
        }
        Some((other, _)) => anyhow::bail!("unknown command: {}", other),
        None => anyhow::bail!("no command given"),
    };
    Ok(action)
}
