//! The greeting form: one text field mirrored into a store.

use keepcell::{PersistentCell, Store};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::parse::FormAction;

/// Stored form state, `{"a": "<name>"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameField {
    pub a: String,
}

/// Greeting form bound to a store key.
pub struct Greeting<S: Store> {
    name: PersistentCell<NameField, S>,
}

impl<S: Store> Greeting<S> {
    /// Open the form; a stored name wins over `default`.
    pub fn open(store: S, key: String, default: String) -> keepcell::Result<Self> {
        let name = PersistentCell::create(store, key, NameField { a: default })?;
        Ok(Self { name })
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: FormAction) -> keepcell::Result<()> {
        match action {
            FormAction::Show => Ok(()),
            FormAction::Type(text) => self.name.update(|prev| {
                let mut next = prev.clone();
                next.a = text;
                next
            }),
            FormAction::Clear => self.name.update(|prev| {
                let mut next = prev.clone();
                next.a.clear();
                next
            }),
            FormAction::Move(key) => {
                info!(from = self.name.key(), to = %key, "moving form");
                self.name.rekey(key)
            }
        }
    }

    /// Current name.
    pub fn name(&self) -> &str {
        &self.name.get().a
    }

    /// Text the form shows.
    pub fn render(&self) -> String {
        if self.name().is_empty() {
            "Please type your name".to_string()
        } else {
            format!("Hello {}", self.name())
        }
    }
}
