//! Simplified group-expense tracker (shared trips, flatmates).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const NEW_GROUP_SUGGESTION: &str = "AI will start tracking once expenses sync in.";
const NEW_GROUP_REMINDER: &str = "Reminder scheduled for 1 May.";
const BALANCING_SUGGESTION: &str =
    "AI suggests balancing with one transfer: pay ₹3,420 to equalise in under 2 mins.";
const BALANCING_REMINDER: &str = "Auto reminder pushed to WhatsApp & email for this Friday.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitGroup {
    pub id: String,
    pub name: String,
    /// Total spent by the group
    pub total: u64,
    /// Owed to you
    pub owed: u64,
    /// You owe
    pub owe: u64,
    pub suggestion: String,
    pub reminder: String,
}

impl SplitGroup {
    /// Positive when the group owes you on balance.
    pub fn net(&self) -> i128 {
        i128::from(self.owed) - i128::from(self.owe)
    }
}

/// Newest group first.
#[derive(Debug, Clone, Default)]
pub struct GroupTracker {
    groups: Vec<SplitGroup>,
}

impl GroupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[SplitGroup] {
        &self.groups
    }

    pub fn get(&self, id: &str) -> Option<&SplitGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Start tracking a group. Blank names are rejected.
    pub fn add_group(&mut self, name: &str) -> Option<&SplitGroup> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.groups.insert(
            0,
            SplitGroup {
                id: format!("grp-{}", Uuid::new_v4()),
                name: name.to_string(),
                total: 0,
                owed: 0,
                owe: 0,
                suggestion: NEW_GROUP_SUGGESTION.to_string(),
                reminder: NEW_GROUP_REMINDER.to_string(),
            },
        );
        self.groups.first()
    }

    /// Refresh a group's settle-up hint. Unknown ids return `false`.
    pub fn generate_suggestion(&mut self, id: &str) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == id) else {
            return false;
        };
        group.suggestion = BALANCING_SUGGESTION.to_string();
        group.reminder = BALANCING_REMINDER.to_string();
        true
    }

    /// Sum of `net()` across all groups.
    pub fn net_position(&self) -> i128 {
        self.groups.iter().map(SplitGroup::net).sum()
    }
}
