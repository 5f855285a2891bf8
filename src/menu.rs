// src/menu.rs

use crate::recording::TimestampToken;
use std::collections::HashSet;

/// Sorts tokens chronologically. The sort is stable, so equal timestamps keep
/// their relative order.
pub fn sort_tokens(mut tokens: Vec<TimestampToken>) -> Vec<TimestampToken> {
    tokens.sort_by_key(|t| t.recorded_at());
    tokens
}

/// Drops textually repeated tokens, keeping the first occurrence of each.
pub fn dedup_tokens(tokens: Vec<TimestampToken>) -> Vec<TimestampToken> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|t| seen.insert(t.as_str().to_string()))
        .collect()
}

/// One selectable line: the label shown and the token it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub token: TimestampToken,
}

impl MenuEntry {
    pub fn new(token: TimestampToken) -> Self {
        MenuEntry {
            label: token.label(),
            token,
        }
    }
}

/// The labels offered to the user, oldest first, each paired with its token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingMenu {
    entries: Vec<MenuEntry>,
}

impl RecordingMenu {
    /// Sorts and deduplicates `tokens`, then pairs each with its label.
    pub fn build(tokens: Vec<TimestampToken>) -> Self {
        let entries = dedup_tokens(sort_tokens(tokens))
            .into_iter()
            .map(MenuEntry::new)
            .collect();
        RecordingMenu { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries().iter().map(|e| e.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }
}
