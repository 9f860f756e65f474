//! Status line history
//!
//! Alerts are modal and get dismissed; the status line keeps a short trail of
//! what happened (mutations sent, alerts shown) with the time it happened.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use super::Severity;

/// Entries kept before the oldest is dropped
pub const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A request is in flight
    Running,
    Success,
    Error,
    Warning,
    Info,
}

impl StatusKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

impl From<Severity> for StatusKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Success => Self::Success,
            Severity::Error => Self::Error,
            Severity::Warning => Self::Warning,
            Severity::Info => Self::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusEntry {
    pub at: DateTime<Local>,
    pub kind: StatusKind,
    pub text: String,
    /// Which part of the console produced the entry ("Alert", "Mutation")
    pub origin: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Oldest first
    entries: VecDeque<StatusEntry>,
}

impl StatusBarState {
    pub fn record(&mut self, kind: StatusKind, text: impl Into<String>, origin: &'static str) {
        if self.entries.len() == HISTORY_LIMIT {
            self.entries.pop_front();
        }
        self.entries.push_back(StatusEntry {
            at: Local::now(),
            kind,
            text: text.into(),
            origin,
        });
    }

    pub fn latest(&self) -> Option<&StatusEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_history_drops_oldest_entry() {
        let mut state = StatusBarState::default();
        for i in 0..HISTORY_LIMIT + 2 {
            state.record(StatusKind::Info, format!("entry {i}"), "Alert");
        }
        assert_eq!(state.len(), HISTORY_LIMIT);
        assert_eq!(
            state.entries.front().map(|e| e.text.as_str()),
            Some("entry 2")
        );
        assert_eq!(
            state.latest().map(|e| e.text.clone()),
            Some(format!("entry {}", HISTORY_LIMIT + 1))
        );
    }
}
