use super::drag::{Commit, CommitTrigger};
use crate::models::DutyStatus;
use crate::utils::colors::paint;
use crate::utils::time::slot_label;
use ansi_term::Colour;
use chrono::{DateTime, Local};
use serde::Serialize;

fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JournalOp {
    Commit,
    LeaveCommit,
}

impl JournalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalOp::Commit => "commit",
            JournalOp::LeaveCommit => "leave-commit",
        }
    }

    fn colour(&self) -> Colour {
        match self {
            JournalOp::Commit => Colour::Green,
            JournalOp::LeaveCommit => Colour::Yellow,
        }
    }
}

impl From<CommitTrigger> for JournalOp {
    fn from(t: CommitTrigger) -> Self {
        match t {
            CommitTrigger::PointerUp => JournalOp::Commit,
            CommitTrigger::PointerLeave => JournalOp::LeaveCommit,
        }
    }
}

/// One committed edit
#[derive(Debug, Clone, Serialize)]
pub struct JournalEntry {
    pub at: DateTime<Local>,
    pub operation: JournalOp,
    pub start: usize,
    pub end: usize,
    pub duty: DutyStatus,
}

impl JournalEntry {
    pub fn span(&self) -> String {
        format!("{}-{}", slot_label(self.start), slot_label(self.end))
    }

    pub fn message(&self) -> String {
        format!(
            "{} slot(s) set to {}",
            self.end - self.start,
            self.duty.label()
        )
    }
}

/// In-memory record of committed edits, oldest first.
#[derive(Debug, Clone, Default)]
pub struct EditJournal {
    entries: Vec<JournalEntry>,
}

impl EditJournal {
    pub fn record(&mut self, commit: &Commit) {
        self.entries.push(JournalEntry {
            at: Local::now(),
            operation: commit.trigger.into(),
            start: commit.edit.range.start,
            end: commit.edit.range.end,
            duty: commit.edit.duty,
        });
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One line per entry: `id: time | op (span) => message`
    pub fn render(&self, color: bool) -> String {
        let id_w = self.entries.len().to_string().len();
        let op_w = self
            .entries
            .iter()
            .map(|e| e.operation.as_str().len() + e.span().len() + 3)
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let op = entry.operation.as_str();
            let painted = paint(op, entry.operation.colour().normal(), color);
            let op_target = format!("{painted} ({})", entry.span());

            // padding on the visible width, without ANSI
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).len()));

            out.push_str(&format!(
                "{:>id_w$}: {} | {}{} => {}\n",
                i + 1,
                entry.at.format("%FT%T%:z"),
                op_target,
                padding,
                entry.message(),
                id_w = id_w
            ));
        }
        out
    }
}
