use crate::errors::AppError;
use crate::models::GratitudeEntry;
use chrono::{DateTime, Duration, Local};

/// Append-only store of the session's entries plus the current daily streak.
/// Entries live in append order; nothing edits or removes them.
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<GratitudeEntry>,
    streak: u32,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[GratitudeEntry] {
        &self.entries
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn append(
        &mut self,
        text: &str,
        mood: u8,
        tags: Vec<String>,
    ) -> Result<GratitudeEntry, AppError> {
        self.append_at(Local::now(), text, mood, tags)
    }

    pub fn append_at(
        &mut self,
        now: DateTime<Local>,
        text: &str,
        mood: u8,
        tags: Vec<String>,
    ) -> Result<GratitudeEntry, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::bad_request(
                "write something you're grateful for",
            ));
        }

        let entry = GratitudeEntry {
            timestamp: now,
            text: text.to_string(),
            mood,
            tags,
            word_count: text.split_whitespace().count(),
        };
        self.entries.push(entry.clone());
        self.update_streak(now);
        Ok(entry)
    }

    // Looks only at the entry immediately before the one just appended;
    // append order is assumed chronological.
    fn update_streak(&mut self, now: DateTime<Local>) {
        if self.entries.len() == 1 {
            self.streak = 1;
            return;
        }

        let today = now.date_naive();
        let yesterday = today - Duration::days(1);
        let previous = self.entries[self.entries.len() - 2].timestamp.date_naive();

        if previous == yesterday {
            self.streak += 1;
        } else if previous != today {
            self.streak = 1;
        }
    }
}
