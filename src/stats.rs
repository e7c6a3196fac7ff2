use crate::models::{
    GratitudeEntry, MoodBand, MoodPoint, SortOrder, StatsResponse, WeekdayMood, WordCount,
};
use chrono::Datelike;
use std::collections::HashMap;

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn build_stats(entries: &[GratitudeEntry], streak: u32) -> StatsResponse {
    StatsResponse {
        total_entries: entries.len(),
        average_mood: average_mood(entries),
        average_word_count: average_word_count(entries),
        current_streak: streak,
        mood_trend: mood_trend(entries),
        mood_by_weekday: mood_by_weekday(entries),
        word_frequencies: word_frequencies(entries),
    }
}

pub fn average_mood(entries: &[GratitudeEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: f64 = entries.iter().map(|entry| f64::from(entry.mood)).sum();
    Some(sum / entries.len() as f64)
}

pub fn average_word_count(entries: &[GratitudeEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: f64 = entries.iter().map(|entry| entry.word_count as f64).sum();
    Some(sum / entries.len() as f64)
}

pub fn mood_trend(entries: &[GratitudeEntry]) -> Vec<MoodPoint> {
    entries
        .iter()
        .map(|entry| MoodPoint {
            timestamp: entry.timestamp.to_rfc3339(),
            mood: entry.mood,
        })
        .collect()
}

/// Mean mood per weekday. Every canonical weekday is present in
/// Monday..Sunday order; weekdays without entries report no mean.
pub fn mood_by_weekday(entries: &[GratitudeEntry]) -> Vec<WeekdayMood> {
    let mut sums = [0u64; 7];
    let mut counts = [0u64; 7];
    for entry in entries {
        let index = entry.timestamp.weekday().num_days_from_monday() as usize;
        sums[index] += u64::from(entry.mood);
        counts[index] += 1;
    }

    WEEKDAYS
        .iter()
        .enumerate()
        .map(|(index, name)| WeekdayMood {
            weekday: (*name).to_string(),
            average_mood: (counts[index] > 0)
                .then(|| sums[index] as f64 / counts[index] as f64),
        })
        .collect()
}

/// Occurrence counts for lowercased runs of 3+ alphabetic characters across
/// all entries. Shorter runs and punctuation are dropped; there is no
/// stopword list. Most frequent first, ties alphabetical.
pub fn word_frequencies(entries: &[GratitudeEntry]) -> Vec<WordCount> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for entry in entries {
        for run in entry.text.split(|c: char| !c.is_ascii_alphabetic()) {
            if run.len() >= 3 {
                *counts.entry(run.to_ascii_lowercase()).or_default() += 1;
            }
        }
    }

    let mut frequencies: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    frequencies
}

pub fn filter_by_mood(entries: &[GratitudeEntry], band: MoodBand) -> Vec<&GratitudeEntry> {
    entries
        .iter()
        .filter(|entry| band.matches(entry.mood))
        .collect()
}

pub fn sort_entries(mut entries: Vec<&GratitudeEntry>, order: SortOrder) -> Vec<&GratitudeEntry> {
    if order == SortOrder::Newest {
        entries.reverse();
    }
    entries
}

pub fn journal_view(
    entries: &[GratitudeEntry],
    band: MoodBand,
    order: SortOrder,
) -> Vec<&GratitudeEntry> {
    sort_entries(filter_by_mood(entries, band), order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, NaiveDate, TimeZone};

    fn entry_on(year: i32, month: u32, day: u32, text: &str, mood: u8) -> GratitudeEntry {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let timestamp: DateTime<Local> = Local
            .from_local_datetime(&date.and_hms_opt(9, 0, 0).unwrap())
            .single()
            .expect("unambiguous local time");
        GratitudeEntry {
            timestamp,
            text: text.to_string(),
            mood,
            tags: Vec::new(),
            word_count: text.split_whitespace().count(),
        }
    }

    #[test]
    fn average_mood_of_8_9_10_is_9() {
        let entries = vec![
            entry_on(2026, 1, 5, "one", 8),
            entry_on(2026, 1, 6, "two", 9),
            entry_on(2026, 1, 7, "three", 10),
        ];
        assert_eq!(average_mood(&entries), Some(9.0));
    }

    #[test]
    fn averages_are_none_on_empty_store() {
        assert_eq!(average_mood(&[]), None);
        assert_eq!(average_word_count(&[]), None);
    }

    #[test]
    fn mood_trend_preserves_store_order() {
        let entries = vec![
            entry_on(2026, 1, 5, "first", 4),
            entry_on(2026, 1, 6, "second", 9),
        ];
        let trend = mood_trend(&entries);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].mood, 4);
        assert_eq!(trend[1].mood, 9);
    }

    #[test]
    fn mood_by_weekday_lists_all_seven_days() {
        // 2026-01-05 is a Monday, 2026-01-06 a Tuesday.
        let entries = vec![
            entry_on(2026, 1, 5, "monday entry", 6),
            entry_on(2026, 1, 12, "another monday", 8),
            entry_on(2026, 1, 6, "tuesday entry", 4),
        ];
        let by_weekday = mood_by_weekday(&entries);
        assert_eq!(by_weekday.len(), 7);
        assert_eq!(by_weekday[0].weekday, "Monday");
        assert_eq!(by_weekday[0].average_mood, Some(7.0));
        assert_eq!(by_weekday[1].average_mood, Some(4.0));
        assert_eq!(by_weekday[6].weekday, "Sunday");
        assert_eq!(by_weekday[6].average_mood, None);
    }

    #[test]
    fn word_frequencies_keep_all_three_letter_runs() {
        let entries = vec![entry_on(
            2026,
            1,
            5,
            "I am grateful for my cat and my dog",
            8,
        )];
        let frequencies = word_frequencies(&entries);
        let count_of = |word: &str| {
            frequencies
                .iter()
                .find(|entry| entry.word == word)
                .map(|entry| entry.count)
        };
        assert_eq!(count_of("grateful"), Some(1));
        assert_eq!(count_of("cat"), Some(1));
        assert_eq!(count_of("dog"), Some(1));
        // three-letter runs count; there is no stopword removal
        assert_eq!(count_of("and"), Some(1));
        assert_eq!(count_of("for"), Some(1));
        assert_eq!(count_of("my"), None);
        assert_eq!(count_of("am"), None);
        assert_eq!(count_of("i"), None);
    }

    #[test]
    fn word_frequencies_fold_case_and_split_on_punctuation() {
        let entries = vec![entry_on(2026, 1, 5, "Sunshine, sunshine... SUNSHINE!", 9)];
        let frequencies = word_frequencies(&entries);
        assert_eq!(frequencies.len(), 1);
        assert_eq!(frequencies[0].word, "sunshine");
        assert_eq!(frequencies[0].count, 3);
    }

    #[test]
    fn word_frequencies_order_most_frequent_first() {
        let entries = vec![
            entry_on(2026, 1, 5, "tea and tea and tea", 7),
            entry_on(2026, 1, 6, "books and tea", 7),
        ];
        let frequencies = word_frequencies(&entries);
        assert_eq!(frequencies[0].word, "tea");
        assert_eq!(frequencies[0].count, 4);
        assert_eq!(frequencies[1].word, "and");
        assert_eq!(frequencies[1].count, 3);
    }

    #[test]
    fn low_band_keeps_low_moods_in_order() {
        let entries = vec![
            entry_on(2026, 1, 5, "rough", 1),
            entry_on(2026, 1, 6, "okay", 5),
            entry_on(2026, 1, 7, "meh", 3),
            entry_on(2026, 1, 8, "great", 9),
        ];
        let low: Vec<u8> = filter_by_mood(&entries, MoodBand::Low)
            .iter()
            .map(|entry| entry.mood)
            .collect();
        assert_eq!(low, vec![1, 3]);
    }

    #[test]
    fn sort_orders_reverse_or_keep_store_order() {
        let entries = vec![
            entry_on(2026, 1, 5, "e1", 5),
            entry_on(2026, 1, 6, "e2", 6),
            entry_on(2026, 1, 7, "e3", 7),
        ];
        let newest: Vec<&str> = journal_view(&entries, MoodBand::All, SortOrder::Newest)
            .iter()
            .map(|entry| entry.text.as_str())
            .collect();
        assert_eq!(newest, vec!["e3", "e2", "e1"]);

        let oldest: Vec<&str> = journal_view(&entries, MoodBand::All, SortOrder::Oldest)
            .iter()
            .map(|entry| entry.text.as_str())
            .collect();
        assert_eq!(oldest, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn build_stats_on_empty_store_signals_no_data() {
        let stats = build_stats(&[], 0);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.average_mood, None);
        assert_eq!(stats.average_word_count, None);
        assert!(stats.mood_trend.is_empty());
        assert_eq!(stats.mood_by_weekday.len(), 7);
        assert!(stats.word_frequencies.is_empty());
    }
}
