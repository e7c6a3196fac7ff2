use crate::models::{AchievementsResponse, Badge, GratitudeEntry, MilestoneProgress, Tier};
use crate::stats::{average_mood, average_word_count};

const STREAK_TARGET: u64 = 7;
const ENTRIES_TARGET: u64 = 10;

pub fn build_achievements(entries: &[GratitudeEntry], streak: u32) -> AchievementsResponse {
    AchievementsResponse {
        badges: evaluate(entries, streak),
        streak_progress: progress_toward(u64::from(streak), STREAK_TARGET),
        entries_progress: progress_toward(entries.len() as u64, ENTRIES_TARGET),
    }
}

/// Re-derived fresh from current data on every call; nothing is persisted
/// as earned. The streak and entry-count pairs are else-if so the gold
/// tier suppresses the silver one.
pub fn evaluate(entries: &[GratitudeEntry], streak: u32) -> Vec<Badge> {
    let mut badges = Vec::new();

    if streak >= 7 {
        badges.push(badge(
            "7-Day Streak",
            "Consistent gratitude for a week!",
            Tier::Gold,
        ));
    } else if streak >= 3 {
        badges.push(badge("3-Day Streak", "Building a great habit!", Tier::Silver));
    }

    if entries.len() >= 10 {
        badges.push(badge("10 Entries", "A decade of gratitude!", Tier::Gold));
    } else if entries.len() >= 5 {
        badges.push(badge("5 Entries", "Halfway to a decade!", Tier::Silver));
    }

    if average_mood(entries).is_some_and(|mood| mood >= 8.0) {
        badges.push(badge("Positive Vibes", "Consistently high mood!", Tier::Gold));
    }

    if average_word_count(entries).is_some_and(|words| words >= 20.0) {
        badges.push(badge("Eloquent", "Detailed gratitude entries!", Tier::Silver));
    }

    badges
}

fn badge(name: &str, description: &str, tier: Tier) -> Badge {
    Badge {
        name: name.to_string(),
        description: description.to_string(),
        tier,
    }
}

fn progress_toward(current: u64, target: u64) -> MilestoneProgress {
    MilestoneProgress {
        current,
        target,
        fraction: (current as f64 / target as f64).min(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn entries_with(count: usize, mood: u8, word_count: usize) -> Vec<GratitudeEntry> {
        (0..count)
            .map(|_| GratitudeEntry {
                timestamp: Local::now(),
                text: "placeholder".to_string(),
                mood,
                tags: Vec::new(),
                word_count,
            })
            .collect()
    }

    fn names(badges: &[Badge]) -> Vec<&str> {
        badges.iter().map(|badge| badge.name.as_str()).collect()
    }

    #[test]
    fn no_badges_on_empty_store() {
        assert!(evaluate(&[], 0).is_empty());
    }

    #[test]
    fn all_gold_thresholds_trigger_together() {
        // 10 entries averaging mood 8.5 and 25 words each, streak 7.
        let mut entries = entries_with(5, 8, 25);
        entries.extend(entries_with(5, 9, 25));
        let badges = evaluate(&entries, 7);

        let got = names(&badges);
        assert_eq!(
            got,
            vec!["7-Day Streak", "10 Entries", "Positive Vibes", "Eloquent"]
        );
        assert!(!got.contains(&"3-Day Streak"));
        assert!(!got.contains(&"5 Entries"));

        assert_eq!(badges[0].tier, Tier::Gold);
        assert_eq!(badges[1].tier, Tier::Gold);
        assert_eq!(badges[2].tier, Tier::Gold);
        assert_eq!(badges[3].tier, Tier::Silver);
    }

    #[test]
    fn silver_tiers_cover_the_middle_ranges() {
        let entries = entries_with(5, 5, 10);
        let badges = evaluate(&entries, 3);
        assert_eq!(names(&badges), vec!["3-Day Streak", "5 Entries"]);
        assert!(badges.iter().all(|badge| badge.tier == Tier::Silver));
    }

    #[test]
    fn streak_below_three_earns_no_streak_badge() {
        let entries = entries_with(1, 9, 30);
        let badges = evaluate(&entries, 2);
        assert_eq!(names(&badges), vec!["Positive Vibes", "Eloquent"]);
    }

    #[test]
    fn progress_fraction_caps_at_one() {
        let response = build_achievements(&entries_with(12, 6, 5), 9);
        assert_eq!(response.streak_progress.current, 9);
        assert_eq!(response.streak_progress.target, 7);
        assert_eq!(response.streak_progress.fraction, 1.0);
        assert_eq!(response.entries_progress.current, 12);
        assert_eq!(response.entries_progress.fraction, 1.0);
    }
}
