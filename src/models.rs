use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const CATEGORIES: [&str; 10] = [
    "Family",
    "Friends",
    "Health",
    "Nature",
    "Work",
    "Learning",
    "Hobbies",
    "Food",
    "Random Acts",
    "Personal Growth",
];

#[derive(Debug, Clone)]
pub struct GratitudeEntry {
    pub timestamp: DateTime<Local>,
    pub text: String,
    pub mood: u8,
    pub tags: Vec<String>,
    pub word_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
    pub mood: u8,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntryResponse {
    pub timestamp: String,
    pub date: String,
    pub text: String,
    pub mood: u8,
    pub tags: Vec<String>,
    pub word_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub entry: EntryResponse,
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StreakResponse {
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodPoint {
    pub timestamp: String,
    pub mood: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekdayMood {
    pub weekday: String,
    pub average_mood: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_entries: usize,
    pub average_mood: Option<f64>,
    pub average_word_count: Option<f64>,
    pub current_streak: u32,
    pub mood_trend: Vec<MoodPoint>,
    pub mood_by_weekday: Vec<WeekdayMood>,
    pub word_frequencies: Vec<WordCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodBand {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl MoodBand {
    pub fn matches(self, mood: u8) -> bool {
        match self {
            MoodBand::All => true,
            MoodBand::High => mood >= 8,
            MoodBand::Medium => (4..=7).contains(&mood),
            MoodBand::Low => mood <= 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JournalQuery {
    pub mood: MoodBand,
    pub sort: SortOrder,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JournalResponse {
    pub entries: Vec<EntryResponse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Gold,
    Silver,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub description: String,
    pub tier: Tier,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MilestoneProgress {
    pub current: u64,
    pub target: u64,
    pub fraction: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AchievementsResponse {
    pub badges: Vec<Badge>,
    pub streak_progress: MilestoneProgress,
    pub entries_progress: MilestoneProgress,
}
