use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Learner's self-assessment of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid difficulty '{0}', expected one of: easy, medium, hard")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// How `review_count` changes when a word is rated again
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewCountPolicy {
    /// Every rating stores a count of 1
    #[default]
    Reset,
    /// Every rating adds one to the stored count
    Increment,
}

impl ReviewCountPolicy {
    pub fn next_count(&self, previous: Option<u32>) -> u32 {
        match (self, previous) {
            (ReviewCountPolicy::Reset, _) | (ReviewCountPolicy::Increment, None) => 1,
            (ReviewCountPolicy::Increment, Some(count)) => count.saturating_add(1),
        }
    }
}

impl FromStr for ReviewCountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" => Ok(ReviewCountPolicy::Reset),
            "increment" => Ok(ReviewCountPolicy::Increment),
            other => Err(format!("unknown review count policy '{other}'")),
        }
    }
}

/// Review progress of one learner on one word.
///
/// Identified by the `(user_id, word_id)` pair; a later rating replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    pub user_id: String,
    pub word_id: String,
    pub difficulty: Difficulty,
    pub last_reviewed: DateTime<Utc>,
    pub next_review: DateTime<Utc>,
    pub review_count: u32,
}

impl ReviewState {
    /// Key of the record in the `wordLearningStatus` collection
    pub fn key(&self) -> String {
        review_key(&self.user_id, &self.word_id)
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }
}

/// Joins user and word ids in store keys; user ids may not contain it
pub const KEY_SEPARATOR: char = '_';

pub fn review_key(user_id: &str, word_id: &str) -> String {
    format!("{user_id}{KEY_SEPARATOR}{word_id}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordGroup {
    pub id: String,
    pub title: String,
    pub level: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    pub group_id: String,
    pub english: String,
    pub turkish: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // Requests
    RateWord {
        user_id: String,
        word_id: String,
        difficulty: Difficulty,
    },
    ListReviews {
        user_id: String,
    },
    RefreshReviews {
        user_id: String,
    },
    PreviewIntervals,
    ListGroups {
        level: Option<String>,
    },
    ListWords {
        group_id: String,
    },
    CreateMeeting(MeetingDraft),
    GetMeeting(u64),
    Shutdown,

    // Responses
    ReviewRecorded(DisplayReview),
    ShowReviews(ReviewBoard),
    ShowPreview(Vec<IntervalPreview>),
    ShowGroups(Vec<WordGroup>),
    ShowWords {
        group: WordGroup,
        words: Vec<Word>,
    },
    MeetingReady(MeetingInfo),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayReview {
    pub word_id: String,
    pub term: Option<String>,
    pub translation: Option<String>,
    pub difficulty: Difficulty,
    pub next_review: DateTime<Utc>,
    pub review_count: u32,
    pub due: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewBoard {
    pub user_id: String,
    pub due: Vec<DisplayReview>,
    pub upcoming: Vec<DisplayReview>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalPreview {
    pub difficulty: Difficulty,
    pub next_review: DateTime<Utc>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingDraft {
    pub topic: String,
    pub start_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingInfo {
    pub id: u64,
    pub topic: String,
    pub join_url: String,
    pub start_time: Option<DateTime<Utc>>,
}
