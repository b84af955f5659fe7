use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use speaknest_config::{Config, StoreBackend};
use speaknest_types::{AppEvent, Difficulty, MeetingDraft};

#[derive(Parser)]
#[command(name = "speaknest", version, about = "Vocabulary review scheduler and meeting helper")]
pub struct Cli {
    /// JSON profile overriding environment defaults
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Where review states are kept: memory or json
    #[arg(long, global = true)]
    pub store: Option<StoreBackend>,

    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Word catalog used to show words next to their reviews
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rate a word and schedule its next review
    Rate {
        user: String,
        word: String,
        /// easy, medium or hard
        difficulty: Difficulty,
    },
    /// Show due and upcoming reviews of a learner
    Reviews { user: String },
    /// Show when each rating would schedule the next review
    Preview,
    /// List word groups of the catalog
    Groups {
        /// Only groups of this level, e.g. A1
        #[arg(long)]
        level: Option<String>,
    },
    /// List the words of a group
    Words { group: String },
    Meeting {
        #[command(subcommand)]
        action: MeetingCommand,
    },
    /// Interactive review session for one learner
    Session { user: String },
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[derive(Subcommand)]
pub enum MeetingCommand {
    /// Create a meeting, scheduled when --start is given
    Create {
        #[arg(long)]
        topic: String,
        /// RFC 3339 start time, e.g. 2024-05-01T09:00:00Z
        #[arg(long)]
        start: Option<DateTime<Utc>>,
        /// Length in minutes
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Fetch an existing meeting by id
    Get { id: u64 },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Write the current environment defaults to a new profile file
    Init {
        path: PathBuf,
        #[arg(long, default_value = "main")]
        name: String,
    },
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(store) = self.store {
            config.store.backend = store;
        }
        if let Some(data_dir) = &self.data_dir {
            config.store.data_dir = data_dir.clone();
        }
        if let Some(catalog) = &self.catalog {
            config.catalog_path = Some(catalog.clone());
        }
    }
}

impl Command {
    /// The single request a one-shot command maps to
    pub fn to_event(&self) -> Option<AppEvent> {
        match self {
            Command::Rate {
                user,
                word,
                difficulty,
            } => Some(AppEvent::RateWord {
                user_id: user.clone(),
                word_id: word.clone(),
                difficulty: *difficulty,
            }),
            Command::Reviews { user } => Some(AppEvent::RefreshReviews {
                user_id: user.clone(),
            }),
            Command::Preview => Some(AppEvent::PreviewIntervals),
            Command::Groups { level } => Some(AppEvent::ListGroups {
                level: level.clone(),
            }),
            Command::Words { group } => Some(AppEvent::ListWords {
                group_id: group.clone(),
            }),
            Command::Meeting {
                action:
                    MeetingCommand::Create {
                        topic,
                        start,
                        duration,
                    },
            } => Some(AppEvent::CreateMeeting(MeetingDraft {
                topic: topic.clone(),
                start_time: *start,
                duration_minutes: *duration,
            })),
            Command::Meeting {
                action: MeetingCommand::Get { id },
            } => Some(AppEvent::GetMeeting(*id)),
            Command::Session { .. } | Command::Profile { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_command() {
        let cli = Cli::try_parse_from(["speaknest", "rate", "u1", "apple", "hard"]).unwrap();
        match cli.command.to_event() {
            Some(AppEvent::RateWord {
                user_id,
                word_id,
                difficulty,
            }) => {
                assert_eq!(user_id, "u1");
                assert_eq!(word_id, "apple");
                assert_eq!(difficulty, Difficulty::Hard);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_bad_difficulty_rejected() {
        assert!(Cli::try_parse_from(["speaknest", "rate", "u1", "apple", "trivial"]).is_err());
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from([
            "speaknest",
            "reviews",
            "u1",
            "--store",
            "memory",
            "--data-dir",
            "/tmp/sn",
        ])
        .unwrap();

        let mut config = Config::new();
        cli.apply_overrides(&mut config);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.data_dir, PathBuf::from("/tmp/sn"));
    }

    #[test]
    fn test_meeting_create() {
        let cli = Cli::try_parse_from([
            "speaknest",
            "meeting",
            "create",
            "--topic",
            "Speaking club",
            "--start",
            "2024-05-01T09:00:00Z",
        ])
        .unwrap();

        match cli.command.to_event() {
            Some(AppEvent::CreateMeeting(draft)) => {
                assert_eq!(draft.topic, "Speaking club");
                assert!(draft.start_time.is_some());
                assert_eq!(draft.duration_minutes, None);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_catalog_commands() {
        let cli = Cli::try_parse_from(["speaknest", "groups", "--level", "A1"]).unwrap();
        assert!(matches!(
            cli.command.to_event(),
            Some(AppEvent::ListGroups { level: Some(level) }) if level == "A1"
        ));

        let cli = Cli::try_parse_from(["speaknest", "words", "fruits"]).unwrap();
        assert!(matches!(
            cli.command.to_event(),
            Some(AppEvent::ListWords { group_id }) if group_id == "fruits"
        ));
    }
}
