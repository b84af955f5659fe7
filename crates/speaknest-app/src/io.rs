use kanal::{AsyncReceiver, AsyncSender};
use speaknest_types::{AppEvent, Difficulty};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::ui::render;

const SESSION_HELP: &str =
    "commands: rate <word> <easy|medium|hard>, list, refresh, preview, groups [level], words <group>, help, quit";

/// Map one session line to a request for `user_id`.
///
/// `Ok(None)` for blank lines and help; `Err` carries a message for the user.
pub fn parse_session_line(line: &str, user_id: &str) -> Result<Option<AppEvent>, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "rate" => {
            let (Some(word), Some(difficulty), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err("usage: rate <word> <easy|medium|hard>".to_string());
            };
            let difficulty: Difficulty = difficulty.parse().map_err(|e| format!("{e}"))?;
            AppEvent::RateWord {
                user_id: user_id.to_string(),
                word_id: word.to_string(),
                difficulty,
            }
        }
        "list" => AppEvent::ListReviews {
            user_id: user_id.to_string(),
        },
        "refresh" => AppEvent::RefreshReviews {
            user_id: user_id.to_string(),
        },
        "preview" => AppEvent::PreviewIntervals,
        "groups" => AppEvent::ListGroups {
            level: parts.next().map(str::to_string),
        },
        "words" => {
            let Some(group) = parts.next() else {
                return Err("usage: words <group>".to_string());
            };
            AppEvent::ListWords {
                group_id: group.to_string(),
            }
        }
        "quit" | "exit" => AppEvent::Shutdown,
        "help" => return Ok(None),
        other => return Err(format!("unknown command '{other}'; {SESSION_HELP}")),
    };

    Ok(Some(event))
}

/// Send one request and wait for its response
pub async fn request(
    requests: &AsyncSender<AppEvent>,
    responses: &AsyncReceiver<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<AppEvent> {
    requests.send(event).await?;
    Ok(responses.recv().await?)
}

/// Line-oriented review session on stdin/stdout
pub async fn run_session(
    user_id: String,
    requests: AsyncSender<AppEvent>,
    responses: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("Review session for {user_id}. {SESSION_HELP}\n").as_bytes())
        .await?;

    // Start with the learner's board, like opening the review page
    let board = request(
        &requests,
        &responses,
        AppEvent::ListReviews {
            user_id: user_id.clone(),
        },
    )
    .await?;
    stdout.write_all(format!("{}\n", render(&board)).as_bytes()).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let event = match parse_session_line(&line, &user_id) {
            Ok(Some(AppEvent::Shutdown)) => break,
            Ok(Some(event)) => event,
            Ok(None) => {
                if line.trim().eq_ignore_ascii_case("help") {
                    stdout.write_all(format!("{SESSION_HELP}\n").as_bytes()).await?;
                }
                continue;
            }
            Err(message) => {
                stdout.write_all(format!("{message}\n").as_bytes()).await?;
                continue;
            }
        };

        let response = request(&requests, &responses, event).await?;
        stdout.write_all(format!("{}\n", render(&response)).as_bytes()).await?;
    }

    tracing::info!("Review session for {} ended", user_id);
    Ok(())
}
