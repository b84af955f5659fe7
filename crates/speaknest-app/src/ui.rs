use std::fmt::Write;

use chrono::{DateTime, Utc};
use speaknest_types::{AppEvent, DisplayReview};

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn word_label(review: &DisplayReview) -> String {
    match (&review.term, &review.translation) {
        (Some(term), Some(translation)) => format!("{term} ({translation})"),
        (Some(term), None) => term.clone(),
        _ => review.word_id.clone(),
    }
}

fn review_line(review: &DisplayReview) -> String {
    format!(
        "  {:<28} {:<6} {} (reviews: {})",
        word_label(review),
        review.difficulty,
        format_time(review.next_review),
        review.review_count
    )
}

/// Text shown to the user for a response event
pub fn render(event: &AppEvent) -> String {
    let mut out = String::new();

    match event {
        AppEvent::ReviewRecorded(review) => {
            let _ = write!(
                out,
                "Rated {} as {}, next review {}",
                word_label(review),
                review.difficulty,
                format_time(review.next_review)
            );
        }
        AppEvent::ShowReviews(board) => {
            if board.due.is_empty() && board.upcoming.is_empty() {
                let _ = write!(out, "No reviews yet for {}", board.user_id);
                return out;
            }

            let _ = writeln!(out, "Due ({}):", board.due.len());
            for review in &board.due {
                let _ = writeln!(out, "{}", review_line(review));
            }
            let _ = writeln!(out, "Upcoming ({}):", board.upcoming.len());
            for review in &board.upcoming {
                let _ = writeln!(out, "{}", review_line(review));
            }
        }
        AppEvent::ShowPreview(previews) => {
            for preview in previews {
                let _ = writeln!(
                    out,
                    "{:<6} -> {:<3} ({})",
                    preview.difficulty,
                    preview.label,
                    format_time(preview.next_review)
                );
            }
        }
        AppEvent::ShowGroups(groups) => {
            if groups.is_empty() {
                let _ = write!(out, "No word groups");
            }
            for group in groups {
                let _ = writeln!(
                    out,
                    "{:<12} {:<4} {} ({} words)",
                    group.id, group.level, group.title, group.word_count
                );
            }
        }
        AppEvent::ShowWords { group, words } => {
            let _ = writeln!(out, "{} [{}]:", group.title, group.level);
            for word in words {
                let _ = writeln!(out, "  {:<16} {:<16} {}", word.english, word.turkish, word.example);
            }
        }
        AppEvent::MeetingReady(meeting) => {
            let _ = writeln!(out, "Meeting {}: {}", meeting.id, meeting.topic);
            if let Some(start) = meeting.start_time {
                let _ = writeln!(out, "  starts: {}", format_time(start));
            }
            let _ = write!(out, "  join:   {}", meeting.join_url);
        }
        AppEvent::Error(message) => {
            let _ = write!(out, "error: {message}");
        }
        other => {
            let _ = write!(out, "{other:?}");
        }
    }

    out.trim_end().to_string()
}
