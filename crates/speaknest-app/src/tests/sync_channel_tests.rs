use std::time::Duration;

use speaknest_types::{AppEvent, Difficulty};
use tokio::time::timeout;

use super::{t0, test_state};
use crate::controller::AppController;
use crate::io::request;

#[tokio::test]
async fn test_rating_button_click_with_tokio_spawn() {
    let (state, _clock) = test_state(None);
    let controller = AppController::new(state, 8);
    let _tasks = controller.spawn_tasks();

    let tx = controller.requests();
    let button_click = move |difficulty: Difficulty| {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::RateWord {
                user_id: "u1".to_string(),
                word_id: "apple".to_string(),
                difficulty,
            })
            .await
            .expect("send failed");
        });
    };

    button_click(Difficulty::Medium);

    let result = timeout(Duration::from_secs(2), controller.responses().recv()).await;

    match result {
        Ok(Ok(AppEvent::ReviewRecorded(review))) => {
            assert_eq!(review.word_id, "apple");
            assert_eq!(review.difficulty, Difficulty::Medium);
            assert_eq!(review.next_review, t0() + chrono::Duration::days(3));
        }
        Ok(Ok(other)) => panic!("Wrong event type: {other:?}"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - rating never answered!"),
    }

    controller.shutdown();
}

#[tokio::test]
async fn test_rating_from_blocking_ui_thread() {
    let (state, _clock) = test_state(None);
    let controller = AppController::new(state, 8);
    let _tasks = controller.spawn_tasks();

    let sync_tx = controller.requests().to_sync();
    let sync_rx = controller.responses().to_sync();

    let response = tokio::task::spawn_blocking(move || {
        sync_tx
            .send(AppEvent::RateWord {
                user_id: "u1".to_string(),
                word_id: "apple".to_string(),
                difficulty: Difficulty::Hard,
            })
            .expect("send failed");
        sync_rx.recv().expect("recv failed")
    });

    match timeout(Duration::from_secs(2), response).await {
        Ok(Ok(AppEvent::ReviewRecorded(review))) => {
            assert_eq!(review.term.as_deref(), Some("apple"));
            assert_eq!(review.next_review, t0() + chrono::Duration::days(1));
        }
        Ok(Ok(other)) => panic!("Wrong event type: {other:?}"),
        Ok(Err(e)) => panic!("Blocking task failed: {}", e),
        Err(_) => panic!("Timeout - blocking send never answered!"),
    }

    controller.shutdown();
}

#[tokio::test]
async fn test_many_spawned_ratings_each_answered() {
    let (state, _clock) = test_state(None);
    let controller = AppController::new(state, 8);
    let _tasks = controller.spawn_tasks();

    for i in 0..20 {
        let tx = controller.requests();
        tokio::spawn(async move {
            tx.send(AppEvent::RateWord {
                user_id: "u1".to_string(),
                word_id: format!("word{}", i),
                difficulty: Difficulty::Easy,
            })
            .await
            .expect("send failed");
        });
    }

    let responses = controller.responses();
    let mut recorded = 0;
    let result = timeout(Duration::from_secs(2), async {
        while recorded < 20 {
            match responses.recv().await.expect("recv failed") {
                AppEvent::ReviewRecorded(_) => recorded += 1,
                other => panic!("Wrong event type: {other:?}"),
            }
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for responses!");
    assert_eq!(recorded, 20);

    let board = request(
        &controller.requests(),
        &controller.responses(),
        AppEvent::ListReviews {
            user_id: "u1".to_string(),
        },
    )
    .await
    .unwrap();
    match board {
        AppEvent::ShowReviews(board) => {
            assert!(board.due.is_empty());
            assert_eq!(board.upcoming.len(), 20);
        }
        other => panic!("unexpected response: {other:?}"),
    }

    controller.shutdown();
}
