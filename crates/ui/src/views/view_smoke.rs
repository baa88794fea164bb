use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use learn_core::model::LessonId;
use services::PROGRESS_STORAGE_KEY;
use storage::repository::{InMemoryStore, KeyValueStore};

use crate::context::PageLayout;
use crate::views::{LESSON_PULSE_DURATION, PULSE_DURATION, TrackerIntent};
use crate::vm::NOTICE_DURATION;

use super::test_harness::{ViewKind, setup_view_harness};

fn checkbox_count(html: &str) -> usize {
    html.matches("role=\"checkbox\"").count()
}

fn checked_count(html: &str) -> usize {
    html.matches("aria-checked=\"true\"").count()
}

async fn store_with(record: &str) -> Arc<dyn KeyValueStore> {
    let store = InMemoryStore::new();
    store
        .set_item(PROGRESS_STORAGE_KEY, record)
        .await
        .expect("seed progress");
    Arc::new(store)
}

async fn stored_record(store: &Arc<dyn KeyValueStore>) -> Option<String> {
    store
        .get_item(PROGRESS_STORAGE_KEY)
        .await
        .expect("read progress")
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_renders_one_checkbox_per_lesson() {
    let mut harness = setup_view_harness(
        ViewKind::Course,
        Arc::new(InMemoryStore::new()),
        PageLayout::default(),
        PathBuf::from("."),
    )
    .await;

    let html = harness.render();
    assert_eq!(checkbox_count(&html), 6, "{html}");
    assert_eq!(checked_count(&html), 0, "{html}");
    assert!(html.contains("data-lesson-id=\"week-2-lesson-3\""), "{html}");
    assert!(html.contains("<strong>here</strong>"), "{html}");
    assert!(html.contains("Foundations"), "{html}");

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(1, 1)));
    harness.drive_async().await;
    let html = harness.render();
    assert_eq!(checkbox_count(&html), 6, "re-render duplicated checkboxes: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn persisted_lessons_render_checked() {
    let store = store_with(r#"{"week-1-lesson-2":true,"week-2-lesson-1":false}"#).await;
    let harness =
        setup_view_harness(ViewKind::Course, store, PageLayout::default(), PathBuf::from("."))
            .await;

    let html = harness.render();
    assert_eq!(checked_count(&html), 1, "{html}");
    assert_eq!(html.matches("lesson-card completed").count(), 1, "{html}");
    assert_eq!(html.matches("lesson-checkbox checked").count(), 1, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn toggle_updates_view_and_persists() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let mut harness = setup_view_harness(
        ViewKind::Course,
        Arc::clone(&store),
        PageLayout::default(),
        PathBuf::from("."),
    )
    .await;

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(1, 1)));
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(checked_count(&html), 1, "{html}");
    assert!(html.contains("Lesson marked as complete"), "{html}");
    assert_eq!(
        stored_record(&store).await.as_deref(),
        Some(r#"{"week-1-lesson-1":true}"#)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn double_toggle_restores_unchecked_state() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let mut harness = setup_view_harness(
        ViewKind::Course,
        Arc::clone(&store),
        PageLayout::default(),
        PathBuf::from("."),
    )
    .await;

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(2, 2)));
    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(2, 2)));
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(checked_count(&html), 0, "{html}");
    assert!(html.contains("Lesson marked as incomplete"), "{html}");
    assert_eq!(
        stored_record(&store).await.as_deref(),
        Some(r#"{"week-2-lesson-2":false}"#)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_renders_aggregates() {
    let store = store_with(r#"{"week-1-lesson-1":true,"week-2-lesson-3":true}"#).await;
    let harness =
        setup_view_harness(ViewKind::Progress, store, PageLayout::default(), PathBuf::from("."))
            .await;

    let html = harness.render();
    assert!(html.contains("2 of 6 lessons completed"), "{html}");
    assert!(html.contains("33%"), "{html}");
    assert!(html.contains("width: 33%"), "{html}");
    assert_eq!(html.matches("1/3").count(), 2, "{html}");
    assert!(html.contains("id=\"reset-progress\""), "{html}");
    assert!(html.contains("id=\"export-progress\""), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hidden_displays_are_skipped() {
    let layout = PageLayout {
        progress_bar: false,
        percentage_text: false,
        week_progress: false,
        export_action: false,
        ..PageLayout::default()
    };
    let mut harness = setup_view_harness(
        ViewKind::Progress,
        Arc::new(InMemoryStore::new()),
        layout,
        PathBuf::from("."),
    )
    .await;

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(1, 3)));
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("id=\"progress-bar\""), "{html}");
    assert!(!html.contains("id=\"percentage-text\""), "{html}");
    assert!(!html.contains("id=\"export-progress\""), "{html}");
    assert!(!html.contains("week-breakdown"), "{html}");
    assert!(html.contains("1 of 6 lessons completed"), "{html}");
    assert!(html.contains("id=\"completed-count\""), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_requires_confirmation() {
    let store = store_with(r#"{"week-1-lesson-1":true,"week-2-lesson-3":true}"#).await;
    let mut harness = setup_view_harness(
        ViewKind::Progress,
        Arc::clone(&store),
        PageLayout::default(),
        PathBuf::from("."),
    )
    .await;

    harness.dispatch(TrackerIntent::ConfirmReset);
    harness.drive_async().await;
    assert!(harness.render().contains("2 of 6 lessons completed"));

    harness.dispatch(TrackerIntent::RequestReset);
    let html = harness.render();
    assert!(
        html.contains("Are you sure you want to reset all progress? This cannot be undone."),
        "{html}"
    );

    harness.dispatch(TrackerIntent::CancelReset);
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("Are you sure"), "{html}");
    assert!(html.contains("2 of 6 lessons completed"), "{html}");
    assert!(stored_record(&store).await.is_some_and(|raw| raw.contains("true")));

    harness.dispatch(TrackerIntent::RequestReset);
    harness.dispatch(TrackerIntent::ConfirmReset);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("0 of 6 lessons completed"), "{html}");
    assert!(html.contains("Progress reset successfully!"), "{html}");
    assert!(!html.contains("Are you sure"), "{html}");
    assert_eq!(stored_record(&store).await.as_deref(), Some("{}"));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_save_keeps_toggle_and_shows_error() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::with_quota(20));
    let mut harness = setup_view_harness(
        ViewKind::Course,
        Arc::clone(&store),
        PageLayout::default(),
        PathBuf::from("."),
    )
    .await;

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(1, 1)));
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(checked_count(&html), 1, "{html}");
    assert!(html.contains("toast toast--error"), "{html}");
    assert!(html.contains("Could not save progress"), "{html}");
    assert_eq!(stored_record(&store).await, None);
}

#[tokio::test(flavor = "current_thread")]
async fn export_writes_snapshot_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_with(r#"{"week-1-lesson-1":true}"#).await;
    let mut harness = setup_view_harness(
        ViewKind::Progress,
        store,
        PageLayout::default(),
        dir.path().to_path_buf(),
    )
    .await;

    harness.dispatch(TrackerIntent::Export);
    let html = harness
        .drive_until_rendered("Progress exported successfully!")
        .await;
    assert!(html.contains("Progress exported successfully!"), "{html}");

    let expected = dir.path().join("learn-ai-progress-2023-11-14.json");
    let written = std::fs::read_to_string(&expected).expect("export file");
    let value: serde_json::Value = serde_json::from_str(&written).expect("snapshot json");
    assert_eq!(value["completedCount"], 1);
    assert_eq!(value["totalLessons"], 6);
    assert_eq!(value["percentage"], 17);
    assert_eq!(value["progress"]["week-1-lesson-1"], true);

    let html = harness.render();
    assert!(html.contains("id=\"export-path\""), "{html}");
    assert!(html.contains("learn-ai-progress-2023-11-14.json"), "{html}");
}

const TICK: Duration = Duration::from_millis(10);

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn notice_dismisses_itself() {
    let mut harness = setup_view_harness(
        ViewKind::Course,
        Arc::new(InMemoryStore::new()),
        PageLayout::default(),
        PathBuf::from("."),
    )
    .await;

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(1, 1)));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Lesson marked as complete"), "{html}");

    harness.advance(NOTICE_DURATION - TICK).await;
    assert!(harness.render().contains("toast toast--info"));

    harness.advance(TICK * 2).await;
    let html = harness.render();
    assert!(!html.contains("toast"), "notice outlived its timer: {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn newer_notice_survives_the_older_timer() {
    let mut harness = setup_view_harness(
        ViewKind::Course,
        Arc::new(InMemoryStore::new()),
        PageLayout::default(),
        PathBuf::from("."),
    )
    .await;

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(1, 1)));
    harness.settle().await;
    harness.advance(Duration::from_secs(2)).await;

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(1, 1)));
    harness.settle().await;
    harness.advance(Duration::from_millis(1500)).await;

    let html = harness.render();
    assert!(html.contains("Lesson marked as incomplete"), "{html}");
    assert!(!html.contains("Lesson marked as complete<"), "{html}");

    harness.advance(Duration::from_secs(2)).await;
    let html = harness.render();
    assert!(!html.contains("toast"), "{html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn progress_bar_pulse_wears_off() {
    let mut harness = setup_view_harness(
        ViewKind::Progress,
        Arc::new(InMemoryStore::new()),
        PageLayout::default(),
        PathBuf::from("."),
    )
    .await;

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(1, 2)));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("scaleY(1.2)"), "{html}");

    harness.advance(PULSE_DURATION + TICK).await;
    let html = harness.render();
    assert!(!html.contains("scaleY(1.2)"), "{html}");
    assert!(html.contains("scaleY(1)"), "{html}");
    assert!(html.contains("width: 17%"), "{html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn toggled_checkbox_pulses_briefly() {
    let mut harness = setup_view_harness(
        ViewKind::Course,
        Arc::new(InMemoryStore::new()),
        PageLayout::default(),
        PathBuf::from("."),
    )
    .await;

    harness.dispatch(TrackerIntent::Toggle(LessonId::positional(2, 1)));
    harness.settle().await;
    let html = harness.render();
    assert_eq!(html.matches("lesson-checkbox checked pulse").count(), 1, "{html}");

    harness.advance(PULSE_DURATION + TICK).await;
    assert!(harness.render().contains("lesson-checkbox checked pulse"));

    harness.advance(LESSON_PULSE_DURATION - PULSE_DURATION).await;
    let html = harness.render();
    assert!(!html.contains(" pulse"), "{html}");
    assert_eq!(checked_count(&html), 1, "{html}");
}
