// tests/end_to_end.rs

//! Full-stack save reactions: real filesystem, real processes, mock host.

use std::fs;

use tempfile::tempdir;

use onsave::engine::{SaveEvent, handle_save};
use onsave::exec::ProcessExecutor;
use onsave::fs::RealFileSystem;

use onsave_test_utils::builders::ConfigFileBuilder;
use onsave_test_utils::init_tracing;
use onsave_test_utils::mock_host::MockHost;

#[tokio::test]
async fn command_that_rewrites_the_file_triggers_a_reload() {
    init_tracing();

    let dir = tempdir().unwrap();
    let file = dir.path().join("note.txt");
    fs::write(&file, "hello\n").unwrap();

    // `touch -t` pins the mtime to a fixed past instant, so it always
    // differs from the just-saved timestamp.
    let config = ConfigFileBuilder::new()
        .with_rule(
            &dir.path().to_string_lossy(),
            &["touch -t 202001010000 _file_"],
        )
        .build();

    let fs = RealFileSystem;
    let mut executor = ProcessExecutor::new();
    let mut host = MockHost::new();
    let event = SaveEvent::new(&file);

    let report = handle_save(&event, Some(&config), &fs, &mut executor, &mut host)
        .await
        .unwrap();

    assert!(report.failures.is_empty(), "failures: {:?}", report.failures);
    assert!(report.reload_requested);
    assert_eq!(host.reload_requests, 1);
}

#[tokio::test]
async fn read_only_command_does_not_trigger_a_reload() {
    init_tracing();

    let dir = tempdir().unwrap();
    let file = dir.path().join("note.txt");
    fs::write(&file, "hello\n").unwrap();

    let config = ConfigFileBuilder::new()
        .with_rule(&dir.path().to_string_lossy(), &["cat _file_"])
        .build();

    let fs = RealFileSystem;
    let mut executor = ProcessExecutor::new();
    let mut host = MockHost::new();
    let event = SaveEvent::new(&file);

    let report = handle_save(&event, Some(&config), &fs, &mut executor, &mut host)
        .await
        .unwrap();

    assert!(report.failures.is_empty());
    assert!(!report.reload_requested);
    assert_eq!(host.reload_requests, 0);
}

#[tokio::test]
async fn dirty_buffer_keeps_a_rewritten_file_unloaded() {
    init_tracing();

    let dir = tempdir().unwrap();
    let file = dir.path().join("note.txt");
    fs::write(&file, "hello\n").unwrap();

    let config = ConfigFileBuilder::new()
        .with_rule(
            &dir.path().to_string_lossy(),
            &["touch -t 202001010000 _file_"],
        )
        .build();

    let fs = RealFileSystem;
    let mut executor = ProcessExecutor::new();
    let mut host = MockHost::dirty();
    let event = SaveEvent::new(&file);

    let report = handle_save(&event, Some(&config), &fs, &mut executor, &mut host)
        .await
        .unwrap();

    assert!(!report.reload_requested);
    assert_eq!(host.reload_requests, 0);
}

#[tokio::test]
async fn failing_command_is_reported_and_later_command_still_reloads() {
    init_tracing();

    let dir = tempdir().unwrap();
    let file = dir.path().join("note.txt");
    fs::write(&file, "hello\n").unwrap();

    let config = ConfigFileBuilder::new()
        .with_rule(
            &dir.path().to_string_lossy(),
            &[
                "cat /definitely/not/a/real/path",
                "touch -t 202001010000 _file_",
            ],
        )
        .build();

    let fs = RealFileSystem;
    let mut executor = ProcessExecutor::new();
    let mut host = MockHost::new();
    let event = SaveEvent::new(&file);

    let report = handle_save(&event, Some(&config), &fs, &mut executor, &mut host)
        .await
        .unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(host.diagnostics.len(), 1);
    assert!(report.reload_requested);
    assert_eq!(host.reload_requests, 1);
    assert!(host.status.is_some());
}
