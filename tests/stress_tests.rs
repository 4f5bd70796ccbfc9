//! Stress tests for serialized emission under concurrency
//!
//! These tests verify:
//! - Concurrent emissions produce complete, non-interleaved log lines
//! - Mixed message categories stay well-formed under contention
//! - The manual lock guard serializes host terminal writes without deadlock

use message_logger::core::logger::Logger;
use message_logger::core::sink::LogFileMode;
use message_logger::core::{Color, ResetTarget};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREAD_COUNT: usize = 4;
const MESSAGES_PER_THREAD: usize = 25;

/// Every thread's full output must land in the file as complete lines:
/// no line may be a fragment of two concurrent emissions.
#[test]
fn test_concurrent_emissions_are_not_interleaved() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let logger = Arc::new(Logger::with_terminal(io::sink()));
    logger.enable_thread_safety().expect("enable safety");
    logger
        .configure_log_file(&log_file, LogFileMode::Write)
        .expect("Failed to configure log file");

    let mut handles = Vec::new();
    for thread_id in 1..=THREAD_COUNT {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            let context = format!("Thread {}", thread_id);
            for message_number in 1..=MESSAGES_PER_THREAD {
                logger.success(
                    Some(&context),
                    format!("Message number {}!\n", message_number),
                );
            }
        }));
    }
    for handle in handles {
        handle.join().expect("thread panicked");
    }
    logger.clean_up();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREAD_COUNT * MESSAGES_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let rest = line
            .strip_prefix('[')
            .and_then(|line| line.split_once("] "))
            .map(|(_, rest)| rest)
            .unwrap_or_else(|| panic!("malformed line: {:?}", line));
        assert!(seen.insert(rest.to_string()), "duplicate line: {:?}", rest);
    }

    let mut expected = HashSet::new();
    for thread_id in 1..=THREAD_COUNT {
        for message_number in 1..=MESSAGES_PER_THREAD {
            expected.insert(format!(
                "Thread {}: (Success) Message number {}!",
                thread_id, message_number
            ));
        }
    }
    assert_eq!(seen, expected);
}

/// Cycling through every category under contention must still produce
/// exactly one well-formed plain-text line per emission.
#[test]
fn test_concurrent_mixed_categories_stay_well_formed() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("mixed.log");

    let logger = Arc::new(Logger::with_terminal(io::sink()));
    logger.enable_thread_safety().expect("enable safety");
    logger
        .configure_log_file(&log_file, LogFileMode::Write)
        .expect("Failed to configure log file");

    let mut handles = Vec::new();
    for thread_id in 1..=THREAD_COUNT {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            let context = format!("Thread {}", thread_id);
            for message_number in 1..=MESSAGES_PER_THREAD {
                let body = format!("Message number {}!\n", message_number);
                match message_number % 5 {
                    0 => logger.message(Some(&context), &body),
                    1 => logger.error(Some(&context), &body),
                    2 => logger.info(Some(&context), &body),
                    3 => logger.success(Some(&context), &body),
                    _ => logger.warning(Some(&context), &body),
                }
            }
        }));
    }
    for handle in handles {
        handle.join().expect("thread panicked");
    }
    logger.clean_up();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(!content.contains('\x1B'), "file mirror must be plain text");

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREAD_COUNT * MESSAGES_PER_THREAD);
    for line in &lines {
        let rest = line
            .strip_prefix('[')
            .and_then(|line| line.split_once("] "))
            .map(|(_, rest)| rest)
            .unwrap_or_else(|| panic!("malformed line: {:?}", line));
        assert!(rest.starts_with("Thread "), "malformed line: {:?}", line);
        assert!(rest.ends_with('!'), "truncated line: {:?}", line);
    }
}

/// Hosts holding the manual lock guard while painting must neither
/// deadlock nor prevent other threads from finishing their emissions.
#[test]
fn test_manual_lock_guard_under_contention() {
    let logger = Arc::new(Logger::with_terminal(io::sink()));
    logger.enable_thread_safety().expect("enable safety");

    let mut handles = Vec::new();
    for thread_id in 1..=THREAD_COUNT {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            let context = format!("Thread {}", thread_id);
            for round in 0..MESSAGES_PER_THREAD {
                if round % 2 == 0 {
                    let mut guard = logger.lock();
                    assert!(guard.is_locked());
                    guard.paint_text(Color::Blue);
                    guard.paint_background(Color::BrightGreen);
                    guard.reset(ResetTarget::All);
                } else {
                    logger.info(Some(&context), "between guarded writes\n");
                }
            }
        }));
    }
    for handle in handles {
        handle.join().expect("thread panicked");
    }
    logger.clean_up();
}
