//! Concurrent access through SharedHistory.

use rewind::{HistoryConfig, HistoryEvent, SharedHistory, SubscriptionConfig};
use std::sync::Arc;
use std::thread;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_concurrent_records_are_all_kept() {
    init_tracing();
    let history = Arc::new(SharedHistory::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let history = Arc::clone(&history);
            thread::spawn(move || {
                for i in 0..100 {
                    history.record_payload(t * 1000 + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(history.len(), 800);
    assert_eq!(history.cursor(), Some(799));

    // Each writer's own entries stay in its own order
    let entries = history.entries();
    for t in 0..8 {
        let mine: Vec<i32> = entries
            .iter()
            .map(|(_, s, _)| *s.payload())
            .filter(|v| v / 1000 == t)
            .collect();
        assert_eq!(mine, (0..100).map(|i| t * 1000 + i).collect::<Vec<_>>());
    }
}

#[test]
fn test_mixed_operations_keep_cursor_consistent() {
    init_tracing();
    let history = Arc::new(SharedHistory::with_config(HistoryConfig::with_capacity(50)).unwrap());

    let handles: Vec<_> = (0..6)
        .map(|t| {
            let history = Arc::clone(&history);
            thread::spawn(move || {
                for i in 0..200 {
                    match (t + i) % 3 {
                        0 => {
                            history.record_payload(i);
                        }
                        1 => {
                            history.undo();
                        }
                        _ => {
                            history.redo();
                        }
                    }

                    history.with(|h| {
                        match h.cursor() {
                            None => assert!(h.is_empty()),
                            Some(c) => assert!(c < h.len()),
                        }
                    });
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let len = history.len();
    assert!(len > 0);
    assert!(len <= 50);
    assert!(history.cursor().unwrap() < len);
}

#[test]
fn test_subscriber_sees_every_record() {
    let history = Arc::new(SharedHistory::new());
    let handle = history.subscribe(SubscriptionConfig {
        buffer_size: 1024,
        ..Default::default()
    });

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let history = Arc::clone(&history);
            thread::spawn(move || {
                for i in 0..50 {
                    history.record_payload(t * 100 + i);
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }

    let indexes: Vec<usize> = handle
        .receiver
        .try_iter()
        .map(|event| match event {
            HistoryEvent::Recorded { index, .. } => index,
            other => panic!("Unexpected event {:?}", other),
        })
        .collect();

    // Published under the lock, so indexes arrive in order
    assert_eq!(indexes, (0..200).collect::<Vec<_>>());
}
