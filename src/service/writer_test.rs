// Tests for the writer thread
//
// Test cases:
// - Persist requests reach the store in order
// - An ack channel reports a successful save
// - A failed save is reported to the ack channel
// - The writer exits when the request channel closes

use super::*;
use async_trait::async_trait;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

/// Backend that records every snapshot it is asked to save
#[derive(Default)]
struct RecordingBackend {
    saves: Mutex<Vec<AliasTable>>,
    fail: bool,
}

#[async_trait]
impl AliasStoreBackend for RecordingBackend {
    async fn load(&self) -> AliasTable {
        AliasTable::new()
    }

    async fn save(&self, table: &AliasTable) -> Result<(), StoreError> {
        self.saves.lock().unwrap().push(table.clone());
        if self.fail {
            return Err(StoreError::Write("disk full".to_string()));
        }
        Ok(())
    }
}

fn make_table(name: &str) -> AliasTable {
    let mut table = AliasTable::new();
    table.define(name, vec!["echo".to_string()]).unwrap();
    table
}

#[test]
fn test_persist_requests_reach_the_store_in_order() {
    let backend = Arc::new(RecordingBackend::default());
    let (tx, rx) = mpsc::channel();
    let store = backend.clone() as Arc<dyn AliasStoreBackend>;
    let writer = thread::spawn(move || writer_main(rx, store));

    tx.send(WriteRequest::Persist {
        snapshot: make_table("first"),
        ack: None,
    })
    .unwrap();
    tx.send(WriteRequest::Persist {
        snapshot: make_table("second"),
        ack: None,
    })
    .unwrap();
    drop(tx);
    writer.join().unwrap();

    let saves = backend.saves.lock().unwrap();
    assert_eq!(saves.len(), 2);
    assert!(saves[0].is_alias("first"));
    assert!(saves[1].is_alias("second"));
}

#[test]
fn test_ack_reports_a_successful_save() {
    let backend = Arc::new(RecordingBackend::default());
    let (tx, rx) = mpsc::channel();
    let store = backend.clone() as Arc<dyn AliasStoreBackend>;
    let writer = thread::spawn(move || writer_main(rx, store));

    let (ack_tx, ack_rx) = mpsc::channel();
    tx.send(WriteRequest::Persist {
        snapshot: make_table("gs"),
        ack: Some(ack_tx),
    })
    .unwrap();

    assert_eq!(ack_rx.recv().unwrap(), Ok(()));
    drop(tx);
    writer.join().unwrap();
}

#[test]
fn test_failed_save_is_reported_to_the_ack_channel() {
    let backend = Arc::new(RecordingBackend {
        saves: Mutex::new(Vec::new()),
        fail: true,
    });
    let (tx, rx) = mpsc::channel();
    let store = backend.clone() as Arc<dyn AliasStoreBackend>;
    let writer = thread::spawn(move || writer_main(rx, store));

    let (ack_tx, ack_rx) = mpsc::channel();
    tx.send(WriteRequest::Persist {
        snapshot: make_table("gs"),
        ack: Some(ack_tx),
    })
    .unwrap();

    let result = ack_rx.recv().unwrap();
    assert_eq!(result, Err(StoreError::Write("disk full".to_string())));

    drop(tx);
    writer.join().unwrap();
}

#[test]
fn test_writer_exits_when_the_channel_closes() {
    let backend = Arc::new(RecordingBackend::default());
    let (tx, rx) = mpsc::channel::<WriteRequest>();
    let store = backend as Arc<dyn AliasStoreBackend>;
    let writer = thread::spawn(move || writer_main(rx, store));

    drop(tx);
    writer.join().unwrap();
}
