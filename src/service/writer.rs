// Writer thread - persists alias table snapshots off the service thread
//
// Snapshots are applied in arrival order, so the file on disk always ends
// up reflecting the most recent mutation.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use crate::alias::AliasTable;
use crate::store::{AliasStoreBackend, StoreError};
use crate::util::run_async;

/// Requests sent to the writer thread
pub(super) enum WriteRequest {
    /// Persist a snapshot of the table
    ///
    /// Background saves leave `ack` empty; a flush supplies a channel to
    /// learn how its save went.
    Persist {
        snapshot: AliasTable,
        ack: Option<Sender<Result<(), StoreError>>>,
    },
}

/// Main loop for the writer thread
///
/// Exits when the service thread drops its sender, after draining any
/// queued snapshots.
pub(super) fn writer_main(receiver: Receiver<WriteRequest>, store: Arc<dyn AliasStoreBackend>) {
    crate::debug!("Alias writer thread started");

    loop {
        let request = match receiver.recv() {
            Ok(request) => request,
            Err(_) => break,
        };

        match request {
            WriteRequest::Persist { snapshot, ack } => {
                let result = run_async(store.save(&snapshot));
                if let Err(ref e) = result {
                    crate::warn!("Failed to persist aliases: {}", e);
                }
                // Report back to a waiting flush - ignore if it gave up
                if let Some(tx) = ack {
                    let _ = tx.send(result);
                }
            }
        }
    }

    crate::debug!("Alias writer thread exiting");
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
