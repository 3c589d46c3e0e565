// Alias service - thread-safe interface to the alias table
//
// The table lives on a dedicated service thread and is reached through
// channels; mutations hand a snapshot to a writer thread for persistence
// so callers never wait on disk I/O.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::alias::{expand, AliasError, AliasTable};
use crate::paths::{default_aliases_path, PathError, PathProvider, PathPurpose};
use crate::store::{AliasStoreBackend, JsonFileStore, StoreError};
use crate::util::run_async;

use super::writer::{writer_main, WriteRequest};

/// Configuration for starting the alias service
#[derive(Default)]
pub struct AliasServiceConfig {
    /// Explicit path to the aliases file; takes precedence over the provider
    pub path: Option<PathBuf>,
    /// Resolves the file location when no explicit path is given
    pub path_provider: Option<Arc<dyn PathProvider>>,
}

impl AliasServiceConfig {
    /// Create a config that uses the default file location
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist to the given file instead of the default location
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Resolve the file location through the given provider
    pub fn with_path_provider(mut self, provider: Arc<dyn PathProvider>) -> Self {
        self.path_provider = Some(provider);
        self
    }
}

/// Errors from alias service operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// The service thread has disconnected
    #[error("Alias service is not running")]
    Disconnected,
    /// An alias operation was rejected
    #[error(transparent)]
    Alias(#[from] AliasError),
    /// Persistence failed
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The aliases file location could not be resolved
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Commands sent to the service thread
enum AliasCommand {
    /// Define or overwrite an alias
    Define {
        name: String,
        commands: Vec<String>,
        response_tx: Sender<Result<(), AliasError>>,
    },
    /// Remove an alias by name
    Remove {
        name: String,
        response_tx: Sender<Result<(), AliasError>>,
    },
    /// Get the command list for an alias
    Get {
        name: String,
        response_tx: Sender<Option<Vec<String>>>,
    },
    /// Check whether a name is defined as an alias
    IsAlias {
        name: String,
        response_tx: Sender<bool>,
    },
    /// List all aliases sorted by name
    List {
        response_tx: Sender<Vec<(String, Vec<String>)>>,
    },
    /// Expand an alias into concrete commands
    Expand {
        name: String,
        response_tx: Sender<Result<Vec<String>, AliasError>>,
    },
    /// Number of aliases defined
    Count { response_tx: Sender<usize> },
    /// Persist the current table and report the outcome
    Flush {
        response_tx: Sender<Result<(), StoreError>>,
    },
    /// Shutdown the service thread
    Shutdown,
}

/// Handle to the alias service thread
///
/// The handle is Send + Sync and can be safely shared across threads.
/// Operations are forwarded over a channel to the dedicated service thread,
/// which owns the table. When dropped, the service is gracefully shutdown
/// after any queued saves have finished.
pub struct AliasService {
    sender: Sender<AliasCommand>,
    thread: Option<JoinHandle<()>>,
}

impl AliasService {
    /// Start the alias service
    ///
    /// Resolves the aliases file location, loads the persisted table, and
    /// spawns the service and writer threads.
    pub fn start(config: AliasServiceConfig) -> Result<Self, ServiceError> {
        let path = match (config.path, config.path_provider) {
            (Some(path), _) => path,
            (None, Some(provider)) => provider.resolve(PathPurpose::Aliases)?,
            (None, None) => default_aliases_path()?,
        };

        crate::debug!("Alias service using {:?}", path);
        Self::start_with_store(Arc::new(JsonFileStore::new(path)))
    }

    /// Start the service over a custom storage backend
    pub fn start_with_store(store: Arc<dyn AliasStoreBackend>) -> Result<Self, ServiceError> {
        let table = run_async(store.load());
        crate::info!("Alias service starting with {} aliases", table.len());

        let (write_tx, write_rx) = mpsc::channel();
        let writer_store = Arc::clone(&store);
        let writer = thread::spawn(move || {
            writer_main(write_rx, writer_store);
        });

        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || {
            service_main(receiver, table, write_tx, writer);
        });

        Ok(Self {
            sender,
            thread: Some(thread),
        })
    }

    /// Define or overwrite an alias
    ///
    /// The change is persisted in the background; use `flush` to wait for
    /// the write to land.
    #[must_use = "this returns a Result that should be handled"]
    pub fn define(&self, name: &str, commands: Vec<String>) -> Result<(), ServiceError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.sender
            .send(AliasCommand::Define {
                name: name.to_string(),
                commands,
                response_tx,
            })
            .map_err(|_| ServiceError::Disconnected)?;

        response_rx
            .recv()
            .map_err(|_| ServiceError::Disconnected)?
            .map_err(ServiceError::Alias)
    }

    /// Remove an alias by name
    #[must_use = "this returns a Result that should be handled"]
    pub fn remove(&self, name: &str) -> Result<(), ServiceError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.sender
            .send(AliasCommand::Remove {
                name: name.to_string(),
                response_tx,
            })
            .map_err(|_| ServiceError::Disconnected)?;

        response_rx
            .recv()
            .map_err(|_| ServiceError::Disconnected)?
            .map_err(ServiceError::Alias)
    }

    /// Get the command list for an alias, or None if it is not defined
    pub fn get(&self, name: &str) -> Result<Option<Vec<String>>, ServiceError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.sender
            .send(AliasCommand::Get {
                name: name.to_string(),
                response_tx,
            })
            .map_err(|_| ServiceError::Disconnected)?;

        response_rx.recv().map_err(|_| ServiceError::Disconnected)
    }

    /// Check whether a name is defined as an alias
    pub fn is_alias(&self, name: &str) -> Result<bool, ServiceError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.sender
            .send(AliasCommand::IsAlias {
                name: name.to_string(),
                response_tx,
            })
            .map_err(|_| ServiceError::Disconnected)?;

        response_rx.recv().map_err(|_| ServiceError::Disconnected)
    }

    /// List all aliases sorted by name
    pub fn list(&self) -> Result<Vec<(String, Vec<String>)>, ServiceError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.sender
            .send(AliasCommand::List { response_tx })
            .map_err(|_| ServiceError::Disconnected)?;

        response_rx.recv().map_err(|_| ServiceError::Disconnected)
    }

    /// Expand an alias into the concrete commands it stands for
    pub fn expand(&self, name: &str) -> Result<Vec<String>, ServiceError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.sender
            .send(AliasCommand::Expand {
                name: name.to_string(),
                response_tx,
            })
            .map_err(|_| ServiceError::Disconnected)?;

        response_rx
            .recv()
            .map_err(|_| ServiceError::Disconnected)?
            .map_err(ServiceError::Alias)
    }

    /// Get the number of aliases defined
    pub fn count(&self) -> Result<usize, ServiceError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.sender
            .send(AliasCommand::Count { response_tx })
            .map_err(|_| ServiceError::Disconnected)?;

        response_rx.recv().map_err(|_| ServiceError::Disconnected)
    }

    /// Persist the current table and wait for the write to finish
    ///
    /// Background saves run in queue order, so a successful flush means
    /// every earlier mutation has reached disk as well.
    #[must_use = "this returns a Result that should be handled"]
    pub fn flush(&self) -> Result<(), ServiceError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.sender
            .send(AliasCommand::Flush { response_tx })
            .map_err(|_| ServiceError::Disconnected)?;

        response_rx
            .recv()
            .map_err(|_| ServiceError::Disconnected)?
            .map_err(ServiceError::Store)
    }

    /// Shutdown the service thread without dropping the handle
    pub fn shutdown(&self) -> Result<(), ServiceError> {
        self.sender
            .send(AliasCommand::Shutdown)
            .map_err(|_| ServiceError::Disconnected)
    }
}

impl Drop for AliasService {
    /// Gracefully shutdown the service when the handle is dropped.
    ///
    /// Sends a Shutdown command and waits for the thread to exit; the
    /// service thread in turn waits for the writer to drain queued saves.
    fn drop(&mut self) {
        // Send shutdown command - ignore errors if thread already exited
        let _ = self.sender.send(AliasCommand::Shutdown);

        // Wait for thread to finish
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Main loop for the service thread
///
/// Owns the table, answers queries, applies mutations, and hands a snapshot
/// to the writer thread after each successful mutation. Replies are sent
/// before the snapshot is queued so callers never wait on persistence.
fn service_main(
    receiver: Receiver<AliasCommand>,
    mut table: AliasTable,
    write_tx: Sender<WriteRequest>,
    writer: JoinHandle<()>,
) {
    crate::info!("Alias service thread started");

    loop {
        let command = match receiver.recv() {
            Ok(cmd) => cmd,
            Err(_) => break,
        };

        match command {
            AliasCommand::Define {
                name,
                commands,
                response_tx,
            } => match table.define(&name, commands) {
                Ok(()) => {
                    crate::info!("Defined alias '{}'", name);
                    let _ = response_tx.send(Ok(()));
                    queue_persist(&write_tx, &table);
                }
                Err(e) => {
                    let _ = response_tx.send(Err(e));
                }
            },
            AliasCommand::Remove { name, response_tx } => match table.remove(&name) {
                Ok(()) => {
                    crate::info!("Removed alias '{}'", name);
                    let _ = response_tx.send(Ok(()));
                    queue_persist(&write_tx, &table);
                }
                Err(e) => {
                    let _ = response_tx.send(Err(e));
                }
            },
            AliasCommand::Get { name, response_tx } => {
                let commands = table.get(&name).map(|commands| commands.to_vec());
                let _ = response_tx.send(commands);
            }
            AliasCommand::IsAlias { name, response_tx } => {
                let _ = response_tx.send(table.is_alias(&name));
            }
            AliasCommand::List { response_tx } => {
                let mut entries: Vec<(String, Vec<String>)> = table
                    .list()
                    .into_iter()
                    .map(|(name, commands)| (name.to_string(), commands.to_vec()))
                    .collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                let _ = response_tx.send(entries);
            }
            AliasCommand::Expand { name, response_tx } => {
                let _ = response_tx.send(expand(&table, &name));
            }
            AliasCommand::Count { response_tx } => {
                let _ = response_tx.send(table.len());
            }
            AliasCommand::Flush { response_tx } => {
                crate::debug!("Flushing aliases to disk");
                // The writer acks the caller directly once the save lands
                let _ = write_tx.send(WriteRequest::Persist {
                    snapshot: table.clone(),
                    ack: Some(response_tx),
                });
            }
            AliasCommand::Shutdown => {
                crate::debug!("Received SHUTDOWN command");
                break;
            }
        }
    }

    // Stop accepting writes and wait for queued saves to finish
    drop(write_tx);
    let _ = writer.join();

    crate::info!("Alias service thread exiting");
}

/// Queue a background save of the current table
fn queue_persist(write_tx: &Sender<WriteRequest>, table: &AliasTable) {
    let request = WriteRequest::Persist {
        snapshot: table.clone(),
        ack: None,
    };
    if write_tx.send(request).is_err() {
        crate::warn!("Alias writer thread is gone, changes will not be persisted");
    }
}

#[cfg(test)]
#[path = "handle_test.rs"]
mod tests;
