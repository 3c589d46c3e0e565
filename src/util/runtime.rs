//! Tokio runtime helpers for async-to-sync bridges.
//!
//! The service and persistence writer run on plain threads but talk to the
//! async store; `run_async` lets them block on those futures whether or not
//! a Tokio runtime is available on the calling thread.

/// Block on a future from synchronous code.
///
/// Inside a running Tokio runtime this uses `block_in_place` so the worker
/// is not starved; otherwise a temporary runtime is created for the call.
///
/// # Panics
/// Panics if no runtime is available and one cannot be created.
///
/// # Example
/// ```ignore
/// use crate::util::run_async;
///
/// let table = run_async(store.load());
/// ```
pub fn run_async<F: std::future::Future>(future: F) -> F::Output {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        return tokio::task::block_in_place(|| handle.block_on(future));
    }

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    runtime.block_on(future)
}

#[cfg(test)]
#[path = "runtime_test.rs"]
mod tests;
