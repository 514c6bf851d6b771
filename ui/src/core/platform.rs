//! Platform glue for spawning UI-bound futures.

use std::future::Future;

/// Spawn a future on the UI task queue. Callers hold non-`Send` state
/// (signals, channel senders), so this never goes through a threaded
/// executor.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
