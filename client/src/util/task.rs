//! Fire-and-forget async work from event handlers.

use std::future::Future;

/// Run `future` on the browser event loop.
///
/// Native builds have no event loop; the future is dropped unpolled.
pub fn spawn(future: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(future);
    #[cfg(not(feature = "csr"))]
    drop(future);
}
