//! Browser networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` adapts `gloo-net` to the session layer's `Transport` seam.
//! [`Api`] bundles the authenticated client with its configuration and is
//! provided once as context by the root component.

pub mod transport;

use session::{AuthedClient, ClientConfig};

use self::transport::BrowserTransport;

pub type ApiClient = AuthedClient<BrowserTransport>;

/// Everything an event handler needs to run a session action.
#[derive(Clone, Debug)]
pub struct Api {
    pub client: ApiClient,
    pub config: ClientConfig,
}

impl Api {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let client = AuthedClient::new(BrowserTransport::new(config.base_url.clone()), &config);
        Self { client, config }
    }
}
