// src/redirect/hook.rs
use async_trait::async_trait;
use std::fmt;

/// Where an outbound connection is about to go.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub host: String,
    pub port: u16,
}

impl Address {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Connection state owned by the interception runtime, exposed to hooks.
///
/// The runtime hands this out right before it opens the upstream socket;
/// whatever destination is set when the hooks return is where it connects.
pub trait ServerConnection: Send {
    fn intended_destination(&self) -> &Address;

    fn set_destination(&mut self, address: Address);
}

/// In-memory connection intent for runtimes that track the target as a plain tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionIntent {
    address: Address,
}

impl ConnectionIntent {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            address: Address::new(host, port),
        }
    }

    pub fn into_address(self) -> Address {
        self.address
    }
}

impl ServerConnection for ConnectionIntent {
    fn intended_destination(&self) -> &Address {
        &self.address
    }

    fn set_destination(&mut self, address: Address) {
        self.address = address;
    }
}

#[async_trait]
pub trait ConnectionHook: Send + Sync {
    /// Called once per outbound connection, before it is established.
    async fn server_connect(&self, conn: &mut dyn ServerConnection);

    fn name(&self) -> &'static str;
}
