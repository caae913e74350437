// src/redirect/mod.rs
mod chain;
mod hook;
mod redirector;

pub use chain::{create_hooks, HookChain};
pub use hook::{Address, ConnectionHook, ConnectionIntent, ServerConnection};
pub use redirector::HostRedirector;
