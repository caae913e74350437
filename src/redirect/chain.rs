// src/redirect/chain.rs
use crate::config::RedirectorConfig;
use crate::redirect::{ConnectionHook, HostRedirector, ServerConnection};
use std::sync::Arc;

/// Hooks registered with the interception runtime, run in registration order.
#[derive(Clone, Default)]
pub struct HookChain {
    hooks: Vec<Arc<dyn ConnectionHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook(mut self, hook: Arc<dyn ConnectionHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn register(&mut self, hook: Arc<dyn ConnectionHook>) {
        tracing::debug!("Registered connection hook: {}", hook.name());
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }

    /// Runs every hook against the connection before the runtime dials it.
    /// Later hooks see the destination as left by earlier ones.
    pub async fn dispatch(&self, conn: &mut dyn ServerConnection) {
        for hook in &self.hooks {
            hook.server_connect(conn).await;
        }
    }
}

/// The default chain: a single host redirector.
pub fn create_hooks(config: RedirectorConfig) -> HookChain {
    HookChain::new().with_hook(Arc::new(HostRedirector::new(config)))
}
