// ────────────────────────────────
// src/redirect/redirector.rs
// Reroutes connections for configured hosts to a fixed upstream
// ────────────────────────────────
use crate::config::{self, RedirectorConfig};
use crate::redirect::{Address, ConnectionHook, ServerConnection};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct HostRedirector {
    config: RedirectorConfig,
    upstream: Address,
}

impl HostRedirector {
    pub fn new(config: RedirectorConfig) -> Self {
        let upstream = Address::new(config.upstream.host.clone(), config.upstream.port);
        Self { config, upstream }
    }

    pub async fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = config::load_config(path).await?;
        info!(
            "Loaded {} target host(s), upstream {}@{}:{}",
            config.target_hosts.len(),
            config.upstream.name,
            config.upstream.host,
            config.upstream.port
        );
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &RedirectorConfig {
        &self.config
    }

    pub fn upstream(&self) -> &Address {
        &self.upstream
    }

    /// Rewrite the destination to the upstream when the intended host is a target.
    /// Returns `true` if the connection was rerouted.
    pub fn on_connection_intent(&self, conn: &mut dyn ServerConnection) -> bool {
        let intended_host = &conn.intended_destination().host;
        if !self.config.is_target(intended_host) {
            return false;
        }

        info!(
            "匹配到目标 Host: {} -> 重定向 TCP 连接到 {}@{}:{}",
            intended_host, self.config.upstream.name, self.upstream.host, self.upstream.port
        );

        conn.set_destination(self.upstream.clone());
        true
    }
}

#[async_trait]
impl ConnectionHook for HostRedirector {
    async fn server_connect(&self, conn: &mut dyn ServerConnection) {
        self.on_connection_intent(conn);
    }

    fn name(&self) -> &'static str {
        "host_redirector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;
    use crate::logging::ComponentFormat;
    use crate::redirect::ConnectionIntent;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn redirector(targets: &[&str]) -> HostRedirector {
        HostRedirector::new(RedirectorConfig::new(
            targets.iter().map(|s| s.to_string()).collect(),
            UpstreamConfig::default(),
        ))
    }

    #[test]
    fn test_target_host_is_rerouted() {
        let redirector = redirector(&["10.211.55.39"]);
        let mut conn = ConnectionIntent::new("10.211.55.39", 443);

        assert!(redirector.on_connection_intent(&mut conn));
        assert_eq!(conn.intended_destination(), &Address::new("127.0.0.1", 7001));
    }

    #[test]
    fn test_other_host_is_untouched() {
        let redirector = redirector(&["10.211.55.39"]);
        let mut conn = ConnectionIntent::new("10.211.55.40", 80);

        assert!(!redirector.on_connection_intent(&mut conn));
        assert_eq!(conn.intended_destination(), &Address::new("10.211.55.40", 80));
    }

    #[test]
    fn test_empty_target_set_never_matches() {
        let redirector = redirector(&[]);
        let mut conn = ConnectionIntent::new("127.0.0.1", 7001);

        assert!(!redirector.on_connection_intent(&mut conn));
        assert_eq!(conn.into_address(), Address::new("127.0.0.1", 7001));
    }

    #[test]
    fn test_match_is_exact() {
        let redirector = redirector(&["example.com"]);

        for host in ["EXAMPLE.COM", "www.example.com", "example.com.", "example"] {
            let mut conn = ConnectionIntent::new(host, 443);
            assert!(!redirector.on_connection_intent(&mut conn), "{} should not match", host);
            assert_eq!(conn.intended_destination().host, host);
        }
    }

    #[test]
    fn test_match_logs_one_record() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .event_format(ComponentFormat::new("Redirector"))
            .with_writer(move || writer.clone())
            .finish();

        let redirector = redirector(&["10.211.55.39"]);
        tracing::subscriber::with_default(subscriber, || {
            redirector.on_connection_intent(&mut ConnectionIntent::new("10.211.55.39", 443));
            redirector.on_connection_intent(&mut ConnectionIntent::new("10.211.55.40", 443));
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1, "unexpected log output: {:?}", output);
        assert!(lines[0].ends_with(
            " - [Redirector] - 匹配到目标 Host: 10.211.55.39 -> 重定向 TCP 连接到 Xray@127.0.0.1:7001"
        ));
    }

    #[tokio::test]
    async fn test_hook_delegates_to_redirect() {
        let redirector = redirector(&["a.test"]);
        let mut conn = ConnectionIntent::new("a.test", 8443);

        redirector.server_connect(&mut conn).await;
        assert_eq!(conn.intended_destination(), redirector.upstream());
    }
}
