//! Shared helpers for the integration tests: a recording mail fake and
//! a router wired exactly like the real server.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use folio::config::{Config, MailConfig, ObservabilityConfig, ServerConfig, SiteConfig};
use folio::email::{Mailer, OutboundMessage};

/// Records every send; flips to failure mode on demand.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMessage>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent_messages(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: OutboundMessage) -> anyhow::Result<Option<String>> {
        if self.fail {
            anyhow::bail!("smtp connection refused");
        }

        self.sent.lock().unwrap().push(message);
        Ok(Some("test-message-id".to_owned()))
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001, // Different port to avoid conflicts
        },
        mail: MailConfig::default(),
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub mailer: Arc<RecordingMailer>,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(RecordingMailer::default())
}

pub fn create_test_app_with(mailer: RecordingMailer) -> TestApp {
    let mailer = Arc::new(mailer);
    let router = folio::create_app(test_config(), mailer.clone());

    TestApp { router, mailer }
}
