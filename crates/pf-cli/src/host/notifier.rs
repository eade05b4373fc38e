use pf_profile::Notifier;

use std::sync::Mutex;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Prints notifications to stderr and keeps them for the JSON output.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    quiet: bool,
    sent: Mutex<Vec<Notification>>,
}

impl TerminalNotifier {
    /// Keeps notifications without printing them.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    fn push(&self, notification: Notification) {
        if !self.quiet {
            match &notification {
                Notification::Success(message) => eprintln!("✔ {message}"),
                Notification::Error(message) => eprintln!("✖ {message}"),
            }
        }

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification);
        }
    }
}

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        self.push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Notification::Error(message.to_string()));
    }
}
