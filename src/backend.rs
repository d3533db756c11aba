//! Simulated network round-trips
//!
//! Login, account creation and assistant replies complete after a fixed
//! delay on a small tokio runtime. Completions come back over a channel that
//! the UI drains once per frame. Requests cannot be cancelled; a page that
//! is no longer interested simply ignores the reply.

use crate::auth::{LoginForm, ValidationError};
use crate::config::DelayConfig;
use crate::content::assistant;
use crate::session::UserRecord;
use crate::{AgriError, Result};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, warn};
use uuid::Uuid;

/// Identifies a submitted request in its reply
pub type RequestId = Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendRequest {
    /// Credentials are checked once the delay has passed
    Login(LoginForm),
    /// Already validated account
    CreateAccount(UserRecord),
    /// Question for the assistant
    Ask(String),
}

impl BackendRequest {
    fn delay(&self, delays: &DelayConfig) -> Duration {
        match self {
            BackendRequest::Login(_) => delays.login(),
            BackendRequest::CreateAccount(_) => delays.create_account(),
            BackendRequest::Ask(_) => delays.assistant(),
        }
    }

    fn complete(self) -> BackendReply {
        match self {
            BackendRequest::Login(form) => BackendReply::Login(form.check_credentials()),
            BackendRequest::CreateAccount(user) => BackendReply::AccountCreated(user),
            BackendRequest::Ask(question) => {
                BackendReply::Assistant(assistant::respond(&question).to_string())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendReply {
    Login(std::result::Result<UserRecord, ValidationError>),
    AccountCreated(UserRecord),
    Assistant(String),
}

/// A completed request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendEvent {
    pub id: RequestId,
    pub reply: BackendReply,
}

/// Fixed-delay stand-in for a server
pub struct SimulatedBackend {
    runtime: Runtime,
    delays: DelayConfig,
    event_tx: Sender<BackendEvent>,
    event_rx: Receiver<BackendEvent>,
}

impl SimulatedBackend {
    pub fn new(delays: DelayConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("simulated-backend")
            .enable_time()
            .build()
            .map_err(|e| AgriError::BackendError(format!("Failed to create runtime: {}", e)))?;

        let (event_tx, event_rx) = unbounded();
        Ok(Self {
            runtime,
            delays,
            event_tx,
            event_rx,
        })
    }

    pub fn delays(&self) -> &DelayConfig {
        &self.delays
    }

    /// Queue a request; its reply arrives through [`Self::poll`]
    pub fn submit(&self, request: BackendRequest) -> RequestId {
        let id = Uuid::new_v4();
        let delay = request.delay(&self.delays);
        let tx = self.event_tx.clone();
        debug!("Submitting request {} ({:?} delay)", id, delay);

        self.runtime.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let reply = request.complete();
            if tx.send(BackendEvent { id, reply }).is_err() {
                warn!("Dropping reply {}: receiver gone", id);
            }
        });
        id
    }

    /// Completed requests since the last call
    pub fn poll(&self) -> Vec<BackendEvent> {
        self.event_rx.try_iter().collect()
    }

    /// Block until a reply arrives or `timeout` passes
    pub fn wait(&self, timeout: Duration) -> Option<BackendEvent> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> SimulatedBackend {
        SimulatedBackend::new(DelayConfig::instant()).unwrap()
    }

    #[test]
    fn test_login_reply() {
        let backend = instant();
        let id = backend.submit(BackendRequest::Login(LoginForm::demo()));
        let event = backend.wait(Duration::from_secs(2)).unwrap();
        assert_eq!(event.id, id);
        match event.reply {
            BackendReply::Login(Ok(user)) => {
                assert_eq!(user.email.as_deref(), Some("farmer@demo.com"))
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_bad_login_reply() {
        let backend = instant();
        backend.submit(BackendRequest::Login(LoginForm::new("bad", "x")));
        let event = backend.wait(Duration::from_secs(2)).unwrap();
        assert_eq!(
            event.reply,
            BackendReply::Login(Err(ValidationError::InvalidCredentials))
        );
    }

    #[test]
    fn test_assistant_reply() {
        let backend = instant();
        backend.submit(BackendRequest::Ask("What about my soil?".into()));
        let event = backend.wait(Duration::from_secs(2)).unwrap();
        match event.reply {
            BackendReply::Assistant(text) => assert!(text.contains("pH levels")),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_delay_is_honoured() {
        let delays = DelayConfig {
            assistant_ms: 200,
            ..DelayConfig::instant()
        };
        let backend = SimulatedBackend::new(delays).unwrap();
        backend.submit(BackendRequest::Ask("hi".into()));
        assert!(backend.poll().is_empty());
        assert!(backend.wait(Duration::from_secs(2)).is_some());
    }
}
