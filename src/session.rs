//! Demo authentication: any non-blank email/password pair signs in after a
//! short simulated delay. The store is owned by `FitApp` and lent to the
//! shell and views; nothing else holds session state.

use chrono::{DateTime, Duration, Local};

use crate::error::SessionError;
use crate::scheduler::Scheduled;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub const DEMO_EMAIL: &str = "demo@fittracker.com";
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub email: String,
}

impl Session {
    pub fn for_email(email: &str) -> Self {
        Session {
            name: display_name(email),
            email: email.to_string(),
        }
    }
}

/// `jane.doe@x.com` -> `Jane Doe`.
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let words: Vec<String> = local
        .split(['.', '_', '-', '+'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        "Athlete".to_string()
    } else {
        words.join(" ")
    }
}

#[derive(Debug)]
pub struct SessionStore {
    session: Option<Session>,
    pending: Option<Scheduled<Session>>,
    login_delay: Duration,
}

impl SessionStore {
    pub fn new(login_delay: Duration) -> Self {
        SessionStore {
            session: None,
            pending: None,
            login_delay,
        }
    }

    /// Starts a sign-in. It completes on the first `poll` after the login delay.
    pub fn login(&mut self, email: &str, password: &str, now: DateTime<Local>) -> Result<(), SessionError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }
        tracing::info!(%email, "login started");
        self.pending = Some(Scheduled::after(now, self.login_delay, Session::for_email(email)));
        Ok(())
    }

    /// Completes a due login and returns the new session.
    pub fn poll(&mut self, now: DateTime<Local>) -> Option<&Session> {
        let session = self.pending.as_mut()?.poll(now)?;
        self.pending = None;
        tracing::info!(email = %session.email, "login completed");
        self.session = Some(session);
        self.session.as_ref()
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(email = %session.email, "logged out");
        }
        if let Some(session) = self.pending.take().and_then(|mut pending| pending.cancel()) {
            tracing::debug!(email = %session.email, "pending login cancelled");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.as_ref().is_some_and(Scheduled::is_pending)
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn next_deadline(&self) -> Option<DateTime<Local>> {
        self.pending.as_ref().map(Scheduled::due)
    }
}
