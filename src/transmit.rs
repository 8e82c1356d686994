use std::io;

use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::ir::Waveform;


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransmitError {
    #[error("timed out waiting for the device")]
    Timeout,
    #[error("authentication failed")]
    Authentication,
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<io::Error> for TransmitError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TransmitError::Timeout,
            _ => TransmitError::Transport(err.to_string())
        }
    }
}


/// A connection to something that can emit a waveform.
#[allow(async_fn_in_trait)]
pub trait DeviceSession {
    /// (Re-)establish the session.
    async fn authenticate(&mut self) -> Result<(), TransmitError>;

    async fn transmit(&mut self, waveform: &Waveform) -> Result<(), TransmitError>;

    /// Sessions whose authentication is handled elsewhere return `false` and are never
    /// asked to authenticate.
    fn requires_authentication(&self) -> bool {
        true
    }
}


/// Bounded retry budget for a single [Transmitter::send].
///
/// `attempts` counts every transmit attempt, the first one included: a session that fails
/// `N` times before succeeding is delivered to iff `N < attempts`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32
}

impl RetryPolicy {
    pub const DEFAULT_ATTEMPTS: u32 = 2;

    pub fn new(attempts: u32) -> Self {
        Self { attempts: attempts.max(1) }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ATTEMPTS)
    }
}


/// Delivers waveforms to a [DeviceSession], masking transient failures.
pub struct Transmitter<S> {
    session: S,
    policy: RetryPolicy
}

impl<S: DeviceSession> Transmitter<S> {
    pub fn new(session: S, policy: RetryPolicy) -> Self {
        Self { session, policy }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Initial authentication. A failure is logged only; the next [send](Self::send)
    /// re-authenticates after its first failed attempt.
    #[instrument(skip(self))]
    pub async fn connect(&mut self) -> bool {
        if !self.session.requires_authentication() {
            return true;
        }

        match self.session.authenticate().await {
            Ok(()) => {
                info!("connected to device");
                true
            },
            Err(err) => {
                error!(%err, "failed to connect to device");
                false
            }
        }
    }

    /// Transmit `waveform`, retrying within the policy's budget.
    ///
    /// Before each retry the session re-authenticates exactly once; if that fails the send
    /// is abandoned. Errors never escape: the result only says whether the device accepted
    /// the waveform.
    #[instrument(skip_all, fields(bytes = waveform.len()))]
    pub async fn send(&mut self, waveform: &Waveform) -> bool {
        let mut attempt = 1;

        loop {
            let err = match self.session.transmit(waveform).await {
                Ok(()) => {
                    debug!(attempt, "waveform transmitted");
                    return true;
                },
                Err(err) => err
            };

            if attempt >= self.policy.attempts {
                error!(%err, attempts = attempt, "giving up on transmission");
                return false;
            }

            warn!(%err, attempt, "transmission failed, retrying");

            if self.session.requires_authentication() {
                if let Err(err) = self.session.authenticate().await {
                    error!(%err, "re-authentication failed, giving up on transmission");
                    return false;
                }
            }

            attempt += 1;
        }
    }
}


#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use crate::ir::table::tests::waveform;

    use super::*;

    /// Session replaying scripted outcomes. Unscripted calls succeed.
    #[derive(Default)]
    pub(crate) struct ScriptedSession {
        pub transmit_results: VecDeque<Result<(), TransmitError>>,
        pub auth_results: VecDeque<Result<(), TransmitError>>,
        pub remote: bool,
        pub transmitted: Vec<Waveform>,
        pub transmit_calls: usize,
        pub auth_calls: usize,
    }

    impl ScriptedSession {
        pub(crate) fn failing(failures: usize, err: TransmitError) -> Self {
            Self {
                transmit_results: std::iter::repeat(Err(err)).take(failures).collect(),
                ..Default::default()
            }
        }
    }

    impl DeviceSession for ScriptedSession {
        async fn authenticate(&mut self) -> Result<(), TransmitError> {
            self.auth_calls += 1;
            self.auth_results.pop_front().unwrap_or(Ok(()))
        }

        async fn transmit(&mut self, waveform: &Waveform) -> Result<(), TransmitError> {
            self.transmit_calls += 1;
            let result = self.transmit_results.pop_front().unwrap_or(Ok(()));
            if result.is_ok() {
                self.transmitted.push(waveform.clone());
            }
            result
        }

        fn requires_authentication(&self) -> bool {
            !self.remote
        }
    }

    #[tokio::test]
    async fn delivers_first_time() {
        let mut tx = Transmitter::new(ScriptedSession::default(), RetryPolicy::default());

        assert!(tx.send(&waveform(1, 1)).await);
        assert_eq!(tx.session().transmit_calls, 1);
        assert_eq!(tx.session().auth_calls, 0);
        assert_eq!(tx.session().transmitted, vec![waveform(1, 1)]);
    }

    #[tokio::test]
    async fn retry_budget_counts_every_attempt() {
        for attempts in 1..=4u32 {
            for failures in 0..=5usize {
                let session = ScriptedSession::failing(failures, TransmitError::Timeout);
                let mut tx = Transmitter::new(session, RetryPolicy::new(attempts));

                let delivered = tx.send(&waveform(1, 1)).await;
                assert_eq!(delivered, failures < attempts as usize, "attempts={attempts} failures={failures}");

                let transmits = (failures + 1).min(attempts as usize);
                assert_eq!(tx.session().transmit_calls, transmits);
                // one re-authentication before every retry
                assert_eq!(tx.session().auth_calls, transmits - 1);
            }
        }
    }

    #[tokio::test]
    async fn two_timeouts_exhaust_default_budget() {
        let session = ScriptedSession::failing(2, TransmitError::Timeout);
        let mut tx = Transmitter::new(session, RetryPolicy::default());

        assert!(!tx.send(&waveform(1, 1)).await);
        assert!(tx.session().transmitted.is_empty());
    }

    #[tokio::test]
    async fn failed_reauthentication_aborts() {
        let mut session = ScriptedSession::failing(1, TransmitError::InvalidPayload("bad".into()));
        session.auth_results.push_back(Err(TransmitError::Authentication));

        let mut tx = Transmitter::new(session, RetryPolicy::new(5));

        assert!(!tx.send(&waveform(1, 1)).await);
        assert_eq!(tx.session().transmit_calls, 1);
        assert_eq!(tx.session().auth_calls, 1);
    }

    #[tokio::test]
    async fn invalid_payload_is_retried() {
        let session = ScriptedSession::failing(1, TransmitError::InvalidPayload("error -5".into()));
        let mut tx = Transmitter::new(session, RetryPolicy::default());

        assert!(tx.send(&waveform(1, 1)).await);
        assert_eq!(tx.session().transmit_calls, 2);
    }

    #[tokio::test]
    async fn remote_sessions_retry_without_authenticating() {
        let mut session = ScriptedSession::failing(1, TransmitError::Transport("502".into()));
        session.remote = true;

        let mut tx = Transmitter::new(session, RetryPolicy::default());

        assert!(tx.connect().await);
        assert!(tx.send(&waveform(1, 1)).await);
        assert_eq!(tx.session().auth_calls, 0);
    }

    #[tokio::test]
    async fn connect_failure_is_not_fatal() {
        let mut session = ScriptedSession::default();
        session.auth_results.push_back(Err(TransmitError::Timeout));

        let mut tx = Transmitter::new(session, RetryPolicy::default());

        assert!(!tx.connect().await);
        assert!(tx.send(&waveform(1, 1)).await);
    }

    #[test]
    fn io_errors_map_to_timeout() {
        let err: TransmitError = io::Error::new(io::ErrorKind::TimedOut, "slow").into();
        assert_eq!(err, TransmitError::Timeout);

        let err: TransmitError = io::Error::new(io::ErrorKind::ConnectionRefused, "nope").into();
        assert!(matches!(err, TransmitError::Transport(_)));

        assert_eq!(RetryPolicy::new(0).attempts(), 1);
    }
}
