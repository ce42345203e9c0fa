//! Background login runner
//!
//! Runs login requests on the tokio runtime so the UI loop never blocks.
//! Results come back through a channel that the UI polls on every tick.

use crate::model::auth::{AuthResult, Credentials};
use crate::model::login::AttemptId;
use crate::services::auth::AuthClient;
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::runtime::Handle;
use tracing::debug;

/// Completed attempt, tagged with the id it was started under
pub type AttemptResult = (AttemptId, AuthResult);

/// Spawns login attempts and collects their results
pub struct AuthRunner {
    client: AuthClient,
    runtime: Handle,
    sender: Sender<AttemptResult>,
    receiver: Receiver<AttemptResult>,
    /// Attempts spawned but not yet polled
    in_flight: usize,
}

impl AuthRunner {
    pub fn new(client: AuthClient, runtime: Handle) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            client,
            runtime,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    pub fn login_url(&self) -> &str {
        self.client.login_url()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start a login attempt in the background
    ///
    /// Earlier attempts are not cancelled; each one reports back under its
    /// own id.
    pub fn spawn(&mut self, attempt: AttemptId, credentials: Credentials) {
        let client = self.client.clone();
        let tx = self.sender.clone();

        self.in_flight += 1;
        debug!(attempt, in_flight = self.in_flight, "Spawning login attempt");

        self.runtime.spawn(async move {
            let result = client.submit(&credentials).await;
            debug!(attempt, success = result.is_success(), "Login attempt finished");
            // Receiver lives as long as the runner; a failed send means we are shutting down
            let _ = tx.send((attempt, result));
        });
    }

    /// Drain finished attempts without blocking
    pub fn poll(&mut self) -> Vec<AttemptResult> {
        let mut results = Vec::new();
        while let Ok(result) = self.receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            results.push(result);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    async fn wait_for(runner: &mut AuthRunner, count: usize) -> Vec<AttemptResult> {
        let mut results = Vec::new();
        for _ in 0..200 {
            results.extend(runner.poll());
            if results.len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        results
    }

    #[tokio::test]
    async fn test_poll_is_empty_without_attempts() {
        let client = AuthClient::new("http://127.0.0.1:1", None).unwrap();
        let mut runner = AuthRunner::new(client, Handle::current());

        assert!(runner.poll().is_empty());
        assert_eq!(runner.in_flight(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_results_are_tagged_with_attempt() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Alice" })))
            .expect(2)
            .mount(&server)
            .await;

        let client = AuthClient::new(&server.uri(), None).unwrap();
        let mut runner = AuthRunner::new(client, Handle::current());

        runner.spawn(1, Credentials::new("alice@x.io", "pw"));
        runner.spawn(2, Credentials::new("alice@x.io", "pw"));
        assert_eq!(runner.in_flight(), 2);

        let mut results = wait_for(&mut runner, 2).await;
        results.sort_by_key(|(attempt, _)| *attempt);

        let expected = AuthResult::Success {
            user_name: "Alice".to_string(),
        };
        assert_eq!(results, vec![(1, expected.clone()), (2, expected)]);
        assert_eq!(runner.in_flight(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_unreachable_backend_reports_failure() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = AuthClient::new(&format!("http://127.0.0.1:{}", port), None).unwrap();
        let mut runner = AuthRunner::new(client, Handle::current());

        runner.spawn(7, Credentials::default());
        let results = wait_for(&mut runner, 1).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, 7);
        assert!(matches!(results[0].1, AuthResult::Failure { .. }));
    }
}
