use super::source::*;
use super::unavailable::Unavailable;
use kuhn_core::*;
use kuhn_gameplay::Action;
use std::time::Duration;

/// Carries one serialized request to an external decider and returns its raw reply.
///
/// The transport knows nothing about poker; parsing and validation happen
/// in [`Remote`].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn exchange(&self, body: String) -> anyhow::Result<String>;
}

/// A [`Source`] backed by an async [`Transport`].
///
/// The arena is synchronous, so each consultation blocks on a private
/// current-thread runtime, bounded by a hard deadline.
pub struct Remote<T: Transport> {
    transport: T,
    timeout: Duration,
    runtime: tokio::runtime::Runtime,
}

impl<T: Transport> Remote<T> {
    pub fn new(transport: T) -> anyhow::Result<Self> {
        Self::with_timeout(transport, DECISION_TIMEOUT)
    }
    pub fn with_timeout(transport: T, timeout: Duration) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        Ok(Self {
            transport,
            timeout,
            runtime,
        })
    }
}

/// One line of the exchange log: what was asked and what came back verbatim.
fn transcript(body: &str, raw: &str) -> String {
    format!("[remote] >> {} << {}", body, raw.trim())
}

impl<T: Transport> Source for Remote<T> {
    fn consult(&mut self, request: &Request) -> Result<Action, Unavailable> {
        let body = serde_json::to_string(request).map_err(|e| Unavailable::Schema(e.to_string()))?;
        let raw = self
            .runtime
            .block_on(tokio::time::timeout(self.timeout, self.transport.exchange(body.clone())))
            .map_err(|_| Unavailable::Timeout(self.timeout))?
            .map_err(|e| Unavailable::Transport(e.to_string()))?;
        log::debug!("{}", transcript(&body, &raw));
        let reply = serde_json::from_str::<Reply>(raw.trim()).map_err(|e| Unavailable::Schema(e.to_string()))?;
        request.validate(reply.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuhn_cards::Card;

    /// Answers every request with the same text.
    struct Canned(&'static str);
    #[async_trait::async_trait]
    impl Transport for Canned {
        async fn exchange(&self, _: String) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }
    /// Never answers in time.
    struct Stall;
    #[async_trait::async_trait]
    impl Transport for Stall {
        async fn exchange(&self, _: String) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(r#"{"action":"CHECK"}"#.to_string())
        }
    }
    /// Connection refused.
    struct Down;
    #[async_trait::async_trait]
    impl Transport for Down {
        async fn exchange(&self, _: String) -> anyhow::Result<String> {
            anyhow::bail!("connection refused")
        }
    }

    fn opening() -> Request {
        Request {
            card: Card::King,
            history: vec![],
            legal: vec![Action::Check, Action::Bet],
            pot: 2,
        }
    }

    #[test]
    fn well_formed_reply() {
        let mut remote = Remote::new(Canned(r#"{"action":"BET"}"#)).unwrap();
        assert_eq!(remote.consult(&opening()), Ok(Action::Bet));
    }
    #[test]
    fn slow_reply_times_out() {
        let timeout = Duration::from_millis(20);
        let mut remote = Remote::with_timeout(Stall, timeout).unwrap();
        assert_eq!(remote.consult(&opening()), Err(Unavailable::Timeout(timeout)));
    }
    #[test]
    fn malformed_reply() {
        let mut remote = Remote::new(Canned("I think I will bet")).unwrap();
        assert!(matches!(remote.consult(&opening()), Err(Unavailable::Schema(_))));
        let mut remote = Remote::new(Canned(r#"{"action":"RAISE"}"#)).unwrap();
        assert!(matches!(remote.consult(&opening()), Err(Unavailable::Schema(_))));
    }
    #[test]
    fn illegal_reply() {
        let mut remote = Remote::new(Canned(r#"{"action":"CALL"}"#)).unwrap();
        assert_eq!(remote.consult(&opening()), Err(Unavailable::Illegal(Action::Call)));
    }
    #[test]
    fn transport_failure() {
        let mut remote = Remote::new(Down).unwrap();
        assert!(matches!(remote.consult(&opening()), Err(Unavailable::Transport(_))));
    }
    #[test]
    fn transcript_keeps_both_sides() {
        let body = serde_json::to_string(&opening()).unwrap();
        let line = transcript(&body, "{\"action\":\"BET\"}\n");
        assert!(line.starts_with("[remote]"));
        assert!(line.contains(r#""card":"K""#));
        assert!(line.ends_with(r#"<< {"action":"BET"}"#));
    }
}
