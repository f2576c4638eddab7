use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use quay_gateway::GatewayError;
use quay_types::ReadResponse;
use tracing::debug;

use crate::error::RetryError;

/// One in-flight gateway call.
pub type GatewayFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ReadResponse, GatewayError>> + Send + 'a>>;

/// A re-invocable gateway call: the retrier calls it once per attempt.
///
/// Both read and write gateway calls share the [`ReadResponse`] shape
/// (acks are empty responses), so one call type covers the whole retry
/// boundary.
pub type GatewayCall<'a> = Box<dyn Fn() -> GatewayFuture<'a> + Send + Sync + 'a>;

/// Retry policy around gateway calls.
///
/// The retry boundary is fixed by the operations that use this trait:
/// only the gateway calls themselves are ever retried, never decoding,
/// resolution, or mutation.
#[async_trait]
pub trait Retrier: Send + Sync {
    /// Drive `op` until it succeeds or the policy gives up.
    async fn attempt(&self, op: GatewayCall<'_>) -> Result<ReadResponse, RetryError>;
}

/// Bounded retries with doubling backoff.
///
/// The initial attempt is always made; `retries` further attempts follow
/// for recoverable failures. Non-recoverable failures abort immediately
/// with [`RetryError::Aborted`].
pub struct FixedRetrier {
    retries: u32,
    base_delay: Duration,
}

impl FixedRetrier {
    /// `retries` extra attempts after the initial one, no backoff delay.
    pub fn new(retries: u32) -> Self {
        Self {
            retries,
            base_delay: Duration::ZERO,
        }
    }

    /// Like [`FixedRetrier::new`], sleeping `base_delay` before the first
    /// retry and doubling it for each one after.
    pub fn with_backoff(retries: u32, base_delay: Duration) -> Self {
        Self {
            retries,
            base_delay,
        }
    }
}

impl Default for FixedRetrier {
    fn default() -> Self {
        Self::new(3)
    }
}

#[async_trait]
impl Retrier for FixedRetrier {
    async fn attempt(&self, op: GatewayCall<'_>) -> Result<ReadResponse, RetryError> {
        let total = self.retries.saturating_add(1);
        let mut delay = self.base_delay;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let error = match op().await {
                Ok(response) => return Ok(response),
                Err(error) => error,
            };

            if !error.is_recoverable() {
                return Err(RetryError::Aborted(error));
            }
            if attempt >= total {
                return Err(RetryError::Exhausted {
                    attempts: attempt,
                    source: error,
                });
            }

            debug!(attempt, error = %error, "gateway call failed; retrying");
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
            }
        }
    }
}
