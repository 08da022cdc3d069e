//! Bounded polling waits for element state
//!
//! The WebDriver protocol has no push notification for element visibility,
//! so the wait policy polls the session until the element reaches the
//! requested state or the budget elapses. Each call owns its full timeout
//! budget; there is no cancellation.

use std::time::Duration;

use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use tokio::time::{sleep, Instant};

use crate::common::{Error, Result};
use crate::screens::locator::ElementLocator;

/// Interval between element probes
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Bounded wait over the live session
///
/// The timeout is injected at construction (the context supplies the
/// configured explicit wait); the policy itself never reads configuration.
#[derive(Clone)]
pub struct WaitPolicy {
    client: Client,
    timeout: Duration,
}

enum Condition {
    Visible,
    Interactable,
}

impl WaitPolicy {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Block until the element is displayed, or fail with a timeout
    pub async fn visible(&self, locator: &ElementLocator) -> Result<Element> {
        self.settle(locator, Condition::Visible).await
    }

    /// Block until the element is displayed and enabled
    pub async fn interactable(&self, locator: &ElementLocator) -> Result<Element> {
        self.settle(locator, Condition::Interactable).await
    }

    async fn settle(&self, locator: &ElementLocator, condition: Condition) -> Result<Element> {
        let started = Instant::now();
        let query = locator.query();
        loop {
            match self.client.find(Locator::XPath(query.as_ref())).await {
                Ok(element) => {
                    if ready(&element, &condition).await {
                        tracing::debug!(%locator, "Element ready");
                        return Ok(element);
                    }
                }
                // Not in the tree yet; keep polling
                Err(e) if e.is_no_such_element() => {}
                Err(e) => return Err(e.into()),
            }
            if started.elapsed() >= self.timeout {
                return Err(Error::WaitTimeout {
                    element: locator.to_string(),
                    waited_secs: started.elapsed().as_secs(),
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }
}

/// A probe error (e.g. the element going stale between find and check)
/// counts as not ready; the next poll re-resolves the element.
async fn ready(element: &Element, condition: &Condition) -> bool {
    let displayed = matches!(element.is_displayed().await, Ok(true));
    match condition {
        Condition::Visible => displayed,
        Condition::Interactable => {
            displayed && matches!(element.is_enabled().await, Ok(true))
        }
    }
}
