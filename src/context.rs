//! Explicit test context
//!
//! Holds the loaded configuration documents and the live session, and is
//! passed down to screens and scenarios by reference. This replaces the
//! process-wide singletons a page-object suite conventionally hides behind,
//! so parallel workers can each own their own context.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use fantoccini::Client;

use crate::common::{Error, Result};
use crate::config::{ConfigStore, DriverConfig};
use crate::driver::session::Session;
use crate::driver::wait::WaitPolicy;

pub struct TestContext {
    config: Arc<DriverConfig>,
    credentials: Arc<DriverConfig>,
    session: Session,
}

impl TestContext {
    /// Load both configuration documents and eagerly open the session
    pub async fn open(capabilities: &Path, credentials: &Path) -> Result<Self> {
        let store = ConfigStore::new();
        let config = store.get(capabilities)?;
        let credentials = store.get(credentials)?;
        let session = Session::create(&config).await?;
        Ok(Self {
            config,
            credentials,
            session,
        })
    }

    /// The capabilities document
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The credentials document
    pub fn credentials(&self) -> &DriverConfig {
        &self.credentials
    }

    /// The live session handle
    pub fn driver(&self) -> Result<&Client> {
        self.session.driver().ok_or(Error::SessionClosed)
    }

    /// Wait policy bound to the live session, with the configured timeout
    pub fn wait_policy(&self) -> Result<WaitPolicy> {
        let client = self.driver()?.clone();
        let timeout = Duration::from_secs(self.config.explicit_wait_time());
        Ok(WaitPolicy::new(client, timeout))
    }

    /// Tear the session down
    pub async fn close(mut self) -> Result<()> {
        self.session.quit().await
    }
}

/// A scenario future borrowing the context
pub type ScenarioFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a>>;

/// Run a scenario against a freshly opened context, guaranteeing session
/// teardown on both the success and the failure path
///
/// A scenario failure wins over a teardown failure; the latter is logged.
pub async fn with_context<T, F>(capabilities: &Path, credentials: &Path, scenario: F) -> Result<T>
where
    F: for<'a> FnOnce(&'a TestContext) -> ScenarioFuture<'a, T>,
{
    let ctx = TestContext::open(capabilities, credentials).await?;
    let outcome = scenario(&ctx).await;
    let teardown = ctx.close().await;
    match outcome {
        Ok(value) => teardown.map(|_| value),
        Err(e) => {
            if let Err(teardown_err) = teardown {
                tracing::warn!(error = %teardown_err, "Session teardown failed after scenario error");
            }
            Err(e)
        }
    }
}
