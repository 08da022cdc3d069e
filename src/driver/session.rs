//! Appium session lifecycle
//!
//! A [`Session`] owns at most one live WebDriver session. Creation is
//! eager and single-shot: the server URL is validated, the capability set
//! assembled, and one remote session requested. A failed attempt is fatal;
//! there is no retry. Teardown is explicit and idempotent, and there is no
//! reopen after teardown.

use fantoccini::{Client, ClientBuilder};
use url::Url;

use crate::common::{Error, Result};
use crate::config::DriverConfig;

use super::capabilities;

/// The process's handle to the remote automation session
#[derive(Debug)]
pub struct Session {
    client: Option<Client>,
}

impl Session {
    /// Open a remote session at the configured Appium server
    ///
    /// A missing or empty `appiumServerURL` and a present-but-malformed one
    /// are reported as distinct errors.
    pub async fn create(config: &DriverConfig) -> Result<Self> {
        let raw_url = config
            .appium_server_url()
            .filter(|url| !url.is_empty())
            .ok_or(Error::MissingServerUrl)?;
        let server_url = Url::parse(raw_url).map_err(|source| Error::InvalidServerUrl {
            url: raw_url.to_string(),
            source,
        })?;

        let caps = capabilities::capability_set(config);
        tracing::info!(server = %server_url, capabilities = caps.len(), "Creating Appium session");

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(server_url.as_str())
            .await?;

        tracing::info!("Appium session created");
        Ok(Self {
            client: Some(client),
        })
    }

    /// The live session handle, or `None` after teardown
    pub fn driver(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    /// Close the remote session if one is open; a no-op otherwise
    pub async fn quit(&mut self) -> Result<()> {
        match self.client.take() {
            Some(client) => {
                tracing::info!("Quitting Appium session");
                client.close().await?;
                Ok(())
            }
            None => {
                tracing::debug!("quit called with no active session");
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self { client: None }
    }
}
