//! YAML-backed driver configuration
//!
//! Configuration documents are parsed into a typed schema at load time, so a
//! malformed value (say, a non-integer `explicitWaitTime`) fails the load
//! instead of surfacing as a cast failure mid-scenario. The raw document is
//! kept alongside the schema for ad-hoc key lookups.
//!
//! Two documents share the schema: the capabilities file (platform, device,
//! app and server settings) and the credentials file (the nested `users`
//! map). Every field is optional.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Deserialize;

use crate::common::{Error, Result};

/// Explicit wait applied when the configuration leaves it unset
const DEFAULT_EXPLICIT_WAIT_SECS: u64 = 15;

/// An email/password pair for one user type
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// True when neither field is set; callers skip the dependent action
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// Typed view of a configuration document
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Schema {
    platform_name: Option<String>,
    device_name: Option<String>,
    automation_name: Option<String>,
    app_package: Option<String>,
    app_activity: Option<String>,
    app: Option<String>,
    no_reset: Option<bool>,
    full_reset: Option<bool>,
    #[serde(rename = "appiumServerURL")]
    appium_server_url: Option<String>,
    explicit_wait_time: Option<u64>,
    #[serde(default)]
    users: HashMap<String, Credentials>,
}

/// One loaded configuration document, immutable after load
#[derive(Debug)]
pub struct DriverConfig {
    path: PathBuf,
    raw: serde_yaml::Value,
    schema: Schema,
}

impl DriverConfig {
    /// Load and validate a configuration document
    ///
    /// Fails with [`Error::ConfigNotFound`] when the file is missing and
    /// [`Error::ConfigParse`] when it is not valid YAML or a value has the
    /// wrong type for its key.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound {
                path: path.display().to_string(),
            },
            _ => Error::Io(e),
        })?;

        let raw: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;
        let schema: Schema =
            serde_yaml::from_value(raw.clone()).map_err(|e| Error::ConfigParse {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;

        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(Self {
            path: path.to_path_buf(),
            raw,
            schema,
        })
    }

    /// Path this document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw value for `key`, or `None` when the key is absent
    pub fn property(&self, key: &str) -> Option<&serde_yaml::Value> {
        let value = self.raw.get(key);
        match value {
            Some(v) => tracing::debug!(key, value = ?v, "Property retrieved"),
            None => tracing::warn!(key, "Property not found"),
        }
        value
    }

    /// Explicit wait in seconds, defaulting to 15 when unset
    ///
    /// A present-but-malformed value was already rejected by [`Self::load`].
    pub fn explicit_wait_time(&self) -> u64 {
        self.schema
            .explicit_wait_time
            .unwrap_or(DEFAULT_EXPLICIT_WAIT_SECS)
    }

    /// Credentials for `user_type`, empty when the user type is unknown
    pub fn user_credentials(&self, user_type: &str) -> Credentials {
        match self.schema.users.get(user_type) {
            Some(credentials) => {
                tracing::debug!(user_type, email = %credentials.email, "Retrieved credentials");
                credentials.clone()
            }
            None => {
                tracing::warn!(user_type, "No credentials found for user type");
                Credentials::default()
            }
        }
    }

    pub fn platform_name(&self) -> Option<&str> {
        self.schema.platform_name.as_deref()
    }

    pub fn device_name(&self) -> Option<&str> {
        self.schema.device_name.as_deref()
    }

    pub fn automation_name(&self) -> Option<&str> {
        self.schema.automation_name.as_deref()
    }

    pub fn app_package(&self) -> Option<&str> {
        self.schema.app_package.as_deref()
    }

    pub fn app_activity(&self) -> Option<&str> {
        self.schema.app_activity.as_deref()
    }

    pub fn app(&self) -> Option<&str> {
        self.schema.app.as_deref()
    }

    pub fn no_reset(&self) -> Option<bool> {
        self.schema.no_reset
    }

    pub fn full_reset(&self) -> Option<bool> {
        self.schema.full_reset
    }

    pub fn appium_server_url(&self) -> Option<&str> {
        self.schema.appium_server_url.as_deref()
    }
}

/// Cache of loaded configuration documents, one per source path
///
/// Explicitly constructed and passed down rather than held in a process-wide
/// static, so each logical test worker can own its own store.
#[derive(Debug, Default)]
pub struct ConfigStore {
    sources: Mutex<HashMap<PathBuf, Arc<DriverConfig>>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document for `path`, loading it on the first request
    ///
    /// Repeated gets of the same path return the same instance.
    pub fn get(&self, path: impl AsRef<Path>) -> Result<Arc<DriverConfig>> {
        let path = path.as_ref();
        let mut sources = self.sources.lock().expect("config store lock poisoned");
        if let Some(config) = sources.get(path) {
            return Ok(Arc::clone(config));
        }
        let config = Arc::new(DriverConfig::load(path)?);
        sources.insert(path.to_path_buf(), Arc::clone(&config));
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const FULL_DOC: &str = "\
platformName: Android
deviceName: emulator-5554
automationName: UiAutomator2
appPackage: com.crunchyroll.crunchyroid
appActivity: .main.ui.MainActivity
app: apps/crunchyroll.apk
noReset: true
fullReset: false
appiumServerURL: http://127.0.0.1:4723
explicitWaitTime: 20
users:
  premium:
    email: premium@example.com
    password: hunter2
  free:
    email: free@example.com
";

    #[test]
    fn loads_typed_fields() {
        let file = write_yaml(FULL_DOC);
        let config = DriverConfig::load(file.path()).unwrap();
        assert_eq!(config.platform_name(), Some("Android"));
        assert_eq!(config.device_name(), Some("emulator-5554"));
        assert_eq!(config.automation_name(), Some("UiAutomator2"));
        assert_eq!(config.no_reset(), Some(true));
        assert_eq!(config.full_reset(), Some(false));
        assert_eq!(config.appium_server_url(), Some("http://127.0.0.1:4723"));
        assert_eq!(config.explicit_wait_time(), 20);
    }

    #[test]
    fn explicit_wait_defaults_to_fifteen_when_absent() {
        let file = write_yaml("platformName: Android\n");
        let config = DriverConfig::load(file.path()).unwrap();
        assert_eq!(config.explicit_wait_time(), 15);
    }

    #[test]
    fn malformed_explicit_wait_fails_at_load() {
        let file = write_yaml("explicitWaitTime: soon\n");
        let err = DriverConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }), "got {err:?}");
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let err = DriverConfig::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }), "got {err:?}");
    }

    #[test]
    fn unparsable_document_is_config_parse() {
        let file = write_yaml(":\n  - [unbalanced\n");
        let err = DriverConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }), "got {err:?}");
    }

    #[test]
    fn property_returns_none_for_missing_key() {
        let file = write_yaml(FULL_DOC);
        let config = DriverConfig::load(file.path()).unwrap();
        assert!(config.property("platformName").is_some());
        assert!(config.property("nonexistent").is_none());
    }

    #[test]
    fn credentials_for_known_user_type() {
        let file = write_yaml(FULL_DOC);
        let config = DriverConfig::load(file.path()).unwrap();
        let creds = config.user_credentials("premium");
        assert_eq!(creds.email, "premium@example.com");
        assert_eq!(creds.password, "hunter2");
        assert!(!creds.is_empty());
    }

    #[test]
    fn credentials_for_unknown_user_type_are_empty() {
        let file = write_yaml(FULL_DOC);
        let config = DriverConfig::load(file.path()).unwrap();
        let creds = config.user_credentials("guest");
        assert!(creds.is_empty());
    }

    #[test]
    fn partial_credentials_default_missing_fields() {
        let file = write_yaml(FULL_DOC);
        let config = DriverConfig::load(file.path()).unwrap();
        let creds = config.user_credentials("free");
        assert_eq!(creds.email, "free@example.com");
        assert_eq!(creds.password, "");
        assert!(!creds.is_empty());
    }

    #[test]
    fn store_returns_same_instance_per_source() {
        let file = write_yaml(FULL_DOC);
        let store = ConfigStore::new();
        let first = store.get(file.path()).unwrap();
        let second = store.get(file.path()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn store_keeps_distinct_sources_apart() {
        let caps = write_yaml("platformName: Android\n");
        let creds = write_yaml("users: {}\n");
        let store = ConfigStore::new();
        let first = store.get(caps.path()).unwrap();
        let second = store.get(creds.path()).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.platform_name(), Some("Android"));
        assert_eq!(second.platform_name(), None);
    }
}
