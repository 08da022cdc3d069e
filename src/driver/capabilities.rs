//! W3C capability set assembly
//!
//! The capability map is derived once from the capabilities document when a
//! session is created and discarded afterwards. Vendor-specific entries
//! carry the `appium:` prefix the server requires under W3C; absent
//! configuration fields are simply omitted.

use serde_json::Value;

use crate::config::DriverConfig;

/// Capability map handed to the WebDriver client
pub type CapabilitySet = serde_json::Map<String, Value>;

/// Build the capability set for a new session from the loaded configuration
pub fn capability_set(config: &DriverConfig) -> CapabilitySet {
    let mut caps = CapabilitySet::new();
    insert_str(&mut caps, "platformName", config.platform_name());
    insert_str(&mut caps, "appium:deviceName", config.device_name());
    insert_str(&mut caps, "appium:automationName", config.automation_name());
    insert_str(&mut caps, "appium:appPackage", config.app_package());
    insert_str(&mut caps, "appium:appActivity", config.app_activity());
    insert_str(&mut caps, "appium:app", config.app());
    insert_bool(&mut caps, "appium:noReset", config.no_reset());
    insert_bool(&mut caps, "appium:fullReset", config.full_reset());
    caps
}

fn insert_str(caps: &mut CapabilitySet, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        caps.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn insert_bool(caps: &mut CapabilitySet, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        caps.insert(key.to_string(), Value::Bool(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_from(yaml: &str) -> DriverConfig {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        DriverConfig::load(file.path()).unwrap()
    }

    #[test]
    fn builds_prefixed_capabilities() {
        let config = config_from(
            "platformName: Android\n\
             deviceName: emulator-5554\n\
             automationName: UiAutomator2\n\
             appPackage: com.crunchyroll.crunchyroid\n\
             appActivity: .main.ui.MainActivity\n\
             app: apps/crunchyroll.apk\n\
             noReset: true\n\
             fullReset: false\n",
        );

        let caps = capability_set(&config);
        assert_eq!(caps.len(), 8);
        assert_eq!(caps["platformName"], Value::String("Android".into()));
        assert_eq!(
            caps["appium:deviceName"],
            Value::String("emulator-5554".into())
        );
        assert_eq!(
            caps["appium:automationName"],
            Value::String("UiAutomator2".into())
        );
        assert_eq!(
            caps["appium:appPackage"],
            Value::String("com.crunchyroll.crunchyroid".into())
        );
        assert_eq!(caps["appium:noReset"], Value::Bool(true));
        assert_eq!(caps["appium:fullReset"], Value::Bool(false));
    }

    #[test]
    fn omits_absent_fields() {
        let config = config_from("platformName: Android\n");
        let caps = capability_set(&config);
        assert_eq!(caps.len(), 1);
        assert!(caps.contains_key("platformName"));
        assert!(!caps.contains_key("appium:deviceName"));
    }
}
