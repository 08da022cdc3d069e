//! End-to-end scenarios against a live Appium server
//!
//! These tests need a running Appium server with an Android device or
//! emulator attached and the app installed, so they are `#[ignore]`d by
//! default. Point `APPIUM_CONFIG` / `APPIUM_CREDENTIALS` at alternative
//! configuration files if needed, then run:
//!
//!     cargo test --test e2e -- --ignored

use std::path::PathBuf;

use uitest::{scenarios, with_context, Result};

fn capabilities_path() -> PathBuf {
    std::env::var_os("APPIUM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config/android-capabilities.yaml"))
}

fn credentials_path() -> PathBuf {
    std::env::var_os("APPIUM_CREDENTIALS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config/credentials.yaml"))
}

#[tokio::test]
#[ignore = "requires a live Appium server and device"]
async fn onboarding_verifications_pass() -> Result<()> {
    with_context(&capabilities_path(), &credentials_path(), |ctx| {
        Box::pin(scenarios::onboarding(ctx))
    })
    .await
}

#[tokio::test]
#[ignore = "requires a live Appium server and device"]
async fn premium_login_reaches_manage_profiles() -> Result<()> {
    with_context(&capabilities_path(), &credentials_path(), |ctx| {
        Box::pin(async move { scenarios::login(ctx, "premium").await })
    })
    .await
}

#[tokio::test]
#[ignore = "requires a live Appium server and device"]
async fn unknown_user_type_skips_login() -> Result<()> {
    // "guest" is absent from the credentials file; the login task logs the
    // miss and returns success without typing anything
    with_context(&capabilities_path(), &credentials_path(), |ctx| {
        Box::pin(async move { scenarios::login(ctx, "guest").await })
    })
    .await
}
