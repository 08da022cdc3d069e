//! Scripted test scenarios
//!
//! Each scenario is a fixed sequence of screen-object calls with literal
//! expected values. Suite ordering and reporting belong to the caller (the
//! CLI runner or the test harness).

use crate::common::Result;
use crate::context::TestContext;
use crate::screens::{LoginScreen, OnboardingScreen};

pub const FREE_TRIAL_TEXT: &str = "EXPLORE FREE TRIAL";
pub const ONBOARDING_MAIN_TEXT: &str = "All your favorite anime. All in one place.";
pub const CREATE_ACCOUNT_TEXT: &str = "or Create Account";
pub const LOGIN_HEADER_TEXT: &str =
    "Classic anime jams, epic movies, and endless shows. They’re all here!";

/// Onboarding screen verifications
pub async fn onboarding(ctx: &TestContext) -> Result<()> {
    let screen = OnboardingScreen::new(ctx)?;
    screen.verify_logo_displayed().await?;
    screen.verify_login_button().await?;
    screen.verify_free_trial_text(FREE_TRIAL_TEXT).await?;
    screen.verify_main_text(ONBOARDING_MAIN_TEXT).await?;
    screen.verify_create_account_button(CREATE_ACCOUNT_TEXT).await?;
    Ok(())
}

/// Login flow for `user_type`
///
/// Navigating away from onboarding is an explicit step here, not a screen
/// construction side effect. A user type missing from the credentials file
/// skips the login task without failing.
pub async fn login(ctx: &TestContext, user_type: &str) -> Result<()> {
    let onboarding = OnboardingScreen::new(ctx)?;
    if onboarding.is_login_button_visible().await {
        onboarding.tap_login().await?;
    }

    let login = LoginScreen::new(ctx)?;
    login.verify_login_screen().await?;
    login.verify_header_section(LOGIN_HEADER_TEXT).await?;
    login.login_as_user(ctx.credentials(), user_type).await
}
