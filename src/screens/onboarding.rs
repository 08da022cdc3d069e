//! Onboarding screen: the first screen shown on a fresh app start

use crate::common::Result;
use crate::context::TestContext;
use crate::driver::wait::WaitPolicy;

use super::locator::ElementLocator;
use super::{expect_displayed, expect_enabled, expect_text};

pub struct OnboardingScreen {
    wait: WaitPolicy,
}

impl OnboardingScreen {
    const LOGO: ElementLocator =
        ElementLocator::ResourceId("com.crunchyroll.crunchyroid:id/onboarding_logo");
    const LOGIN_BUTTON: ElementLocator =
        ElementLocator::ResourceId("com.crunchyroll.crunchyroid:id/onboarding_log_in");
    const FREE_TRIAL: ElementLocator = ElementLocator::ResourceId(
        "com.crunchyroll.crunchyroid:id/onboarding_explore_free_trial_text_view",
    );
    const MAIN_TEXT: ElementLocator =
        ElementLocator::ResourceId("com.crunchyroll.crunchyroid:id/onboarding_main_text");
    const CREATE_ACCOUNT: ElementLocator =
        ElementLocator::ResourceId("com.crunchyroll.crunchyroid:id/onboarding_create_account");

    pub fn new(ctx: &TestContext) -> Result<Self> {
        tracing::debug!("Initializing onboarding screen");
        Ok(Self {
            wait: ctx.wait_policy()?,
        })
    }

    // === Verification operations ===

    pub async fn verify_logo_displayed(&self) -> Result<()> {
        let logo = self.wait.visible(&Self::LOGO).await?;
        expect_displayed("onboarding logo", logo.is_displayed().await?)?;
        tracing::info!("Onboarding logo is displayed");
        Ok(())
    }

    pub async fn verify_login_button(&self) -> Result<()> {
        let button = self.wait.visible(&Self::LOGIN_BUTTON).await?;
        expect_displayed("login button", button.is_displayed().await?)?;
        expect_enabled("login button", button.is_enabled().await?)?;
        tracing::info!("Login button is displayed and enabled");
        Ok(())
    }

    pub async fn verify_free_trial_text(&self, expected: &str) -> Result<()> {
        let free_trial = self.wait.visible(&Self::FREE_TRIAL).await?;
        expect_displayed("free trial button", free_trial.is_displayed().await?)?;
        let actual = free_trial.text().await?;
        expect_text("free trial text", expected, &actual, true)?;
        tracing::info!("Free trial text matches the expected text");
        Ok(())
    }

    pub async fn verify_main_text(&self, expected: &str) -> Result<()> {
        let main_text = self.wait.visible(&Self::MAIN_TEXT).await?;
        expect_displayed("onboarding main text", main_text.is_displayed().await?)?;
        let actual = main_text.text().await?;
        expect_text("onboarding main text", expected, &actual, true)?;
        tracing::info!("Onboarding main text matches the expected text");
        Ok(())
    }

    pub async fn verify_create_account_button(&self, expected: &str) -> Result<()> {
        let create_account = self.wait.visible(&Self::CREATE_ACCOUNT).await?;
        expect_displayed("create account button", create_account.is_displayed().await?)?;
        expect_enabled("create account button", create_account.is_enabled().await?)?;
        let actual = create_account.text().await?;
        expect_text("create account text", expected, &actual, true)?;
        tracing::info!("Create account button is displayed and its text matches");
        Ok(())
    }

    // === Task operations ===

    /// Probe used by the orchestration layer to decide whether onboarding
    /// still owns the screen before navigating to login. Spends a full wait
    /// budget when the button never shows up.
    pub async fn is_login_button_visible(&self) -> bool {
        self.wait.visible(&Self::LOGIN_BUTTON).await.is_ok()
    }

    pub async fn tap_login(&self) -> Result<()> {
        let button = self.wait.interactable(&Self::LOGIN_BUTTON).await?;
        button.click().await?;
        tracing::info!("Tapped log in");
        Ok(())
    }
}
