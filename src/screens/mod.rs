//! Screen objects (page-object pattern)
//!
//! Each screen binds the session's wait policy at construction and exposes
//! two kinds of operations: verifications (wait for an element, then assert
//! on it, failing with expected vs. actual) and tasks (UI action sequences
//! with no built-in retry; any element failure from the session propagates).

pub mod locator;
pub mod login;
pub mod onboarding;

pub use login::LoginScreen;
pub use onboarding::OnboardingScreen;

use crate::common::{Error, Result};

/// Text assertion reporting both sides on mismatch
fn expect_text(what: &str, expected: &str, actual: &str, ignore_case: bool) -> Result<()> {
    let matched = if ignore_case {
        actual.eq_ignore_ascii_case(expected)
    } else {
        actual == expected
    };
    if matched {
        Ok(())
    } else {
        Err(Error::assertion(what, expected, actual))
    }
}

fn expect_displayed(what: &str, displayed: bool) -> Result<()> {
    if displayed {
        Ok(())
    } else {
        Err(Error::assertion(what, "displayed", "not displayed"))
    }
}

fn expect_enabled(what: &str, enabled: bool) -> Result<()> {
    if enabled {
        Ok(())
    } else {
        Err(Error::assertion(what, "enabled", "disabled"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_mismatch_reports_both_sides() {
        let err = expect_text("header text", "expected words", "actual words", false).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("expected words"), "{message}");
        assert!(message.contains("actual words"), "{message}");
    }

    #[test]
    fn case_insensitive_match_passes() {
        expect_text("button text", "EXPLORE FREE TRIAL", "Explore Free Trial", true).unwrap();
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        assert!(expect_text("button text", "Log in", "log in", false).is_err());
    }
}
