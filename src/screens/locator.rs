//! Element locator strategies
//!
//! Android-native elements are addressed either by resource id or by an
//! XPath query. The W3C wire protocol has no first-class resource-id
//! strategy, so resource ids are rendered as XPath attribute queries.
//! Locators are static per screen object.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementLocator {
    /// Android resource id, e.g. `com.example:id/login_button`
    ResourceId(&'static str),
    /// Raw XPath query
    XPath(&'static str),
}

impl ElementLocator {
    /// XPath query sent over the wire
    pub fn query(&self) -> Cow<'static, str> {
        match self {
            Self::ResourceId(id) => Cow::Owned(format!("//*[@resource-id='{id}']")),
            Self::XPath(query) => Cow::Borrowed(query),
        }
    }
}

impl fmt::Display for ElementLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceId(id) => write!(f, "element with resource id '{id}'"),
            Self::XPath(query) => write!(f, "element matching '{query}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_id_renders_as_xpath_query() {
        let locator = ElementLocator::ResourceId("com.example:id/login");
        assert_eq!(locator.query(), "//*[@resource-id='com.example:id/login']");
    }

    #[test]
    fn xpath_passes_through() {
        let locator = ElementLocator::XPath("//*[@resource-id='header']");
        assert_eq!(locator.query(), "//*[@resource-id='header']");
    }

    #[test]
    fn display_names_the_strategy() {
        let by_id = ElementLocator::ResourceId("com.example:id/login");
        assert_eq!(
            by_id.to_string(),
            "element with resource id 'com.example:id/login'"
        );
        let by_xpath = ElementLocator::XPath("//x");
        assert_eq!(by_xpath.to_string(), "element matching '//x'");
    }
}
