// PageDescriptor - per-page-type load/verify configuration
//
// Fixed when the page type is defined; the builder on `Page` can override
// `url` and `page_title` per instance. Replaces the protected properties a
// subclass would declare in an inheritance-based design.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Semantics of the each-element dispatch mode.
///
/// Earlier releases applied the verb to the first matched element and
/// returned from inside the iteration loop, so only one element was ever
/// touched. That behavior is almost certainly an accident, but suites have
/// come to depend on it, so it stays selectable as [`EachDispatch::Legacy`]
/// (the default) instead of being fixed silently;
/// [`EachDispatch::Strict`] applies the verb to every match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EachDispatch {
    /// Apply the verb to the first matched element only.
    #[default]
    Legacy,
    /// Apply the verb to every matched element.
    Strict,
}

/// Load/verification contract of a concrete page type.
///
/// `Default` yields a page with no URL, no title, no automatic construction
/// behavior, and every verification check enabled.
///
/// # Example
///
/// ```ignore
/// use pageobject_rs::PageDescriptor;
///
/// let descriptor = PageDescriptor::builder()
///     .url("foo123.html")
///     .page_title("Foo 123")
///     .load_on_construct(true)
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDescriptor {
    /// Page URL, absolute or relative to the session base URL
    pub url: Option<String>,
    /// Expected page title
    pub page_title: Option<String>,
    /// Run a full `load()` when the page instance is built
    pub load_on_construct: bool,
    /// Run `verify()` (no navigation) when the page instance is built
    pub check_is_loaded_on_construct: bool,
    /// Skip the URL assertion during verification
    pub do_not_check_url_on_load: bool,
    /// Skip the title assertion during verification
    pub do_not_check_page_title_on_load: bool,
    /// Skip the element-presence sweep entirely during verification
    pub do_not_check_elements_on_load: bool,
    /// Fields excluded from the element-presence sweep
    pub exclude_elements_check_on_load: BTreeSet<String>,
    /// Semantics of the each-element dispatch mode
    pub each_dispatch: EachDispatch,
}

impl PageDescriptor {
    /// Creates a new builder for PageDescriptor
    pub fn builder() -> PageDescriptorBuilder {
        PageDescriptorBuilder::default()
    }
}

/// Builder for PageDescriptor
#[derive(Debug, Clone, Default)]
pub struct PageDescriptorBuilder {
    descriptor: PageDescriptor,
}

impl PageDescriptorBuilder {
    /// Sets the page URL (absolute or relative to the session base URL)
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.descriptor.url = Some(url.into());
        self
    }

    /// Sets the expected page title
    pub fn page_title(mut self, title: impl Into<String>) -> Self {
        self.descriptor.page_title = Some(title.into());
        self
    }

    /// Run a full `load()` when the page instance is built
    pub fn load_on_construct(mut self, enabled: bool) -> Self {
        self.descriptor.load_on_construct = enabled;
        self
    }

    /// Run `verify()` without navigating when the page instance is built
    pub fn check_is_loaded_on_construct(mut self, enabled: bool) -> Self {
        self.descriptor.check_is_loaded_on_construct = enabled;
        self
    }

    /// Skip the URL assertion during verification
    pub fn do_not_check_url_on_load(mut self, enabled: bool) -> Self {
        self.descriptor.do_not_check_url_on_load = enabled;
        self
    }

    /// Skip the title assertion during verification
    pub fn do_not_check_page_title_on_load(mut self, enabled: bool) -> Self {
        self.descriptor.do_not_check_page_title_on_load = enabled;
        self
    }

    /// Skip the element-presence sweep during verification
    pub fn do_not_check_elements_on_load(mut self, enabled: bool) -> Self {
        self.descriptor.do_not_check_elements_on_load = enabled;
        self
    }

    /// Excludes a field from the element-presence sweep
    pub fn exclude_element_check(mut self, field: impl Into<String>) -> Self {
        self.descriptor
            .exclude_elements_check_on_load
            .insert(field.into());
        self
    }

    /// Sets the each-element dispatch semantics
    pub fn each_dispatch(mut self, mode: EachDispatch) -> Self {
        self.descriptor.each_dispatch = mode;
        self
    }

    /// Builds the PageDescriptor
    pub fn build(self) -> PageDescriptor {
        self.descriptor
    }
}
