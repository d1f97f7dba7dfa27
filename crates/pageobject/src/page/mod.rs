// Page - the page-object instance
//
// A page is composition, not inheritance: a driver handle, a locator map, a
// descriptor, and a hooks value. Concrete pages are ordinary structs that
// hold (or build) a `Page` and add domain methods on top; nothing is
// subclassed.

mod descriptor;
pub(crate) mod dispatch;
mod hooks;
mod lifecycle;
mod locator_map;

pub use descriptor::{EachDispatch, PageDescriptor, PageDescriptorBuilder};
pub use dispatch::{GroupVerb, Verb};
pub use hooks::{DefaultHooks, PageHooks};
pub use locator_map::LocatorMap;

use crate::driver::{Driver, Element};
use crate::error::{Error, Result};
use serde_json::Value;
use std::sync::Arc;

/// A page-object instance bound to a driver session.
///
/// The session is shared, not owned: its lifetime exceeds the page, and the
/// same `Arc` is handed from page instance to page instance as a test moves
/// through the application. One page instance is created per
/// navigation/interaction sequence and simply dropped when the test is done
/// with it.
///
/// # Example
///
/// ```ignore
/// use pageobject_rs::{LocatorMap, Page, PageDescriptor, Verb};
///
/// let home = Page::builder(driver.clone())
///     .descriptor(
///         PageDescriptor::builder()
///             .url("/")
///             .page_title("Example!")
///             .build(),
///     )
///     .map(LocatorMap::from([
///         ("header", "#title"),
///         ("real_name", "#your_name"),
///         ("save", "#form_submit"),
///     ]))
///     .build()
///     .await?;
///
/// home.load(None).await?;
/// home.act_on_one("save", Verb::Click, &[]).await?;
/// ```
pub struct Page {
    driver: Arc<dyn Driver>,
    map: LocatorMap,
    descriptor: PageDescriptor,
    hooks: Box<dyn PageHooks>,
}

impl Page {
    /// Creates a new builder bound to a driver session.
    pub fn builder(driver: Arc<dyn Driver>) -> PageBuilder {
        PageBuilder {
            driver,
            map: LocatorMap::new(),
            descriptor: PageDescriptor::default(),
            hooks: Box::new(DefaultHooks),
            url_override: None,
            title_override: None,
        }
    }

    /// The shared driver session.
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// The page's locator map.
    pub fn map(&self) -> &LocatorMap {
        &self.map
    }

    /// The page's descriptor.
    pub fn descriptor(&self) -> &PageDescriptor {
        &self.descriptor
    }

    /// Resolves a mapped field to its element handle.
    pub async fn by_map(&self, field: &str) -> Result<Arc<dyn Element>> {
        let selector = self.map.get(field)?;
        self.driver.find(selector).await?.ok_or_else(|| {
            Error::ElementNotFound(format!("field '{field}' (selector '{selector}')"))
        })
    }

    /// Returns a mapped field's selector string.
    pub fn locator(&self, field: &str) -> Result<&str> {
        self.map.get(field)
    }

    /// Adds a field mapping at runtime.
    pub fn add_element(
        &mut self,
        field: impl Into<String>,
        selector: impl Into<String>,
    ) -> Result<()> {
        self.map.add(field, selector)
    }

    /// Removes a field mapping at runtime.
    pub fn remove_element(&mut self, field: &str) -> Result<()> {
        self.map.remove(field)
    }

    /// Resolves an element through the XPath dialect.
    ///
    /// This accessor is deliberately separate from the map dispatcher,
    /// which only ever speaks the CSS dialect.
    pub async fn by_xpath(&self, selector: &str) -> Result<Arc<dyn Element>> {
        self.driver
            .find_by_xpath(selector)
            .await?
            .ok_or_else(|| Error::ElementNotFound(format!("xpath '{selector}'")))
    }

    /// Writes a value into a mapped field through the page's hooks.
    ///
    /// This is the seam the model mirror pushes through; pages with custom
    /// field semantics override [`PageHooks::set_field`].
    pub async fn set_field_value(&self, field: &str, value: &Value) -> Result<()> {
        self.hooks.set_field(self, field, value).await
    }

    /// Reads a mapped field's displayed value through the page's hooks.
    pub async fn field_value(&self, field: &str) -> Result<Value> {
        self.hooks.field_value(self, field).await
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("descriptor", &self.descriptor)
            .field("map", &self.map)
            .finish()
    }
}

/// Builder for [`Page`].
///
/// `build()` applies the descriptor's construction behavior: a page with
/// `load_on_construct` navigates and verifies before the instance is
/// returned; one with `check_is_loaded_on_construct` verifies the current
/// browser state without navigating; otherwise nothing runs until the
/// caller invokes [`Page::load`] or [`Page::verify`] explicitly.
pub struct PageBuilder {
    driver: Arc<dyn Driver>,
    map: LocatorMap,
    descriptor: PageDescriptor,
    hooks: Box<dyn PageHooks>,
    url_override: Option<String>,
    title_override: Option<String>,
}

impl PageBuilder {
    /// Sets the page descriptor.
    pub fn descriptor(mut self, descriptor: PageDescriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    /// Sets the locator map.
    pub fn map(mut self, map: LocatorMap) -> Self {
        self.map = map;
        self
    }

    /// Sets the page hooks.
    pub fn hooks(mut self, hooks: impl PageHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Overrides the descriptor's URL for this instance.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url_override = Some(url.into());
        self
    }

    /// Overrides the descriptor's page title for this instance.
    pub fn page_title(mut self, title: impl Into<String>) -> Self {
        self.title_override = Some(title.into());
        self
    }

    /// Builds the page and applies the construction behavior.
    ///
    /// Fails with `InvalidArgument` when the descriptor requests both
    /// `load_on_construct` and `check_is_loaded_on_construct`: only one may
    /// drive automatic verification.
    pub async fn build(self) -> Result<Page> {
        let mut descriptor = self.descriptor;
        if descriptor.load_on_construct && descriptor.check_is_loaded_on_construct {
            return Err(Error::InvalidArgument(
                "load_on_construct and check_is_loaded_on_construct are mutually exclusive"
                    .to_string(),
            ));
        }
        if let Some(url) = self.url_override {
            descriptor.url = Some(url);
        }
        if let Some(title) = self.title_override {
            descriptor.page_title = Some(title);
        }

        let page = Page {
            driver: self.driver,
            map: self.map,
            descriptor,
            hooks: self.hooks,
        };

        if page.descriptor.load_on_construct {
            page.load(None).await?;
        } else if page.descriptor.check_is_loaded_on_construct {
            page.verify().await?;
        }
        Ok(page)
    }
}
