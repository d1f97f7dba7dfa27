//! pageobject: Page-object abstraction layer for browser-driven acceptance tests
//!
//! A page object declares, once, which elements exist on a web page and what
//! it means for that page to be loaded; tests then interact with named
//! fields instead of repeating selector strings and navigation logic. The
//! crate supplies the page lifecycle (navigate, verify URL/title/element
//! presence, before/after hooks), a typed dispatch engine for acting on
//! mapped elements, and a model mirror that copies values between a domain
//! object and a page's fields.
//!
//! The browser itself stays behind the [`Driver`] trait: any
//! browser-automation client can be adapted by implementing `Driver`,
//! [`Element`], and [`SelectControl`].
//!
//! # Examples
//!
//! ## Declaring and loading a page
//!
//! ```ignore
//! use pageobject_rs::{LocatorMap, Page, PageDescriptor, Verb};
//!
//! let login = Page::builder(driver.clone())
//!     .descriptor(
//!         PageDescriptor::builder()
//!             .url("login.html")
//!             .page_title("Sign in")
//!             .build(),
//!     )
//!     .map(LocatorMap::from([
//!         ("username", "#username"),
//!         ("password", "#password"),
//!         ("submit", "button[type='submit']"),
//!     ]))
//!     .build()
//!     .await?;
//!
//! // Navigate, then assert URL, title, and that every mapped element exists.
//! login.load(None).await?;
//!
//! // Act on fields by name; selectors live in one place.
//! login.act_on_one("username", Verb::SetValue, &[json!("alice")]).await?;
//! login.act_on_one("submit", Verb::Click, &[]).await?;
//! ```
//!
//! ## Mirroring a domain model onto a page
//!
//! ```ignore
//! use pageobject_rs::{Accessors, ModelMirror, Reflect};
//! use serde_json::json;
//!
//! struct Person {
//!     real_name: String,
//! }
//!
//! impl Reflect for Person {
//!     fn accessors() -> Accessors<Self> {
//!         Accessors::new().field(
//!             "real_name",
//!             |p| json!(p.real_name),
//!             |p, v| p.real_name = v.as_str().unwrap_or_default().to_string(),
//!         )
//!     }
//! }
//!
//! let mirror = ModelMirror::new().skip("save");
//! mirror.set_from_model(&page, &person).await?;
//! mirror.assert_equals_model(&page, &person).await?;
//! ```

pub mod assertions;
pub mod driver;
mod error;
pub mod model;
pub mod page;

// Re-export error types
pub use error::{Error, Result};

// Re-export the driver capability boundary
pub use driver::{Driver, Element, SelectControl};

// Re-export the page API
pub use page::{
    DefaultHooks, EachDispatch, GroupVerb, LocatorMap, Page, PageBuilder, PageDescriptor,
    PageDescriptorBuilder, PageHooks, Verb,
};

// Re-export the model mirror
pub use model::{camel_field, Accessors, ModelMirror, Reflect};
