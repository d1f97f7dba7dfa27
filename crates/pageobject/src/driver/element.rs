// Element handle capability
//
// A resolved element exposes the small set of named actions the dispatch
// verbs map onto. Handles are never cached by the core: every dispatch
// re-resolves its locator, so a handle only needs to stay valid for the
// single action performed on it.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A live element handle produced by [`Driver`](super::Driver) lookup.
#[async_trait]
pub trait Element: Send + Sync {
    /// Clicks the element.
    async fn click(&self) -> Result<()>;

    /// Returns the element's visible text.
    async fn text(&self) -> Result<String>;

    /// Returns the element's current value (form controls).
    async fn value(&self) -> Result<String>;

    /// Replaces the element's value (form controls).
    async fn set_value(&self, value: &str) -> Result<()>;

    /// Clears the element's value.
    async fn clear(&self) -> Result<()>;

    /// Returns the named attribute, or `None` when the attribute is absent.
    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    /// Whether the element is currently displayed.
    async fn is_displayed(&self) -> Result<bool>;

    /// Adapts this handle into a selectable-control wrapper.
    ///
    /// Fails with `InvalidArgument` when the element is not a selectable
    /// control.
    fn as_select(&self) -> Result<Arc<dyn SelectControl>>;
}

/// A selectable control (e.g. a `<select>` element).
///
/// Selection verbs adapt the resolved handle through
/// [`Element::as_select`] before applying.
#[async_trait]
pub trait SelectControl: Send + Sync {
    /// Selects the option with the given visible label.
    async fn select_by_label(&self, label: &str) -> Result<()>;

    /// Selects the option with the given value attribute.
    async fn select_by_value(&self, value: &str) -> Result<()>;

    /// Returns the visible label of the currently selected option.
    async fn selected_label(&self) -> Result<String>;
}
