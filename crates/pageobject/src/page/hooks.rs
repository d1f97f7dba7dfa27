// PageHooks - per-page customization points
//
// Composition replaces subclassing: a concrete page supplies one hooks value
// instead of overriding protected methods. Every hook has a default, so the
// common case is a unit struct with one or two methods filled in.

use crate::error::Result;
use crate::page::dispatch::value_to_text;
use crate::page::{Page, Verb};
use async_trait::async_trait;
use serde_json::Value;

/// Customization points of a concrete page.
///
/// `before_load_assertions` and `after_load_assertions` bracket the
/// verification sequence and always run; they have no disable flag.
/// `set_field` and `field_value` are the seams the model mirror writes and
/// reads through; a page overrides them to translate between model values
/// and what the page actually displays (for example selecting an option by
/// its label instead of setting a raw value).
#[async_trait]
pub trait PageHooks: Send + Sync {
    /// Runs before any load assertion.
    async fn before_load_assertions(&self, _page: &Page) -> Result<()> {
        Ok(())
    }

    /// Runs after every load assertion has passed.
    async fn after_load_assertions(&self, _page: &Page) -> Result<()> {
        Ok(())
    }

    /// Writes a value into a mapped field.
    ///
    /// Default: set the value of the single resolved element.
    async fn set_field(&self, page: &Page, field: &str, value: &Value) -> Result<()> {
        let text = value_to_text(value);
        page.act_on_one(field, Verb::SetValue, &[Value::String(text)])
            .await?;
        Ok(())
    }

    /// Reads the displayed value of a mapped field.
    ///
    /// Default: the value of the single resolved element.
    async fn field_value(&self, page: &Page, field: &str) -> Result<Value> {
        page.act_on_one(field, Verb::Value, &[]).await
    }
}

/// Hooks implementation with every default: no extra assertions, raw value
/// semantics for field access.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

#[async_trait]
impl PageHooks for DefaultHooks {}
