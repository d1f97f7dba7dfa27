// Driver capability boundary
//
// The narrow interface the page-object core consumes. A real implementation
// wraps a browser-automation session (WebDriver, CDP, ...); the core never
// manages sessions or speaks a wire protocol itself.
//
// Architecture:
// - `Driver` is the session: navigation, URL/title inspection, element lookup
//   in the CSS dialect, and a generic pass-through command channel.
// - `Element` is a resolved handle; `SelectControl` is the adaptation of a
//   handle into a selectable control.
// - All traits are object-safe and `Send + Sync` so one session can be shared
//   by reference across page instances for the length of a test run.

mod element;

pub use element::{Element, SelectControl};

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Browser-automation session consumed by the page-object core.
///
/// Every operation is a blocking round-trip to the underlying session,
/// awaited sequentially; the core adds no concurrency of its own. The XPath
/// dialect is reachable only through [`Driver::find_by_xpath`]; the map
/// dispatcher resolves exclusively through the CSS-dialect methods.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigates the session to an absolute URL.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Returns the URL the session currently reports.
    async fn current_url(&self) -> Result<String>;

    /// Returns the title the session currently reports.
    async fn current_title(&self) -> Result<String>;

    /// Session-level base URL that relative page URLs are joined to.
    fn base_url(&self) -> Option<String>;

    /// Finds the first element matching a CSS-dialect selector.
    ///
    /// Returns `None` when nothing matches; the caller decides whether that
    /// is an error or an assertion failure.
    async fn find(&self, selector: &str) -> Result<Option<Arc<dyn Element>>>;

    /// Finds every element matching a CSS-dialect selector, in document order.
    async fn find_all(&self, selector: &str) -> Result<Vec<Arc<dyn Element>>>;

    /// Finds the first element matching an XPath-dialect selector.
    async fn find_by_xpath(&self, selector: &str) -> Result<Option<Arc<dyn Element>>>;

    /// Runs a driver-level command that the page object does not interpret.
    ///
    /// This is the pass-through channel: the name and arguments are
    /// forwarded unchanged and the returned value propagates unchanged.
    async fn run_command(&self, name: &str, args: Vec<Value>) -> Result<Value>;
}
