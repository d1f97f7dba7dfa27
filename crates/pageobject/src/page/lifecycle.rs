// Page lifecycle - navigation and load verification
//
// `load()` navigates and verifies; `verify()` runs the verification sequence
// against whatever the browser currently shows. The check order is fixed:
// before-hook, URL, title, element presence, after-hook. Hooks always run;
// the three middle checks honor their descriptor flags. The first failure
// propagates and the remaining checks do not run.

use crate::assertions::{assert_equals, assert_not_null};
use crate::error::{Error, Result};
use crate::page::Page;
use std::collections::BTreeSet;

impl Page {
    /// Navigates to the page and verifies it loaded.
    ///
    /// `url_override` replaces the descriptor's URL for this call. Fails
    /// with `MissingUrl` when neither is set. Returns `&self` so a test can
    /// chain straight into an interaction.
    pub async fn load(&self, url_override: Option<&str>) -> Result<&Self> {
        let url = match url_override.or(self.descriptor().url.as_deref()) {
            Some(url) => url.to_string(),
            None => return Err(Error::MissingUrl),
        };
        let absolute = resolve_url(self.driver().base_url().as_deref(), &url)?;
        tracing::debug!("Navigating to {}", absolute);
        self.driver().navigate(&absolute).await?;
        self.assert_is_loaded(Some(url.as_str())).await?;
        Ok(self)
    }

    /// Verifies the page is loaded, without navigating.
    pub async fn verify(&self) -> Result<()> {
        self.assert_is_loaded(None).await
    }

    /// The verification sequence. `url_override` carries `load()`'s
    /// effective URL so the URL assertion checks what was navigated to.
    async fn assert_is_loaded(&self, url_override: Option<&str>) -> Result<()> {
        tracing::debug!("Verifying page is loaded");
        self.hooks.before_load_assertions(self).await?;

        if !self.descriptor().do_not_check_url_on_load {
            // Verify-only pages may have no URL at all; nothing to compare then.
            if let Some(url) = url_override.or(self.descriptor().url.as_deref()) {
                self.assert_url(url).await?;
            }
        }

        if !self.descriptor().do_not_check_page_title_on_load {
            if let Some(title) = self.descriptor().page_title.as_deref() {
                self.assert_page_title(title).await?;
            }
        }

        if !self.descriptor().do_not_check_elements_on_load {
            self.assert_elements_present(
                self.map().iter(),
                &self.descriptor().exclude_elements_check_on_load,
            )
            .await?;
        }

        self.hooks.after_load_assertions(self).await
    }

    /// Asserts that the driver's current URL matches `url`.
    ///
    /// `url` goes through the same base-URL join as navigation, so a
    /// relative page URL compares against its absolute form. Public so a
    /// page can assert a custom URL outside the load sequence.
    pub async fn assert_url(&self, url: &str) -> Result<()> {
        let expected = resolve_url(self.driver().base_url().as_deref(), url)?;
        let actual = self.driver().current_url().await?;
        assert_equals(
            expected.as_str(),
            actual.as_str(),
            "Page URL does not match",
        )
    }

    /// Asserts that the driver's current title matches `title`.
    pub async fn assert_page_title(&self, title: &str) -> Result<()> {
        let actual = self.driver().current_title().await?;
        assert_equals(title, actual.as_str(), "Page title does not match")
    }

    /// Asserts that every given field's selector resolves to an element.
    ///
    /// Excluded field names are dropped from the working set before any
    /// resolution happens. A field whose selector matches nothing is a hard
    /// failure naming that field, never a silent skip.
    pub async fn assert_elements_present<'a, I>(
        &self,
        fields: I,
        excluded: &BTreeSet<String>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let remaining: Vec<_> = fields
            .into_iter()
            .filter(|(field, _)| !excluded.contains(*field))
            .collect();
        for (field, selector) in remaining {
            let element = self.driver().find(selector).await?;
            assert_not_null(
                element,
                &format!("Locator field \"{field}\" is not present."),
            )?;
        }
        Ok(())
    }
}

/// Resolves a configured URL to the absolute URL the session should see.
///
/// A URL already carrying an `http:`/`https:` scheme is used verbatim.
/// Anything else joins the session base URL: trailing slashes are stripped
/// from the base, leading slashes from the relative part, and exactly one
/// slash goes in between.
pub(crate) fn resolve_url(base: Option<&str>, url: &str) -> Result<String> {
    if url.starts_with("http:") || url.starts_with("https:") {
        return Ok(url.to_string());
    }
    let base = base.ok_or(Error::MissingUrl)?;
    Ok(format!(
        "{}/{}",
        base.trim_end_matches('/'),
        url.trim_start_matches('/')
    ))
}
