// ModelMirror - bidirectional copy between a domain model and page fields
//
// The mirror walks the page's locator map, not the model: every mapped
// field is expected to have a registered accessor pair unless it is on the
// skip list. Values cross the boundary as JSON and are compared in their
// form-field text rendering, so a numeric model field round-trips through a
// text input.

mod accessors;

pub use accessors::{camel_field, Accessors, Reflect};

use crate::assertions::assert_equals;
use crate::error::Result;
use crate::page::dispatch::value_to_text;
use crate::page::Page;
use std::collections::BTreeSet;

/// Mirrors values between a [`Reflect`] model and a page's mapped fields.
///
/// Skipped fields are excluded from every direction: they are neither
/// written, read, nor compared.
///
/// # Example
///
/// ```ignore
/// use pageobject_rs::ModelMirror;
///
/// let mirror = ModelMirror::new().skip("save");
/// mirror.set_from_model(&page, &person).await?;
/// mirror.assert_equals_model(&page, &person).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelMirror {
    skip: BTreeSet<String>,
}

impl ModelMirror {
    /// Creates a mirror with an empty skip list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Excludes a field from mirroring in either direction.
    pub fn skip(mut self, field: impl Into<String>) -> Self {
        self.skip.insert(field.into());
        self
    }

    /// The fields excluded from mirroring.
    pub fn skip_fields(&self) -> &BTreeSet<String> {
        &self.skip
    }

    /// Copies every non-skipped mapped field's value from the model onto
    /// the page.
    ///
    /// Writing goes through [`Page::set_field_value`], so pages that
    /// translate values (an enumerated gender to its display label, say)
    /// keep their override in the loop. Fails with `UnknownField` when the
    /// model registers no accessor pair for a mapped field.
    pub async fn set_from_model<M: Reflect>(&self, page: &Page, model: &M) -> Result<()> {
        let accessors = M::accessors();
        for field in page.map().fields() {
            if self.skip.contains(field) {
                continue;
            }
            let value = accessors.getter(field)?(model);
            page.set_field_value(field, &value).await?;
        }
        Ok(())
    }

    /// Asserts that every non-skipped mapped field displays the model's
    /// value.
    ///
    /// Comparison is fail-fast per field: the first mismatch propagates and
    /// later fields are not read.
    pub async fn assert_equals_model<M: Reflect>(&self, page: &Page, model: &M) -> Result<()> {
        let accessors = M::accessors();
        for field in page.map().fields() {
            if self.skip.contains(field) {
                continue;
            }
            let expected = value_to_text(&accessors.getter(field)?(model));
            let actual = value_to_text(&page.field_value(field).await?);
            assert_equals(
                expected.as_str(),
                actual.as_str(),
                &format!("Field '{field}' does not match the model"),
            )?;
        }
        Ok(())
    }

    /// Copies every non-skipped mapped field's displayed value from the
    /// page into the model.
    pub async fn pull_into_model<M: Reflect>(&self, page: &Page, model: &mut M) -> Result<()> {
        let accessors = M::accessors();
        for field in page.map().fields() {
            if self.skip.contains(field) {
                continue;
            }
            let value = page.field_value(field).await?;
            accessors.setter(field)?(model, value);
        }
        Ok(())
    }
}
