// Dispatch engine - locator indirection without a method per (action, field)
//
// Classic page-object libraries intercept unrecognized calls named
// `<verb><Suffix>ByMap` and parse the suffix out of the call name. Here the
// dispatch mode is an explicit operation instead: `act_on_one` targets the
// single resolved element, `act_on_each` iterates the match set,
// `act_on_all` applies one group verb to the whole set, and `passthrough`
// forwards anything else to the driver unchanged.
//
// No element handle is cached: every dispatch re-resolves its locator, so a
// page reload or DOM mutation between calls cannot leave a stale handle in
// play.

use crate::driver::Element;
use crate::error::{Error, Result};
use crate::page::Page;
use serde_json::Value;
use std::sync::Arc;

/// Per-element action vocabulary of the dispatch engine.
///
/// Arguments travel as JSON values next to the verb; results come back as
/// JSON values (`Value::Null` for pure actions). Selection verbs adapt the
/// resolved handle into a select control before applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Click the element
    Click,
    /// Read the element's visible text
    Text,
    /// Read the element's value
    Value,
    /// Set the element's value; one string argument
    SetValue,
    /// Clear the element's value
    Clear,
    /// Read an attribute; one string argument (the attribute name)
    Attribute,
    /// Whether the element is displayed
    IsDisplayed,
    /// Select an option by visible label; one string argument
    SelectByLabel,
    /// Select an option by value; one string argument
    SelectByValue,
}

impl Verb {
    /// The verb's name as it appears in messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Verb::Click => "click",
            Verb::Text => "text",
            Verb::Value => "value",
            Verb::SetValue => "set_value",
            Verb::Clear => "clear",
            Verb::Attribute => "attribute",
            Verb::IsDisplayed => "is_displayed",
            Verb::SelectByLabel => "select_by_label",
            Verb::SelectByValue => "select_by_value",
        }
    }

    /// Number of arguments the verb consumes.
    fn arity(&self) -> usize {
        match self {
            Verb::SetValue
            | Verb::Attribute
            | Verb::SelectByLabel
            | Verb::SelectByValue => 1,
            _ => 0,
        }
    }
}

/// Collective operations applied once to the whole match set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupVerb {
    /// Number of matched elements
    Count,
    /// Visible text of every matched element, in document order
    Texts,
}

impl Page {
    /// Resolves `field` to exactly one element and applies `verb` to it.
    ///
    /// Fails with `UnknownField` when the field is not mapped and
    /// `ElementNotFound` when the selector matches nothing.
    pub async fn act_on_one(&self, field: &str, verb: Verb, args: &[Value]) -> Result<Value> {
        let selector = self.map().get(field)?;
        tracing::debug!(
            "Dispatching '{}' on field '{}' ({})",
            verb.name(),
            field,
            selector
        );
        let element = self
            .driver()
            .find(selector)
            .await?
            .ok_or_else(|| not_found(field, selector))?;
        apply_verb(element, verb, args).await
    }

    /// Resolves `field` to the full match set and applies `verb` per element.
    ///
    /// How much of the set is touched depends on the descriptor's
    /// [`EachDispatch`](crate::page::EachDispatch) setting: `Legacy` applies
    /// the verb to the first matched element only (the compatibility
    /// short-circuit), `Strict` to every match. An empty match set fails
    /// with `ElementNotFound` in both modes.
    pub async fn act_on_each(&self, field: &str, verb: Verb, args: &[Value]) -> Result<Vec<Value>> {
        use crate::page::EachDispatch;

        let selector = self.map().get(field)?;
        tracing::debug!(
            "Dispatching '{}' on each match of field '{}' ({})",
            verb.name(),
            field,
            selector
        );
        let elements = self.driver().find_all(selector).await?;
        if elements.is_empty() {
            return Err(not_found(field, selector));
        }

        let limit = match self.descriptor().each_dispatch {
            EachDispatch::Legacy => 1,
            EachDispatch::Strict => elements.len(),
        };
        let mut results = Vec::with_capacity(limit);
        for element in elements.into_iter().take(limit) {
            results.push(apply_verb(element, verb, args).await?);
        }
        Ok(results)
    }

    /// Resolves `field` to the full match set and applies one group verb to
    /// the whole set.
    ///
    /// An empty match set is a valid group: counting it yields zero.
    pub async fn act_on_all(&self, field: &str, verb: GroupVerb) -> Result<Value> {
        let selector = self.map().get(field)?;
        let elements = self.driver().find_all(selector).await?;
        match verb {
            GroupVerb::Count => Ok(Value::from(elements.len())),
            GroupVerb::Texts => {
                let mut texts = Vec::with_capacity(elements.len());
                for element in &elements {
                    texts.push(Value::String(element.text().await?));
                }
                Ok(Value::Array(texts))
            }
        }
    }

    /// Forwards an operation the page object does not recognize straight to
    /// the driver.
    ///
    /// The name and arguments are passed unchanged and the driver's return
    /// value propagates unchanged, so driver-level operations (scripting,
    /// window management, ...) stay reachable through the page.
    pub async fn passthrough(&self, name: &str, args: Vec<Value>) -> Result<Value> {
        tracing::debug!("Passing '{}' through to the driver", name);
        self.driver().run_command(name, args).await
    }
}

fn not_found(field: &str, selector: &str) -> Error {
    Error::ElementNotFound(format!("field '{field}' (selector '{selector}')"))
}

async fn apply_verb(element: Arc<dyn Element>, verb: Verb, args: &[Value]) -> Result<Value> {
    if args.len() != verb.arity() {
        return Err(Error::InvalidArgument(format!(
            "verb '{}' takes {} argument(s), got {}",
            verb.name(),
            verb.arity(),
            args.len()
        )));
    }

    match verb {
        Verb::Click => {
            element.click().await?;
            Ok(Value::Null)
        }
        Verb::Text => Ok(Value::String(element.text().await?)),
        Verb::Value => Ok(Value::String(element.value().await?)),
        Verb::SetValue => {
            element.set_value(str_arg(verb, args, 0)?).await?;
            Ok(Value::Null)
        }
        Verb::Clear => {
            element.clear().await?;
            Ok(Value::Null)
        }
        Verb::Attribute => {
            let attribute = element.attribute(str_arg(verb, args, 0)?).await?;
            Ok(attribute.map(Value::String).unwrap_or(Value::Null))
        }
        Verb::IsDisplayed => Ok(Value::Bool(element.is_displayed().await?)),
        Verb::SelectByLabel => {
            let select = element.as_select()?;
            select.select_by_label(str_arg(verb, args, 0)?).await?;
            Ok(Value::Null)
        }
        Verb::SelectByValue => {
            let select = element.as_select()?;
            select.select_by_value(str_arg(verb, args, 0)?).await?;
            Ok(Value::Null)
        }
    }
}

fn str_arg<'a>(verb: Verb, args: &'a [Value], index: usize) -> Result<&'a str> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s),
        other => Err(Error::InvalidArgument(format!(
            "verb '{}' expects a string argument at position {index}, got {other:?}",
            verb.name()
        ))),
    }
}

/// Renders a JSON value the way it would appear in a form field.
///
/// Strings pass through without quoting; everything else uses its JSON
/// rendering. Model mirroring compares page and model values through this
/// so a numeric model field can round-trip through a text input.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
