// Accessor tables - explicit per-model-type field access
//
// A reflective mirror would synthesize accessor names from field names at
// call time ("user_count" -> getUserCount/setUserCount) and invoke them
// dynamically. Here each model type registers its table once, as typed
// closures; the naming rule survives as documentation and in the error
// message raised when a mapped field has no table entry.

use crate::error::{Error, Result};
use serde_json::Value;

type Getter<M> = Box<dyn Fn(&M) -> Value + Send + Sync>;
type Setter<M> = Box<dyn Fn(&mut M, Value) + Send + Sync>;

/// Explicit table mapping field names to a getter/setter closure pair.
///
/// # Example
///
/// ```ignore
/// use pageobject_rs::{Accessors, Reflect};
/// use serde_json::json;
///
/// struct Stats {
///     user_count: u64,
/// }
///
/// impl Reflect for Stats {
///     fn accessors() -> Accessors<Self> {
///         Accessors::new().field(
///             "user_count",
///             |m| json!(m.user_count),
///             |m, v| m.user_count = v.as_u64().unwrap_or_default(),
///         )
///     }
/// }
/// ```
pub struct Accessors<M> {
    entries: Vec<(String, Getter<M>, Setter<M>)>,
}

impl<M> Accessors<M> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers the accessor pair for a field.
    ///
    /// Both directions are required: a field that can be pushed onto a page
    /// must also be readable back for equality assertions.
    pub fn field(
        mut self,
        name: impl Into<String>,
        getter: impl Fn(&M) -> Value + Send + Sync + 'static,
        setter: impl Fn(&mut M, Value) + Send + Sync + 'static,
    ) -> Self {
        self.entries
            .push((name.into(), Box::new(getter), Box::new(setter)));
        self
    }

    /// Looks up the getter for a field.
    pub fn getter(&self, field: &str) -> Result<&(dyn Fn(&M) -> Value + Send + Sync)> {
        self.entries
            .iter()
            .find(|(name, _, _)| name == field)
            .map(|(_, getter, _)| getter.as_ref())
            .ok_or_else(|| missing_accessor(field))
    }

    /// Looks up the setter for a field.
    pub fn setter(&self, field: &str) -> Result<&(dyn Fn(&mut M, Value) + Send + Sync)> {
        self.entries
            .iter()
            .find(|(name, _, _)| name == field)
            .map(|(_, _, setter)| setter.as_ref())
            .ok_or_else(|| missing_accessor(field))
    }

    /// Whether the table registers the field.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _, _)| name == field)
    }
}

impl<M> Default for Accessors<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Model types that expose their fields to the mirror.
///
/// The table is a plain value built by the implementation; nothing is
/// discovered at runtime.
pub trait Reflect: Sized {
    /// The model type's accessor table.
    fn accessors() -> Accessors<Self>;
}

fn missing_accessor(field: &str) -> Error {
    let camel = camel_field(field);
    Error::UnknownField(field.to_string()).context(format!(
        "model registers no get{camel}/set{camel} accessor pair"
    ))
}

/// Accessor-suffix form of a field name.
///
/// Splits on non-alphanumeric boundaries, capitalizes the first letter of
/// each segment, and concatenates: `user_count` becomes `UserCount`, the
/// suffix of the `getUserCount`/`setUserCount` accessor pair.
pub fn camel_field(field: &str) -> String {
    field
        .split(|c: char| !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
