// Fixture pages and models shared across suites
//
// The "example page" family mirrors a small three-field page; the person
// model and its form page exercise the mirror seams, including a select
// control whose displayed labels differ from the model's stored values.

use super::scripted::{ScriptedDriver, ScriptedElement};
use async_trait::async_trait;
use pageobject_rs::{
    Accessors, LocatorMap, Page, PageDescriptor, PageHooks, Reflect, Result, Verb,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

/// Descriptor of the canonical example page: relative URL and a title.
pub fn example_descriptor() -> PageDescriptor {
    PageDescriptor::builder()
        .url("foo123.html")
        .page_title("Foo 123")
        .build()
}

/// Map of the canonical example page.
pub fn example_map() -> LocatorMap {
    LocatorMap::from([
        ("field_one", "field_1"),
        ("field_two", "field_2"),
        ("field_three", "field_3"),
    ])
}

/// Places an input under each of the example map's selectors.
pub fn seed_example_elements(driver: &ScriptedDriver) {
    driver.place("field_1", ScriptedElement::input());
    driver.place("field_2", ScriptedElement::input());
    driver.place("field_3", ScriptedElement::input());
}

/// A driver already set up so the example page verifies cleanly.
pub fn ready_example_driver() -> Arc<ScriptedDriver> {
    let driver = Arc::new(ScriptedDriver::with_base_url("http://localhost/"));
    driver.set_current_url("http://localhost/foo123.html");
    driver.set_current_title("Foo 123");
    seed_example_elements(&driver);
    driver
}

/// Hooks that count how often each load hook ran.
#[derive(Default)]
pub struct CountingHooks {
    pub before: Arc<Mutex<usize>>,
    pub after: Arc<Mutex<usize>>,
}

impl CountingHooks {
    pub fn new() -> (Self, Arc<Mutex<usize>>, Arc<Mutex<usize>>) {
        let hooks = Self::default();
        let before = Arc::clone(&hooks.before);
        let after = Arc::clone(&hooks.after);
        (hooks, before, after)
    }
}

#[async_trait]
impl PageHooks for CountingHooks {
    async fn before_load_assertions(&self, _page: &Page) -> Result<()> {
        *self.before.lock() += 1;
        Ok(())
    }

    async fn after_load_assertions(&self, _page: &Page) -> Result<()> {
        *self.after.lock() += 1;
        Ok(())
    }
}

/// Gender of a [`Person`], stored as a number and displayed as a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn number(self) -> u64 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
            Gender::Other => 2,
        }
    }

    pub fn from_number(number: u64) -> Self {
        match number {
            0 => Gender::Male,
            1 => Gender::Female,
            _ => Gender::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

/// Domain model mirrored onto the person form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub real_name: String,
    pub gender: Gender,
}

impl Reflect for Person {
    fn accessors() -> Accessors<Self> {
        Accessors::new()
            .field(
                "real_name",
                |p: &Person| json!(p.real_name),
                |p, v| p.real_name = v.as_str().unwrap_or_default().to_string(),
            )
            .field(
                "gender",
                |p| json!(p.gender.number()),
                |p, v| p.gender = Gender::from_number(v.as_u64().unwrap_or_default()),
            )
    }
}

/// Map of the person form: a text input and a gender select.
pub fn person_form_map() -> LocatorMap {
    LocatorMap::from([("real_name", "#your_name"), ("gender", "#gender")])
}

/// Places the person form's elements and returns the gender select handle.
pub fn seed_person_form(driver: &ScriptedDriver) -> (ScriptedElement, ScriptedElement) {
    let name = ScriptedElement::input();
    let gender = ScriptedElement::select(&[("0", "Male"), ("1", "Female"), ("2", "Other")]);
    driver.place("#your_name", name.clone());
    driver.place("#gender", gender.clone());
    (name, gender)
}

/// Hooks of the person form: the gender field stores a number in the model
/// but displays a label, so writing selects by label and reading translates
/// the selected label back to the number.
pub struct PersonFormHooks;

#[async_trait]
impl PageHooks for PersonFormHooks {
    async fn set_field(&self, page: &Page, field: &str, value: &Value) -> Result<()> {
        if field == "gender" {
            let gender = Gender::from_number(value.as_u64().unwrap_or_default());
            page.act_on_one(field, Verb::SelectByLabel, &[json!(gender.label())])
                .await?;
            return Ok(());
        }
        let text = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        page.act_on_one(field, Verb::SetValue, &[Value::String(text)])
            .await?;
        Ok(())
    }

    async fn field_value(&self, page: &Page, field: &str) -> Result<Value> {
        if field == "gender" {
            let value = page.act_on_one(field, Verb::Value, &[]).await?;
            let number: u64 = value.as_str().and_then(|s| s.parse().ok()).unwrap_or(2);
            return Ok(json!(number));
        }
        page.act_on_one(field, Verb::Value, &[]).await
    }
}
