// Example: submit a person form and verify the view page
//
// Reworks the classic page-object demo flow: fill the home page form from a
// domain model, save, then assert the view page displays the same data. The
// browser is a tiny in-process stub here so the example runs standalone;
// swap `StubSite` for an adapter over a real browser-automation client to
// drive an actual site.
//
// Run with: cargo run --example form_submit

use async_trait::async_trait;
use pageobject_rs::assertions::assert_equals;
use pageobject_rs::{
    Accessors, Driver, Element, Error, LocatorMap, ModelMirror, Page, PageDescriptor, PageHooks,
    Reflect, Result, SelectControl, Verb,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Domain model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    fn number(self) -> u64 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
            Gender::Other => 2,
        }
    }

    fn from_number(number: u64) -> Self {
        match number {
            0 => Gender::Male,
            1 => Gender::Female,
            _ => Gender::Other,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    real_name: String,
    gender: Gender,
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

// ---------------------------------------------------------------------------
// Page objects
// ---------------------------------------------------------------------------

/// Home page: the person form. The gender field is a select control, so the
/// mirror writes it by visible label rather than raw value.
struct HomePageHooks;

#[async_trait]
impl PageHooks for HomePageHooks {
    async fn after_load_assertions(&self, page: &Page) -> Result<()> {
        let header = page.act_on_one("header", Verb::Text, &[]).await?;
        assert_equals("Example!", header.as_str().unwrap_or_default(), "Header")
    }

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
        let value = page.act_on_one(field, Verb::Value, &[]).await?;
        if field == "gender" {
            let number: u64 = value.as_str().and_then(|s| s.parse().ok()).unwrap_or(2);
            return Ok(json!(number));
        }
        Ok(value)
    }
}

async fn home_page(driver: Arc<StubSite>) -> Result<Page> {
    Page::builder(driver)
        .descriptor(
            PageDescriptor::builder()
                .url("/")
                .page_title("Example!")
                .build(),
        )
        .map(LocatorMap::from([
            ("header", "#title"),
            ("real_name", "#your_name"),
            ("gender", "#gender"),
            ("save", "#form_submit"),
        ]))
        .hooks(HomePageHooks)
        .build()
        .await
}

/// View page: read-only spans showing what was submitted. Values are
/// displayed as text, so reading goes through `Verb::Text` and the gender
/// label is translated back to its model number.
struct ViewPageHooks;

#[async_trait]
impl PageHooks for ViewPageHooks {
    async fn after_load_assertions(&self, page: &Page) -> Result<()> {
        // The header lives outside the CSS map; resolve it through the
        // XPath accessor.
        let header = page.by_xpath("//h1[@id='title']").await?;
        assert_equals(
            "Viewing your data",
            header.text().await?.as_str(),
            "Header",
        )
    }

    async fn field_value(&self, page: &Page, field: &str) -> Result<Value> {
        let text = page.act_on_one(field, Verb::Text, &[]).await?;
        if field == "gender" {
            let number = match text.as_str().unwrap_or_default() {
                "Male" => 0,
                "Female" => 1,
                _ => 2,
            };
            return Ok(json!(number));
        }
        Ok(text)
    }
}

async fn view_page(driver: Arc<StubSite>) -> Result<Page> {
    Page::builder(driver)
        .descriptor(
            PageDescriptor::builder()
                .url("view.php")
                .page_title("Viewing your data")
                .build(),
        )
        .map(LocatorMap::from([
            ("real_name", "#output_your_name"),
            ("gender", "#output_your_gender"),
        ]))
        .hooks(ViewPageHooks)
        .build()
        .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let site = Arc::new(StubSite::new("http://localhost/site/"));

    let people = [
        Person {
            real_name: "Graham Christensen".to_string(),
            gender: Gender::Male,
        },
        Person {
            real_name: "Esley Svanas".to_string(),
            gender: Gender::Female,
        },
        Person {
            real_name: "Nina Arsenault".to_string(),
            gender: Gender::Other,
        },
    ];

    let mirror = ModelMirror::new().skip("header").skip("save");

    for person in people {
        let home = home_page(site.clone()).await?;
        home.load(None).await?;

        mirror.set_from_model(&home, &person).await?;
        home.act_on_one("save", Verb::Click, &[]).await?;

        let view = view_page(site.clone()).await?;
        view.load(None).await?;
        mirror.assert_equals_model(&view, &person).await?;

        println!(
            "round-tripped {} ({})",
            person.real_name,
            person.gender.label()
        );
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Stub site: a two-page "browser" living in process
// ---------------------------------------------------------------------------

#[derive(Default)]
struct StubElement {
    text: Mutex<String>,
    value: Mutex<String>,
    options: Vec<(String, String)>,
}

impl StubElement {
    fn text_node(text: &str) -> Arc<Self> {
        let element = Self::default();
        *element.text.lock() = text.to_string();
        Arc::new(element)
    }

    fn input() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn select(options: &[(&str, &str)]) -> Arc<Self> {
        let element = Self {
            options: options
                .iter()
                .map(|(v, l)| (v.to_string(), l.to_string()))
                .collect(),
            ..Self::default()
        };
        *element.value.lock() = element
            .options
            .first()
            .map(|(v, _)| v.clone())
            .unwrap_or_default();
        Arc::new(element)
    }
}

struct StubHandle(Arc<StubElement>);

#[async_trait]
impl Element for StubHandle {
    async fn click(&self) -> Result<()> {
        Ok(())
    }

    async fn text(&self) -> Result<String> {
        Ok(self.0.text.lock().clone())
    }

    async fn value(&self) -> Result<String> {
        Ok(self.0.value.lock().clone())
    }

    async fn set_value(&self, value: &str) -> Result<()> {
        *self.0.value.lock() = value.to_string();
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.0.value.lock().clear();
        Ok(())
    }

    async fn attribute(&self, _name: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn is_displayed(&self) -> Result<bool> {
        Ok(true)
    }

    fn as_select(&self) -> Result<Arc<dyn SelectControl>> {
        if self.0.options.is_empty() {
            return Err(Error::InvalidArgument(
                "element is not a selectable control".to_string(),
            ));
        }
        Ok(Arc::new(StubSelect(Arc::clone(&self.0))))
    }
}

struct StubSelect(Arc<StubElement>);

#[async_trait]
impl SelectControl for StubSelect {
    async fn select_by_label(&self, label: &str) -> Result<()> {
        let option = self
            .0
            .options
            .iter()
            .find(|(_, l)| l == label)
            .ok_or_else(|| Error::Driver(format!("no option labelled '{label}'")))?;
        *self.0.value.lock() = option.0.clone();
        Ok(())
    }

    async fn select_by_value(&self, value: &str) -> Result<()> {
        let option = self
            .0
            .options
            .iter()
            .find(|(v, _)| v == value)
            .ok_or_else(|| Error::Driver(format!("no option with value '{value}'")))?;
        *self.0.value.lock() = option.0.clone();
        Ok(())
    }

    async fn selected_label(&self) -> Result<String> {
        let value = self.0.value.lock().clone();
        Ok(self
            .0
            .options
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, l)| l.clone())
            .unwrap_or_default())
    }
}

struct StubSite {
    base: String,
    current_url: Mutex<String>,
    current_title: Mutex<String>,
    elements: Mutex<HashMap<String, Arc<StubElement>>>,
    xpath_elements: Mutex<HashMap<String, Arc<StubElement>>>,
}

impl StubSite {
    fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            current_url: Mutex::new("about:blank".to_string()),
            current_title: Mutex::new(String::new()),
            elements: Mutex::new(HashMap::new()),
            xpath_elements: Mutex::new(HashMap::new()),
        }
    }

    fn render_home(&self) {
        let mut elements = self.elements.lock();
        elements.clear();
        elements.insert("#title".to_string(), StubElement::text_node("Example!"));
        elements.insert("#your_name".to_string(), StubElement::input());
        elements.insert(
            "#gender".to_string(),
            StubElement::select(&[("0", "Male"), ("1", "Female"), ("2", "Other")]),
        );
        elements.insert("#form_submit".to_string(), StubElement::input());
        self.xpath_elements.lock().clear();
        *self.current_title.lock() = "Example!".to_string();
    }

    fn render_view(&self) {
        let (name, gender_label) = {
            let elements = self.elements.lock();
            let name = elements
                .get("#your_name")
                .map(|e| e.value.lock().clone())
                .unwrap_or_default();
            let gender_label = elements
                .get("#gender")
                .map(|e| {
                    let value = e.value.lock().clone();
                    e.options
                        .iter()
                        .find(|(v, _)| *v == value)
                        .map(|(_, l)| l.clone())
                        .unwrap_or_default()
                })
                .unwrap_or_default();
            (name, gender_label)
        };

        let mut elements = self.elements.lock();
        elements.clear();
        elements.insert(
            "#output_your_name".to_string(),
            StubElement::text_node(&name),
        );
        elements.insert(
            "#output_your_gender".to_string(),
            StubElement::text_node(&gender_label),
        );
        drop(elements);

        let mut xpath = self.xpath_elements.lock();
        xpath.clear();
        xpath.insert(
            "//h1[@id='title']".to_string(),
            StubElement::text_node("Viewing your data"),
        );
        *self.current_title.lock() = "Viewing your data".to_string();
    }
}

#[async_trait]
impl Driver for StubSite {
    async fn navigate(&self, url: &str) -> Result<()> {
        *self.current_url.lock() = url.to_string();
        if url.ends_with("view.php") {
            self.render_view();
        } else {
            self.render_home();
        }
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.current_url.lock().clone())
    }

    async fn current_title(&self) -> Result<String> {
        Ok(self.current_title.lock().clone())
    }

    fn base_url(&self) -> Option<String> {
        Some(self.base.clone())
    }

    async fn find(&self, selector: &str) -> Result<Option<Arc<dyn Element>>> {
        Ok(self
            .elements
            .lock()
            .get(selector)
            .map(|element| Arc::new(StubHandle(Arc::clone(element))) as Arc<dyn Element>))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Arc<dyn Element>>> {
        Ok(self.find(selector).await?.into_iter().collect())
    }

    async fn find_by_xpath(&self, selector: &str) -> Result<Option<Arc<dyn Element>>> {
        Ok(self
            .xpath_elements
            .lock()
            .get(selector)
            .map(|element| Arc::new(StubHandle(Arc::clone(element))) as Arc<dyn Element>))
    }

    async fn run_command(&self, _name: &str, _args: Vec<Value>) -> Result<Value> {
        Ok(Value::Null)
    }
}
