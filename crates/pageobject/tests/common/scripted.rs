// Scripted driver - in-memory stand-in for a browser-automation session
//
// Tests place elements under selectors, preset the reported URL/title, and
// script pass-through command responses. Every call the core makes is
// recorded so suites can assert how often (and with what) the driver was
// hit. Interior mutability is required because the capability traits take
// `&self`; a Mutex is enough since the core is sequential by contract.

use async_trait::async_trait;
use pageobject_rs::{Driver, Element, Error, Result, SelectControl};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// One `<option>` of a scripted select control.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub value: String,
    pub label: String,
}

#[derive(Default)]
struct ElementState {
    text: String,
    value: Mutex<String>,
    attributes: HashMap<String, String>,
    displayed: bool,
    options: Vec<OptionSpec>,
    clicks: Mutex<usize>,
    journal: Option<(Arc<Mutex<Vec<String>>>, String)>,
}

/// A scripted element handle.
#[derive(Clone)]
pub struct ScriptedElement {
    state: Arc<ElementState>,
}

impl ScriptedElement {
    /// An empty, displayed input element.
    pub fn input() -> Self {
        Self {
            state: Arc::new(ElementState {
                displayed: true,
                ..ElementState::default()
            }),
        }
    }

    /// A displayed element with static text.
    pub fn text(text: &str) -> Self {
        Self {
            state: Arc::new(ElementState {
                text: text.to_string(),
                displayed: true,
                ..ElementState::default()
            }),
        }
    }

    /// A displayed select control with the given `(value, label)` options.
    ///
    /// The first option starts selected, as a browser would render it.
    pub fn select(options: &[(&str, &str)]) -> Self {
        let options: Vec<_> = options
            .iter()
            .map(|(value, label)| OptionSpec {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect();
        let initial = options.first().map(|o| o.value.clone()).unwrap_or_default();
        Self {
            state: Arc::new(ElementState {
                displayed: true,
                value: Mutex::new(initial),
                options,
                ..ElementState::default()
            }),
        }
    }

    /// Adds an attribute.
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        let mut state = Arc::try_unwrap(self.state).unwrap_or_else(|_| panic!("element shared"));
        state.attributes.insert(name.to_string(), value.to_string());
        Self {
            state: Arc::new(state),
        }
    }

    /// Records every action into a shared journal as `"<action>:<id>"`.
    pub fn with_journal(self, journal: Arc<Mutex<Vec<String>>>, id: &str) -> Self {
        let mut state = Arc::try_unwrap(self.state).unwrap_or_else(|_| panic!("element shared"));
        state.journal = Some((journal, id.to_string()));
        Self {
            state: Arc::new(state),
        }
    }

    /// The element's current value.
    pub fn current_value(&self) -> String {
        self.state.value.lock().clone()
    }

    /// How many times the element was clicked.
    pub fn click_count(&self) -> usize {
        *self.state.clicks.lock()
    }

    fn record(&self, action: &str) {
        if let Some((journal, id)) = &self.state.journal {
            journal.lock().push(format!("{action}:{id}"));
        }
    }
}

#[async_trait]
impl Element for ScriptedElement {
    async fn click(&self) -> Result<()> {
        self.record("click");
        *self.state.clicks.lock() += 1;
        Ok(())
    }

    async fn text(&self) -> Result<String> {
        self.record("text");
        Ok(self.state.text.clone())
    }

    async fn value(&self) -> Result<String> {
        self.record("value");
        Ok(self.state.value.lock().clone())
    }

    async fn set_value(&self, value: &str) -> Result<()> {
        self.record("set_value");
        *self.state.value.lock() = value.to_string();
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.record("clear");
        self.state.value.lock().clear();
        Ok(())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.state.attributes.get(name).cloned())
    }

    async fn is_displayed(&self) -> Result<bool> {
        Ok(self.state.displayed)
    }

    fn as_select(&self) -> Result<Arc<dyn SelectControl>> {
        if self.state.options.is_empty() {
            return Err(Error::InvalidArgument(
                "element is not a selectable control".to_string(),
            ));
        }
        Ok(Arc::new(ScriptedSelect {
            state: Arc::clone(&self.state),
        }))
    }
}

/// Select-control adaptation of a scripted element.
struct ScriptedSelect {
    state: Arc<ElementState>,
}

#[async_trait]
impl SelectControl for ScriptedSelect {
    async fn select_by_label(&self, label: &str) -> Result<()> {
        let option = self
            .state
            .options
            .iter()
            .find(|o| o.label == label)
            .ok_or_else(|| Error::Driver(format!("no option with label '{label}'")))?;
        *self.state.value.lock() = option.value.clone();
        Ok(())
    }

    async fn select_by_value(&self, value: &str) -> Result<()> {
        let option = self
            .state
            .options
            .iter()
            .find(|o| o.value == value)
            .ok_or_else(|| Error::Driver(format!("no option with value '{value}'")))?;
        *self.state.value.lock() = option.value.clone();
        Ok(())
    }

    async fn selected_label(&self) -> Result<String> {
        let value = self.state.value.lock().clone();
        let option = self
            .state
            .options
            .iter()
            .find(|o| o.value == value)
            .ok_or_else(|| Error::Driver(format!("no option with value '{value}'")))?;
        Ok(option.label.clone())
    }
}

/// Scripted browser session.
#[derive(Default)]
pub struct ScriptedDriver {
    base_url: Option<String>,
    current_url: Mutex<Option<String>>,
    current_title: Mutex<Option<String>>,
    elements: Mutex<HashMap<String, Vec<ScriptedElement>>>,
    xpath_elements: Mutex<HashMap<String, ScriptedElement>>,
    command_responses: Mutex<HashMap<String, Value>>,
    navigations: Mutex<Vec<String>>,
    finds: Mutex<Vec<String>>,
    commands: Mutex<Vec<(String, Vec<Value>)>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(url: &str) -> Self {
        Self {
            base_url: Some(url.to_string()),
            ..Self::default()
        }
    }

    /// Places a single element under a CSS selector.
    pub fn place(&self, selector: &str, element: ScriptedElement) {
        self.elements
            .lock()
            .insert(selector.to_string(), vec![element]);
    }

    /// Places an ordered match set under a CSS selector.
    pub fn place_all(&self, selector: &str, elements: Vec<ScriptedElement>) {
        self.elements.lock().insert(selector.to_string(), elements);
    }

    /// Places an element under an XPath selector.
    pub fn place_xpath(&self, selector: &str, element: ScriptedElement) {
        self.xpath_elements
            .lock()
            .insert(selector.to_string(), element);
    }

    /// Removes whatever is placed under a CSS selector.
    pub fn clear_selector(&self, selector: &str) {
        self.elements.lock().remove(selector);
    }

    pub fn set_current_url(&self, url: &str) {
        *self.current_url.lock() = Some(url.to_string());
    }

    pub fn set_current_title(&self, title: &str) {
        *self.current_title.lock() = Some(title.to_string());
    }

    /// Scripts the response of a pass-through command.
    pub fn script_command(&self, name: &str, response: Value) {
        self.command_responses
            .lock()
            .insert(name.to_string(), response);
    }

    /// Every URL navigated to, in order.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().clone()
    }

    /// Every selector resolved through single-element lookup, in order.
    pub fn finds(&self) -> Vec<String> {
        self.finds.lock().clone()
    }

    /// Every pass-through command run, with its arguments.
    pub fn commands(&self) -> Vec<(String, Vec<Value>)> {
        self.commands.lock().clone()
    }
}

#[async_trait]
impl Driver for ScriptedDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.navigations.lock().push(url.to_string());
        *self.current_url.lock() = Some(url.to_string());
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self
            .current_url
            .lock()
            .clone()
            .unwrap_or_else(|| "about:blank".to_string()))
    }

    async fn current_title(&self) -> Result<String> {
        Ok(self.current_title.lock().clone().unwrap_or_default())
    }

    fn base_url(&self) -> Option<String> {
        self.base_url.clone()
    }

    async fn find(&self, selector: &str) -> Result<Option<Arc<dyn Element>>> {
        self.finds.lock().push(selector.to_string());
        Ok(self
            .elements
            .lock()
            .get(selector)
            .and_then(|matches| matches.first())
            .map(|element| Arc::new(element.clone()) as Arc<dyn Element>))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Arc<dyn Element>>> {
        Ok(self
            .elements
            .lock()
            .get(selector)
            .map(|matches| {
                matches
                    .iter()
                    .map(|element| Arc::new(element.clone()) as Arc<dyn Element>)
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_xpath(&self, selector: &str) -> Result<Option<Arc<dyn Element>>> {
        Ok(self
            .xpath_elements
            .lock()
            .get(selector)
            .map(|element| Arc::new(element.clone()) as Arc<dyn Element>))
    }

    async fn run_command(&self, name: &str, args: Vec<Value>) -> Result<Value> {
        self.commands.lock().push((name.to_string(), args));
        Ok(self
            .command_responses
            .lock()
            .get(name)
            .cloned()
            .unwrap_or(Value::Null))
    }
}
