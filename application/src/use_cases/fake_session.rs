//! Scripted in-memory remote session for use case tests
//!
//! Every locator matches one element unless configured otherwise; element
//! handles are `<locator>[<n>]` (or `<parent>><locator>[<n>]` for nested
//! lookups) and every action is appended to a log.

use crate::ports::remote_session::{ElementRef, Locator, RemoteError, RemoteSession};
use async_trait::async_trait;
use std::collections::HashMap;

/// When a select moves the session to a new location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    Always,
    /// Only the n-th select (1-based) changes the location
    OnSelect(u32),
    Never,
}

#[derive(Debug)]
pub struct FakeSession {
    log: Vec<String>,
    location: String,
    policy: TransitionPolicy,
    selects: u32,
    pages: u32,
    elements: HashMap<String, usize>,
    attributes: HashMap<(String, String), String>,
    texts: HashMap<String, String>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            location: "https://lms.test/page/0".to_string(),
            policy: TransitionPolicy::Always,
            selects: 0,
            pages: 0,
            elements: HashMap::new(),
            attributes: HashMap::new(),
            texts: HashMap::new(),
        }
    }

    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of elements matching `locator` (default 1)
    pub fn with_elements(mut self, locator: &Locator, count: usize) -> Self {
        self.elements.insert(locator.to_string(), count);
        self
    }

    pub fn with_attribute(mut self, handle: &str, name: &str, value: &str) -> Self {
        self.attributes
            .insert((handle.to_string(), name.to_string()), value.to_string());
        self
    }

    pub fn with_text(mut self, handle: &str, text: &str) -> Self {
        self.texts.insert(handle.to_string(), text.to_string());
        self
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn selects(&self) -> u32 {
        self.selects
    }

    /// Log entries starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.log.iter().filter(|l| l.starts_with(prefix)).count()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.log.iter().any(|l| l == entry)
    }

    /// Position of the first log entry equal to `entry`
    pub fn position(&self, entry: &str) -> Option<usize> {
        self.log.iter().position(|l| l == entry)
    }

    fn matches(&self, prefix: &str, locator: &Locator) -> Vec<ElementRef> {
        let count = self
            .elements
            .get(&locator.to_string())
            .copied()
            .unwrap_or(1);
        (0..count)
            .map(|i| ElementRef::new(format!("{}{}[{}]", prefix, locator, i)))
            .collect()
    }

    fn on_select(&mut self) {
        self.selects += 1;
        let moves = match self.policy {
            TransitionPolicy::Always => true,
            TransitionPolicy::OnSelect(n) => self.selects == n,
            TransitionPolicy::Never => false,
        };
        if moves {
            self.pages += 1;
            self.location = format!("https://lms.test/page/{}", self.pages);
        }
    }
}

#[async_trait]
impl RemoteSession for FakeSession {
    async fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementRef>, RemoteError> {
        Ok(self.matches("", locator))
    }

    async fn find_all_within(
        &mut self,
        parent: &ElementRef,
        locator: &Locator,
    ) -> Result<Vec<ElementRef>, RemoteError> {
        Ok(self.matches(&format!("{}>", parent.handle()), locator))
    }

    async fn click(&mut self, element: &ElementRef) -> Result<(), RemoteError> {
        self.log.push(format!("click {}", element.handle()));
        Ok(())
    }

    async fn type_text(&mut self, element: &ElementRef, text: &str) -> Result<(), RemoteError> {
        self.log.push(format!("type {} {}", element.handle(), text));
        Ok(())
    }

    async fn clear(&mut self, element: &ElementRef) -> Result<(), RemoteError> {
        self.log.push(format!("clear {}", element.handle()));
        Ok(())
    }

    async fn press_enter(&mut self, element: &ElementRef) -> Result<(), RemoteError> {
        self.log.push(format!("enter {}", element.handle()));
        Ok(())
    }

    async fn attribute(
        &mut self,
        element: &ElementRef,
        name: &str,
    ) -> Result<Option<String>, RemoteError> {
        Ok(self
            .attributes
            .get(&(element.handle().to_string(), name.to_string()))
            .cloned())
    }

    async fn text(&mut self, element: &ElementRef) -> Result<String, RemoteError> {
        Ok(self.texts.get(element.handle()).cloned().unwrap_or_default())
    }

    async fn select_by_index(
        &mut self,
        element: &ElementRef,
        index: usize,
    ) -> Result<(), RemoteError> {
        self.log
            .push(format!("select {} index {}", element.handle(), index));
        self.on_select();
        Ok(())
    }

    async fn select_by_visible_text(
        &mut self,
        element: &ElementRef,
        text: &str,
    ) -> Result<(), RemoteError> {
        self.log
            .push(format!("select {} text {}", element.handle(), text));
        self.on_select();
        Ok(())
    }

    async fn reveal(&mut self, element: &ElementRef) -> Result<(), RemoteError> {
        self.log.push(format!("reveal {}", element.handle()));
        Ok(())
    }

    async fn active_element(&mut self) -> Result<ElementRef, RemoteError> {
        Ok(ElementRef::new("active"))
    }

    async fn current_location(&mut self) -> Result<String, RemoteError> {
        Ok(self.location.clone())
    }

    async fn navigate(&mut self, url: &str) -> Result<(), RemoteError> {
        self.log.push(format!("navigate {}", url));
        self.location = url.to_string();
        Ok(())
    }

    async fn refresh(&mut self) -> Result<(), RemoteError> {
        self.log.push("refresh".to_string());
        Ok(())
    }
}
