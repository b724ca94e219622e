//! WebDriver-backed [`RemoteSession`]
//!
//! Attaches to a browser session that already exists and is logged in to
//! the course site; creating sessions and authenticating are out of scope.

use super::error::WebDriverError;
use super::protocol::{
    ENTER_KEY, REVEAL_SCRIPT, element_json, error_from_payload, locator_body, parse_element,
    parse_elements,
};
use async_trait::async_trait;
use lessonsmith_application::{ElementRef, Locator, RemoteError, RemoteSession};
use reqwest::{Client, Method};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::trace;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for one WebDriver session
#[derive(Debug, Clone)]
pub struct WebDriverSession {
    client: Client,
    session_url: String,
}

impl WebDriverSession {
    /// Attach to `session_id` on the WebDriver server at `server_url`
    pub fn attach(server_url: &str, session_id: &str) -> Result<Self, WebDriverError> {
        let server = url::Url::parse(server_url)
            .map_err(|e| WebDriverError::InvalidUrl(format!("{}: {}", server_url, e)))?;
        if session_id.trim().is_empty() {
            return Err(WebDriverError::MissingSession);
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(WebDriverError::Client)?;
        Ok(Self {
            client,
            session_url: format!(
                "{}/session/{}",
                server.as_str().trim_end_matches('/'),
                session_id.trim()
            ),
        })
    }

    pub fn session_url(&self) -> &str {
        &self.session_url
    }

    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, RemoteError> {
        let url = format!("{}{}", self.session_url, path);
        trace!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| RemoteError::Protocol(format!("invalid response body: {}", e)))?;
        let value = payload.get("value").cloned().unwrap_or(Value::Null);

        if status.is_success() {
            Ok(value)
        } else {
            Err(error_from_payload(&value))
        }
    }

    async fn get(&self, path: &str) -> Result<Value, RemoteError> {
        self.command(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, RemoteError> {
        self.command(Method::POST, path, Some(body)).await
    }

    async fn options(&mut self, select: &ElementRef) -> Result<Vec<ElementRef>, RemoteError> {
        self.find_all_within(select, &Locator::css("option")).await
    }
}

#[async_trait]
impl RemoteSession for WebDriverSession {
    async fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementRef>, RemoteError> {
        let value = self.post("/elements", locator_body(locator)).await?;
        parse_elements(&value)
    }

    async fn find_all_within(
        &mut self,
        parent: &ElementRef,
        locator: &Locator,
    ) -> Result<Vec<ElementRef>, RemoteError> {
        let path = format!("/element/{}/elements", parent.handle());
        let value = self.post(&path, locator_body(locator)).await?;
        parse_elements(&value)
    }

    async fn click(&mut self, element: &ElementRef) -> Result<(), RemoteError> {
        let path = format!("/element/{}/click", element.handle());
        self.post(&path, json!({})).await.map(|_| ())
    }

    async fn type_text(&mut self, element: &ElementRef, text: &str) -> Result<(), RemoteError> {
        let path = format!("/element/{}/value", element.handle());
        self.post(&path, json!({ "text": text })).await.map(|_| ())
    }

    async fn clear(&mut self, element: &ElementRef) -> Result<(), RemoteError> {
        let path = format!("/element/{}/clear", element.handle());
        self.post(&path, json!({})).await.map(|_| ())
    }

    async fn press_enter(&mut self, element: &ElementRef) -> Result<(), RemoteError> {
        self.type_text(element, ENTER_KEY).await
    }

    async fn attribute(
        &mut self,
        element: &ElementRef,
        name: &str,
    ) -> Result<Option<String>, RemoteError> {
        let path = format!("/element/{}/attribute/{}", element.handle(), name);
        Ok(self.get(&path).await?.as_str().map(str::to_string))
    }

    async fn text(&mut self, element: &ElementRef) -> Result<String, RemoteError> {
        let path = format!("/element/{}/text", element.handle());
        Ok(self
            .get(&path)
            .await?
            .as_str()
            .unwrap_or_default()
            .to_string())
    }

    async fn select_by_index(
        &mut self,
        element: &ElementRef,
        index: usize,
    ) -> Result<(), RemoteError> {
        let option = self
            .options(element)
            .await?
            .into_iter()
            .nth(index)
            .ok_or_else(|| RemoteError::NotFound(format!("option #{}", index)))?;
        self.click(&option).await
    }

    async fn select_by_visible_text(
        &mut self,
        element: &ElementRef,
        text: &str,
    ) -> Result<(), RemoteError> {
        for option in self.options(element).await? {
            if self.text(&option).await?.trim() == text {
                return self.click(&option).await;
            }
        }
        Err(RemoteError::NotFound(format!("option \"{}\"", text)))
    }

    async fn reveal(&mut self, element: &ElementRef) -> Result<(), RemoteError> {
        let body = json!({ "script": REVEAL_SCRIPT, "args": [element_json(element)] });
        self.post("/execute/sync", body).await.map(|_| ())
    }

    async fn active_element(&mut self) -> Result<ElementRef, RemoteError> {
        parse_element(&self.get("/element/active").await?)
    }

    async fn current_location(&mut self) -> Result<String, RemoteError> {
        self.get("/url")
            .await?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| RemoteError::Protocol("location is not a string".to_string()))
    }

    async fn navigate(&mut self, url: &str) -> Result<(), RemoteError> {
        self.post("/url", json!({ "url": url })).await.map(|_| ())
    }

    async fn refresh(&mut self) -> Result<(), RemoteError> {
        self.post("/refresh", json!({})).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_builds_session_url() {
        let session = WebDriverSession::attach("http://localhost:4444/", "abc123").unwrap();
        assert_eq!(session.session_url(), "http://localhost:4444/session/abc123");

        let hub = WebDriverSession::attach("http://grid:4444/wd/hub", " s1 ").unwrap();
        assert_eq!(hub.session_url(), "http://grid:4444/wd/hub/session/s1");
    }

    #[test]
    fn test_attach_requires_session_and_url() {
        assert!(matches!(
            WebDriverSession::attach("http://localhost:4444", ""),
            Err(WebDriverError::MissingSession)
        ));
        assert!(matches!(
            WebDriverSession::attach("not a url", "abc"),
            Err(WebDriverError::InvalidUrl(_))
        ));
    }
}
