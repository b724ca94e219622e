//! W3C WebDriver wire format helpers
//!
//! Pure mapping between the port's vocabulary and WebDriver JSON: locator
//! strategies, element references and error payloads.

use lessonsmith_application::{ElementRef, Locator, RemoteError};
use serde_json::{Value, json};

/// Key under which WebDriver serialises element references
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Enter key code point
pub const ENTER_KEY: &str = "\u{E007}";

/// Forces an element visible so it can be typed into
pub const REVEAL_SCRIPT: &str =
    "arguments[0].style.display = 'block'; arguments[0].style.visibility = 'visible';";

/// Body of a find-element(s) command
///
/// WebDriver has no id, class or name strategies; those are expressed as
/// CSS selectors.
pub fn locator_body(locator: &Locator) -> Value {
    let (using, value) = match locator {
        Locator::Id(id) => ("css selector", format!("[id=\"{}\"]", css_string(id))),
        Locator::Css(selector) => ("css selector", selector.clone()),
        Locator::ClassName(class) => ("css selector", format!(".{}", class)),
        Locator::Name(name) => ("css selector", format!("[name=\"{}\"]", css_string(name))),
        Locator::Label(text) => ("link text", text.clone()),
    };
    json!({ "using": using, "value": value })
}

fn css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// JSON form of an element reference, as passed to scripts
pub fn element_json(element: &ElementRef) -> Value {
    json!({ ELEMENT_KEY: element.handle() })
}

pub fn parse_element(value: &Value) -> Result<ElementRef, RemoteError> {
    value
        .get(ELEMENT_KEY)
        .and_then(Value::as_str)
        .map(ElementRef::new)
        .ok_or_else(|| RemoteError::Protocol(format!("not an element reference: {}", value)))
}

pub fn parse_elements(value: &Value) -> Result<Vec<ElementRef>, RemoteError> {
    value
        .as_array()
        .ok_or_else(|| RemoteError::Protocol(format!("expected an element list: {}", value)))?
        .iter()
        .map(parse_element)
        .collect()
}

/// Map a WebDriver error payload onto the port's error
pub fn error_from_payload(value: &Value) -> RemoteError {
    let code = value.get("error").and_then(Value::as_str).unwrap_or("unknown error");
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    match code {
        "no such element" => RemoteError::NotFound(message),
        "stale element reference" | "element not interactable" | "element click intercepted" => {
            RemoteError::StaleElement(message)
        }
        _ => RemoteError::Protocol(format!("{}: {}", code, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_strategies() {
        assert_eq!(
            locator_body(&Locator::id("id_title")),
            json!({"using": "css selector", "value": "[id=\"id_title\"]"})
        );
        assert_eq!(
            locator_body(&Locator::class("collapseexpand")),
            json!({"using": "css selector", "value": ".collapseexpand"})
        );
        assert_eq!(
            locator_body(&Locator::name("repo_upload_file")),
            json!({"using": "css selector", "value": "[name=\"repo_upload_file\"]"})
        );
        assert_eq!(
            locator_body(&Locator::label("Slide4")),
            json!({"using": "link text", "value": "Slide4"})
        );
    }

    #[test]
    fn test_element_round_trip() {
        let element = ElementRef::new("abc-123");
        assert_eq!(parse_element(&element_json(&element)).unwrap(), element);

        let list = json!([{ ELEMENT_KEY: "a" }, { ELEMENT_KEY: "b" }]);
        assert_eq!(parse_elements(&list).unwrap().len(), 2);
        assert!(parse_elements(&json!({"x": 1})).is_err());
    }

    #[test]
    fn test_error_mapping() {
        let not_found = json!({"error": "no such element", "message": "#x"});
        assert_eq!(
            error_from_payload(&not_found),
            RemoteError::NotFound("#x".to_string())
        );

        let stale = json!({"error": "stale element reference", "message": "gone"});
        assert!(error_from_payload(&stale).is_stale());

        let other = json!({"error": "invalid session id", "message": "expired"});
        assert!(matches!(
            error_from_payload(&other),
            RemoteError::Protocol(m) if m.starts_with("invalid session id")
        ));
    }
}
