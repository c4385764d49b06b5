//! Rich text components, as sent to players in chat and persisted as JSON.

use std::fmt;

use serde::{Serialize, Deserialize};


/// A rich text component. The JSON form is the same as the one used by the client for
/// chat messages, only the subset of fields used by this crate is supported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextComponent {
    /// Literal text of this component.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Translation key, rendered by the client instead of the literal text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<String>,
    /// Arguments given to the translation key.
    #[serde(default, rename = "with", skip_serializing_if = "Vec::is_empty")]
    pub with: Vec<TextComponent>,
    /// Named color of this component, inherited by its children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Components appended after this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<TextComponent>,
}

impl TextComponent {

    /// Create a plain literal text component.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }

    /// Create a translated text component with the given arguments.
    pub fn new_translate(key: impl Into<String>, with: Vec<TextComponent>) -> Self {
        Self { translate: Some(key.into()), with, ..Default::default() }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_extra(mut self, extra: TextComponent) -> Self {
        self.extra.push(extra);
        self
    }

    /// Encode this component to its JSON form.
    pub fn to_json(&self) -> String {
        // Only strings and vectors are serialized, which cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode a component from its JSON form. A bare JSON string is accepted as a
    /// literal component, like the client does.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<serde_json::Value>(json)? {
            serde_json::Value::String(text) => Ok(Self::new(text)),
            value => serde_json::from_value(value),
        }
    }

}

/// Plain text rendering, translation keys are rendered as is.
impl fmt::Display for TextComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.translate {
            Some(key) => {
                f.write_str(key)?;
                if !self.with.is_empty() {
                    f.write_str("(")?;
                    for (i, arg) in self.with.iter().enumerate() {
                        if i != 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(")")?;
                }
            }
            None => f.write_str(&self.text)?,
        }
        for extra in &self.extra {
            write!(f, "{extra}")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn json() {

        let msg = TextComponent::new("Alice ")
            .with_color("red")
            .with_extra(TextComponent::new("was slain"));

        let json = msg.to_json();
        assert_eq!(json, r#"{"text":"Alice ","color":"red","extra":[{"text":"was slain"}]}"#);
        assert_eq!(TextComponent::from_json(&json).unwrap(), msg);
        assert_eq!(msg.to_string(), "Alice was slain");

    }

    #[test]
    fn json_bare_string() {
        assert_eq!(TextComponent::from_json(r#""died""#).unwrap(), TextComponent::new("died"));
        assert!(TextComponent::from_json("{not json").is_err());
    }

    #[test]
    fn translate_display() {
        let msg = TextComponent::new_translate("death.attack.arrow", vec![
            TextComponent::new("Alice"),
            TextComponent::new("Skeleton"),
        ]);
        assert_eq!(msg.to_string(), "death.attack.arrow(Alice, Skeleton)");
        assert_eq!(TextComponent::from_json(&msg.to_json()).unwrap(), msg);
    }

}
