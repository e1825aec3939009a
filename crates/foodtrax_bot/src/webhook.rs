//! Inbound webhook requests.

use derive_getters::Getters;
use foodtrax_error::{DispatchError, DispatchErrorKind, DispatchResult};
use std::collections::HashMap;

/// Channel name Slack reports for a direct conversation with the bot.
pub const DIRECT_MESSAGE_CHANNEL: &str = "directmessage";

/// A slash-command webhook as posted by Slack.
///
/// # Examples
///
/// ```
/// use foodtrax_bot::WebhookRequestBuilder;
///
/// let request = WebhookRequestBuilder::default()
///     .channel_id("D024BE91L")
///     .channel_name("directmessage")
///     .user_id("U2147483697")
///     .text("near")
///     .build()
///     .unwrap();
/// assert!(request.is_direct_message());
/// assert_eq!(request.user_id(), "U2147483697");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct WebhookRequest {
    /// Channel the command was typed in.
    channel_id: String,
    /// Channel name, `directmessage` for a conversation with the bot.
    channel_name: String,
    /// Stable id of the sender; direct replies are addressed by it.
    user_id: String,
    /// Sender's legacy username; replies are never addressed by it.
    #[builder(default, setter(strip_option))]
    user_name: Option<String>,
    /// Text after the slash command.
    text: String,
}

impl WebhookRequest {
    /// Read the request from decoded form fields.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` naming the first of `channel_id`,
    /// `channel_name`, `user_id`, `text` that is absent. `user_name` is
    /// optional.
    pub fn from_form(form: &HashMap<String, String>) -> DispatchResult<Self> {
        let field = |name: &str| {
            form.get(name)
                .cloned()
                .ok_or_else(|| DispatchError::new(DispatchErrorKind::MissingField(name.to_string())))
        };

        Ok(Self {
            channel_id: field("channel_id")?,
            channel_name: field("channel_name")?,
            user_id: field("user_id")?,
            user_name: form.get("user_name").cloned(),
            text: field("text")?,
        })
    }

    /// Whether the command was typed in a direct conversation with the bot.
    pub fn is_direct_message(&self) -> bool {
        self.channel_name == DIRECT_MESSAGE_CHANNEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_complete_form() {
        let request = WebhookRequest::from_form(&form(&[
            ("channel_id", "C2147483705"),
            ("channel_name", "general"),
            ("user_id", "U2147483697"),
            ("user_name", "bitoffdev"),
            ("text", "all"),
            ("team_domain", "foodtrax"),
        ]))
        .unwrap();

        assert_eq!(request.channel_id(), "C2147483705");
        assert_eq!(request.user_name().as_deref(), Some("bitoffdev"));
        assert!(!request.is_direct_message());
    }

    #[test]
    fn test_missing_field() {
        let err = WebhookRequest::from_form(&form(&[
            ("channel_name", "general"),
            ("user_id", "U1"),
            ("text", "all"),
        ]))
        .unwrap_err();

        assert_eq!(
            err.kind,
            DispatchErrorKind::MissingField("channel_id".to_string())
        );
    }

    #[test]
    fn test_empty_text_is_present() {
        let request = WebhookRequest::from_form(&form(&[
            ("channel_id", "D1"),
            ("channel_name", "directmessage"),
            ("user_id", "U1"),
            ("text", ""),
        ]))
        .unwrap();

        assert_eq!(request.text(), "");
        assert!(request.is_direct_message());
        assert!(request.user_name().is_none());
    }
}
