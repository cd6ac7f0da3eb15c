use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

// Same unreserved set as JavaScript's encodeURIComponent.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Every field must hold something other than whitespace.
    pub fn validate(&self) -> Result<(), ContactError> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, v)| v.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(ContactError::MissingField(field)))
    }

    pub fn subject(&self) -> String {
        format!("Portfolio inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!("{}\n\nFrom: {} <{}>", self.message, self.name, self.email)
    }

    /// Build the `mailto:` link that opens a pre-filled draft to `recipient`.
    pub fn mailto_uri(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_component(&self.subject()),
            encode_component(&self.body()),
        ))
    }
}

pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}
