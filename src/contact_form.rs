use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// The `name` attribute of the matching form control.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("required field `{0}` is empty")]
    MissingField(ContactField),
}

/// The local notification raised after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: String,
    pub description: String,
}

impl Default for Acknowledgment {
    fn default() -> Self {
        Self {
            title: "Message sent!".to_string(),
            description: "Thanks for reaching out. I'll get back to you soon.".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    /// Acknowledges the draft locally and clears it. Nothing leaves the page.
    pub fn submit(&mut self) -> Result<Acknowledgment, DraftError> {
        if let Some(field) = self.first_missing() {
            return Err(DraftError::MissingField(field));
        }
        *self = ContactDraft::default();
        Ok(Acknowledgment::default())
    }
}

/// Form state as the contact section renders it: the draft plus the latest
/// acknowledgment, keyed by how many submits went through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub notice: Option<Acknowledgment>,
    submitted: u32,
}

impl ContactForm {
    pub fn submitted(&self) -> u32 {
        self.submitted
    }

    pub fn submit(&mut self) -> Result<(), DraftError> {
        let ack = self.draft.submit()?;
        self.submitted += 1;
        self.notice = Some(ack);
        Ok(())
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::Name, "Ada".to_string());
        draft.set(ContactField::Email, "ada@example.com".to_string());
        draft.set(ContactField::Subject, "Hello".to_string());
        draft.set(ContactField::Message, "Let's build something.".to_string());
        draft
    }

    #[test]
    fn complete_draft_is_acknowledged_once_and_cleared() {
        let mut draft = filled();
        let mut notifications = Vec::new();

        if let Ok(ack) = draft.submit() {
            notifications.push(ack);
        }

        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Message sent!");
        assert_eq!(draft, ContactDraft::default());
        for field in ContactField::ALL {
            assert_eq!(draft.get(field), "");
        }
    }

    #[test]
    fn any_empty_field_blocks_submit_and_keeps_draft() {
        for missing in ContactField::ALL {
            let mut draft = filled();
            draft.set(missing, String::new());
            let before = draft.clone();

            assert_eq!(draft.submit(), Err(DraftError::MissingField(missing)));
            assert_eq!(draft, before);
        }
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut draft = filled();
        draft.set(ContactField::Subject, " ".to_string());
        assert!(draft.submit().is_ok());
    }

    #[test]
    fn control_names_resolve_to_fields() {
        assert_eq!(ContactField::from_name("message"), Some(ContactField::Message));
        assert_eq!(ContactField::from_name("phone"), None);
        assert_eq!(ContactDraft::default().first_missing(), Some(ContactField::Name));
    }

    #[test]
    fn missing_field_error_names_the_control() {
        let err = DraftError::MissingField(ContactField::Email);
        assert_eq!(err.to_string(), "required field `email` is empty");
    }

    #[test]
    fn each_accepted_submit_raises_a_fresh_notice() {
        let mut form = ContactForm::default();
        assert!(form.submit().is_err());
        assert_eq!(form.submitted(), 0);
        assert_eq!(form.notice, None);

        form.draft = filled();
        assert!(form.submit().is_ok());
        assert_eq!(form.submitted(), 1);
        assert_eq!(form.draft, ContactDraft::default());
        assert_eq!(form.notice, Some(Acknowledgment::default()));

        form.dismiss();
        form.draft = filled();
        form.submit().unwrap();
        assert_eq!(form.submitted(), 2);
        assert!(form.notice.is_some());
    }
}
