use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

use crate::config;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error("{0} is required")]
    Validation(&'static str),
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Visible state of the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl SubmitStatus {
    pub fn is_sending(self) -> bool {
        self == SubmitStatus::Sending
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Budget,
    Message,
}

/// The payload a delivery transport receives.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub budget: String,
    pub message: String,
}

impl ContactMessage {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Budget => self.budget = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Validation("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::Validation("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Validation("message"));
        }
        Ok(())
    }
}

pub enum ContactAction {
    Edit(Field, String),
    Submit,
    Delivered(Result<(), ContactError>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactMessage,
    pub status: SubmitStatus,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => {
                next.fields.set(field, value);
            }
            ContactAction::Submit => {
                if self.status.is_sending() {
                    return self;
                }
                if let Err(e) = self.fields.validate() {
                    log::warn!("contact form not submitted: {}", e);
                    return self;
                }
                log::debug!("contact form: {:?} -> sending", self.status);
                next.status = SubmitStatus::Sending;
            }
            ContactAction::Delivered(result) => {
                if !self.status.is_sending() {
                    return self;
                }
                match result {
                    Ok(()) => {
                        log::debug!("contact form: sending -> sent");
                        next.status = SubmitStatus::Sent;
                        next.fields = ContactMessage::default();
                    }
                    Err(e) => {
                        log::warn!("contact form: sending -> error ({})", e);
                        next.status = SubmitStatus::Error;
                    }
                }
            }
        }
        Rc::new(next)
    }
}

/// Hands a message to the delivery transport.
///
/// There is no real transport yet: this waits a fixed delay and reports success.
pub async fn deliver(message: ContactMessage) -> Result<(), ContactError> {
    let payload =
        serde_json::to_string(&message).map_err(|e| ContactError::Delivery(e.to_string()))?;
    log::debug!("delivering contact message: {}", payload);
    TimeoutFuture::new(config::CONTACT_SEND_DELAY_MS).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Amina".into(),
            email: "amina@globex.com".into(),
            company: "Globex".into(),
            budget: "$500 - $1k".into(),
            message: "We need a new marketing site.".into(),
        }
    }

    fn form(fields: ContactMessage) -> Rc<ContactForm> {
        Rc::new(ContactForm {
            fields,
            status: SubmitStatus::Idle,
        })
    }

    #[test]
    fn successful_submission_goes_idle_sending_sent() {
        let state = form(filled());
        assert_eq!(state.status, SubmitStatus::Idle);

        let state = state.reduce(ContactAction::Submit);
        assert_eq!(state.status, SubmitStatus::Sending);
        assert_eq!(state.fields, filled(), "fields cleared before sent");

        let state = state.reduce(ContactAction::Delivered(Ok(())));
        assert_eq!(state.status, SubmitStatus::Sent);
        assert_eq!(state.fields, ContactMessage::default());
    }

    #[test]
    fn failed_delivery_keeps_the_fields() {
        let state = form(filled())
            .reduce(ContactAction::Submit)
            .reduce(ContactAction::Delivered(Err(ContactError::Delivery(
                "offline".into(),
            ))));
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.fields, filled());
    }

    #[test]
    fn missing_required_field_never_sends() {
        let mut fields = filled();
        fields.email = "  ".into();
        let state = form(fields).reduce(ContactAction::Submit);
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut fields = filled();
        fields.company.clear();
        fields.budget.clear();
        assert_eq!(fields.validate(), Ok(()));
    }

    #[test]
    fn double_submit_is_ignored_while_sending() {
        let state = form(filled()).reduce(ContactAction::Submit);
        let again = Rc::clone(&state).reduce(ContactAction::Submit);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn stray_delivery_result_is_ignored() {
        let state = form(filled()).reduce(ContactAction::Delivered(Ok(())));
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.fields, filled());
    }

    #[test]
    fn can_resubmit_after_an_error() {
        let state = form(filled())
            .reduce(ContactAction::Submit)
            .reduce(ContactAction::Delivered(Err(ContactError::Delivery("x".into()))))
            .reduce(ContactAction::Submit);
        assert_eq!(state.status, SubmitStatus::Sending);
    }

    #[test]
    fn edits_update_one_field() {
        let state = form(ContactMessage::default())
            .reduce(ContactAction::Edit(Field::Budget, "$1k+".into()));
        assert_eq!(state.fields.budget, "$1k+");
        assert!(state.fields.name.is_empty());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = ContactMessage::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn payload_omits_empty_optional_fields() {
        let mut message = filled();
        message.company.clear();
        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("company").is_none());
        assert_eq!(json["budget"], "$500 - $1k");
    }
}
