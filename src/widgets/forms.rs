use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use super::fields::{Field, MultiSelectField, SelectOption, SubmitAction, TextField};
use super::form::{FormState, Rule};
use super::transport::{SubmissionTransport, TransportError};
use super::{EMPTY_EMAIL_MESSAGE, FAILURE_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A rule failed; nothing was sent.
    Invalid(String),
    Submitted,
    Failed(TransportError),
}

async fn submit_form(
    form: &mut FormState,
    url: &str,
    payload: Value,
    transport: &dyn SubmissionTransport,
    success_message: &str,
) -> SubmitOutcome {
    if let Err(message) = form.validate() {
        form.set_message(message.clone());
        return SubmitOutcome::Invalid(message);
    }

    match transport.post_json(url, &payload).await {
        Ok(()) => {
            tracing::debug!("Form posted to {url}");
            form.clear();
            form.set_message(success_message);
            SubmitOutcome::Submitted
        }
        Err(e) => {
            tracing::warn!("Failed to post form to {url}: {e}");
            form.set_message(FAILURE_MESSAGE);
            SubmitOutcome::Failed(e)
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubscribeForm {
    pub state: FormState,
    endpoint: String,
}

impl SubscribeForm {
    pub const SUCCESS_MESSAGE: &'static str = "Data sent to the subscription API successfully.";

    pub fn new(endpoint: impl Into<String>) -> Self {
        let state = FormState::new(
            vec![
                Field::Text(TextField::email("email", "Email", "Enter your email")),
                Field::Submit(SubmitAction::new("Register Your Interest")),
            ],
            vec![Rule::required("email", EMPTY_EMAIL_MESSAGE)],
        );
        Self {
            state,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_email(&mut self, email: &str) {
        self.state.set_text("email", email);
    }

    pub fn payload(&self) -> Value {
        json!({ "email": self.state.value("email").unwrap_or_default() })
    }

    pub async fn submit(&mut self, transport: &dyn SubmissionTransport) -> SubmitOutcome {
        let payload = self.payload();
        submit_form(
            &mut self.state,
            &self.endpoint,
            payload,
            transport,
            Self::SUCCESS_MESSAGE,
        )
        .await
    }
}

#[derive(Debug, Clone)]
pub struct DietaryForm {
    pub state: FormState,
    endpoint: String,
}

impl DietaryForm {
    pub const SUCCESS_MESSAGE: &'static str =
        "Thanks for dietary requirements. We will be in touch.";

    pub fn new(endpoint: impl Into<String>) -> Self {
        let state = FormState::new(
            vec![
                Field::Text(TextField::email(
                    "email",
                    "Confirm your email.",
                    "Enter the email you used to register with.",
                )),
                Field::MultiSelect(MultiSelectField::new(
                    "dietaryRequirements",
                    "Dietary Requirements",
                    "-- Please choose all dietary options that apply --",
                    dietary_options(),
                )),
                Field::Text(TextField::text(
                    "ticketRef",
                    "Ticket Reference",
                    "Enter your ticket reference",
                )),
                Field::Submit(SubmitAction::new("Send Details")),
            ],
            vec![Rule::required("email", EMPTY_EMAIL_MESSAGE)],
        );
        Self {
            state,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_email(&mut self, email: &str) {
        self.state.set_text("email", email);
    }

    pub fn set_ticket_ref(&mut self, ticket_ref: &str) {
        self.state.set_text("ticketRef", ticket_ref);
    }

    pub fn select_dietary<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) {
        self.state.select("dietaryRequirements", tags);
    }

    pub fn payload(&self, now: DateTime<Utc>) -> Value {
        json!({
            "email": self.state.value("email").unwrap_or_default(),
            "dietaryRequirements": self.state.value("dietaryRequirements").unwrap_or_default(),
            "ticketRef": self.state.value("ticketRef").unwrap_or_default(),
            "created": now.timestamp(),
        })
    }

    pub async fn submit(
        &mut self,
        transport: &dyn SubmissionTransport,
        now: DateTime<Utc>,
    ) -> SubmitOutcome {
        let payload = self.payload(now);
        submit_form(
            &mut self.state,
            &self.endpoint,
            payload,
            transport,
            Self::SUCCESS_MESSAGE,
        )
        .await
    }
}

pub fn dietary_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("none", "None"),
        SelectOption::new("Vegan", "Vegan"),
        SelectOption::new("Vegetarian", "Vegetarian"),
        SelectOption::new("Gluten Free", "Gluten Free"),
        SelectOption::new("Allergy", "Food Allergy"),
    ]
}
