use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use chrono::Utc;

use crate::agenda::AgendaItem;
use crate::error::AppError;
use crate::state::SharedState;
use crate::widgets::{DietaryForm, Field, FormState, SubscribeForm};

#[derive(Template)]
#[template(path = "site/index.html")]
struct IndexTemplate {
    domain_name: String,
    event: Option<EventView>,
    forms: Vec<FormView>,
}

struct EventView {
    status: String,
    css_class: &'static str,
}

struct FormView {
    id: &'static str,
    title: &'static str,
    action: String,
    message: String,
    fields: Vec<FieldView>,
}

struct FieldView {
    kind: &'static str,
    name: String,
    label: String,
    input_type: &'static str,
    placeholder: String,
    value: String,
    options: Vec<OptionView>,
}

struct OptionView {
    value: String,
    label: String,
    selected: bool,
}

impl FormView {
    fn new(id: &'static str, title: &'static str, action: &str, state: &FormState) -> Self {
        Self {
            id,
            title,
            action: action.to_string(),
            message: state.message().unwrap_or_default().to_string(),
            fields: state.fields().iter().map(FieldView::from).collect(),
        }
    }
}

impl From<&Field> for FieldView {
    fn from(field: &Field) -> Self {
        let blank = FieldView {
            kind: "",
            name: String::new(),
            label: String::new(),
            input_type: "",
            placeholder: String::new(),
            value: String::new(),
            options: Vec::new(),
        };
        match field {
            Field::Text(f) => FieldView {
                kind: "text",
                name: f.name.clone(),
                label: f.label.clone(),
                input_type: f.kind.html_type(),
                placeholder: f.placeholder.clone(),
                value: f.value.clone(),
                ..blank
            },
            Field::MultiSelect(f) => FieldView {
                kind: "multiselect",
                name: f.name.clone(),
                label: f.label.clone(),
                placeholder: f.prompt.clone(),
                options: f
                    .options
                    .iter()
                    .map(|opt| OptionView {
                        value: opt.value.clone(),
                        label: opt.label.clone(),
                        selected: f.is_selected(&opt.value),
                    })
                    .collect(),
                ..blank
            },
            Field::Submit(action) => FieldView {
                kind: "submit",
                label: action.label.clone(),
                ..blank
            },
        }
    }
}

pub async fn index(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let config = &state.config;
    let now = Utc::now();

    let event = config.event_start.map(|start| {
        let status = AgendaItem::new(&config.domain_name, start, config.event_end).status(now);
        EventView {
            status: status.label(),
            css_class: status.css_class(),
        }
    });

    let subscribe = SubscribeForm::new(config.api_url.clone());
    let dietary = DietaryForm::new(config.api_url.clone());

    let template = IndexTemplate {
        domain_name: config.domain_name.clone(),
        event,
        forms: vec![
            FormView::new("register", "Register your interest", subscribe.endpoint(), &subscribe.state),
            FormView::new("dietary", "Let us know any dietary requirements", dietary.endpoint(), &dietary.state),
        ],
    };

    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render index: {e}")))?;
    Ok(Html(html))
}
