use super::fields::Field;

/// A validation rule checked before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required { field: String, message: String },
}

impl Rule {
    pub fn required(field: &str, message: &str) -> Self {
        Rule::Required {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    fn check(&self, form: &FormState) -> Result<(), String> {
        match self {
            Rule::Required { field, message } => {
                let filled = form
                    .value(field)
                    .is_some_and(|v| !v.trim().is_empty());
                if filled { Ok(()) } else { Err(message.clone()) }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<Field>,
    rules: Vec<Rule>,
    message: Option<String>,
}

impl FormState {
    pub fn new(fields: Vec<Field>, rules: Vec<Rule>) -> Self {
        Self {
            fields,
            rules,
            message: None,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == Some(name))
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|f| f.name() == Some(name))
            .and_then(|f| f.value())
    }

    pub fn set_text(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(Field::Text(f)) => {
                f.value = value.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn select<'a>(&mut self, name: &str, values: impl IntoIterator<Item = &'a str>) -> bool {
        match self.field_mut(name) {
            Some(Field::MultiSelect(f)) => {
                f.select(values);
                true
            }
            _ => false,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.rules.iter().try_for_each(|rule| rule.check(self))
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }
}
