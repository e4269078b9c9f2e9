#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Email,
    Text,
}

impl InputKind {
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub kind: InputKind,
    pub value: String,
}

impl TextField {
    pub fn email(name: &str, label: &str, placeholder: &str) -> Self {
        Self::new(name, label, placeholder, InputKind::Email)
    }

    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self::new(name, label, placeholder, InputKind::Text)
    }

    fn new(name: &str, label: &str, placeholder: &str, kind: InputKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind,
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectField {
    pub name: String,
    pub label: String,
    pub prompt: String,
    pub options: Vec<SelectOption>,
    selected: Vec<String>,
}

impl MultiSelectField {
    pub fn new(name: &str, label: &str, prompt: &str, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            prompt: prompt.to_string(),
            options,
            selected: Vec::new(),
        }
    }

    /// Unknown values are dropped; the result follows option order.
    pub fn select<'a>(&mut self, values: impl IntoIterator<Item = &'a str>) {
        let wanted: Vec<&str> = values.into_iter().collect();
        self.selected = self
            .options
            .iter()
            .filter(|opt| wanted.contains(&opt.value.as_str()))
            .map(|opt| opt.value.clone())
            .collect();
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|s| s == value)
    }

    pub fn joined(&self) -> String {
        self.selected.join(", ")
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAction {
    pub label: String,
}

impl SubmitAction {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Text(TextField),
    MultiSelect(MultiSelectField),
    Submit(SubmitAction),
}

impl Field {
    pub fn name(&self) -> Option<&str> {
        match self {
            Field::Text(f) => Some(&f.name),
            Field::MultiSelect(f) => Some(&f.name),
            Field::Submit(_) => None,
        }
    }

    pub fn value(&self) -> Option<String> {
        match self {
            Field::Text(f) => Some(f.value.clone()),
            Field::MultiSelect(f) => Some(f.joined()),
            Field::Submit(_) => None,
        }
    }

    pub fn clear(&mut self) {
        match self {
            Field::Text(f) => f.value.clear(),
            Field::MultiSelect(f) => f.clear(),
            Field::Submit(_) => {}
        }
    }
}
