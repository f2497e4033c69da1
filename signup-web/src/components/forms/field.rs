/// Identifies one of the three sign-up inputs. `name()` doubles as the
/// stable DOM `id`/`name` attribute for the rendered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldId {
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm-password",
        }
    }
}

#[derive(Debug, Clone)]
pub enum FieldContentType {
    PlainText,
    Password,
}

impl FieldContentType {
    pub fn is_password(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl Default for FieldContentType {
    fn default() -> Self {
        Self::PlainText
    }
}

#[derive(Clone, Default, Debug)]
pub struct FieldLabel {
    text: String,
}

impl FieldLabel {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Presentation schema for a single input: label, content type and an
/// optional placeholder. Carries no value; values live in `SignupInput`.
#[derive(Clone)]
pub struct InputFieldData {
    id: FieldId,
    field_label: Option<FieldLabel>,
    field_content_type: FieldContentType,
    field_placeholder: Option<String>,
}

impl InputFieldData {
    pub fn new(id: FieldId, field_content_type: FieldContentType) -> Self {
        Self {
            id,
            field_label: None,
            field_content_type,
            field_placeholder: None,
        }
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.field_label = Some(FieldLabel::new(&label.into()));
        self
    }

    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.field_placeholder = Some(placeholder.into());
        self
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn label_text(&self) -> String {
        self.field_label
            .as_ref()
            .map_or_else(String::new, |label| label.text())
    }

    pub fn content_type(&self) -> &FieldContentType {
        &self.field_content_type
    }

    pub fn placeholder(&self) -> Option<String> {
        self.field_placeholder.clone()
    }
}
