use super::field::FieldId;

/// The three user-entered values, owned by one mounted form instance.
/// Reset only when the component is re-created, never on a failed submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupInput {
    email: String,
    password: String,
    confirm_password: String,
}

impl SignupInput {
    /// Overwrites exactly the named slot. Performs no validation and has
    /// no other effect; accepts any string value.
    pub fn update_field(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
            FieldId::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let input = SignupInput::default();
        assert_eq!(input.email(), "");
        assert_eq!(input.password(), "");
        assert_eq!(input.confirm_password(), "");
    }

    #[test]
    fn update_field_overwrites_only_the_named_slot() {
        let mut input = SignupInput::default();

        input.update_field(FieldId::Email, "user@example.com".to_string());
        assert_eq!(input.email(), "user@example.com");
        assert_eq!(input.password(), "");
        assert_eq!(input.confirm_password(), "");

        input.update_field(FieldId::Password, "12345".to_string());
        assert_eq!(input.email(), "user@example.com");
        assert_eq!(input.password(), "12345");
        assert_eq!(input.confirm_password(), "");

        input.update_field(FieldId::ConfirmPassword, "1234".to_string());
        assert_eq!(input.email(), "user@example.com");
        assert_eq!(input.password(), "12345");
        assert_eq!(input.confirm_password(), "1234");
    }

    #[test]
    fn update_field_replaces_previous_value() {
        let mut input = SignupInput::default();
        input.update_field(FieldId::Password, "first".to_string());
        input.update_field(FieldId::Password, String::new());
        assert_eq!(input.password(), "");
    }

    #[test]
    fn field_reads_back_through_the_same_key() {
        let mut input = SignupInput::default();
        input.update_field(FieldId::ConfirmPassword, "päss wörd".to_string());
        assert_eq!(input.field(FieldId::ConfirmPassword), "päss wörd");
        assert_eq!(input.field(FieldId::Email), "");
    }
}
