use leptos::ev::SubmitEvent;
use leptos::*;
use uuid::Uuid;

use crate::components::buttons::{ButtonType, FormButton};
use crate::components::forms::helpers::ValidationStatusView;
use crate::components::forms::input::TextBoxView;
use crate::components::forms::{
    FieldContentType, FieldId, InputFieldData, SignupError, SignupInput,
    SignupValidator,
};

const EMAIL_LABEL: &str = "Email address:";
const PASSWORD_LABEL: &str = "Password:";
const CONFIRM_PASSWORD_LABEL: &str = "Confirm password:";
const PASSWORD_PLACEHOLDER: &str = "FJjf#q%2!32";

fn signup_fields() -> Vec<InputFieldData> {
    vec![
        InputFieldData::new(FieldId::Email, FieldContentType::PlainText)
            .with_label(EMAIL_LABEL),
        InputFieldData::new(FieldId::Password, FieldContentType::Password)
            .with_label(PASSWORD_LABEL)
            .with_placeholder(PASSWORD_PLACEHOLDER),
        InputFieldData::new(FieldId::ConfirmPassword, FieldContentType::Password)
            .with_label(CONFIRM_PASSWORD_LABEL)
            .with_placeholder(PASSWORD_PLACEHOLDER),
    ]
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let signup_input = create_rw_signal(SignupInput::default());
    let validation_error = create_rw_signal(None::<SignupError>);

    let validator = SignupValidator::new();
    let form_id = Uuid::new_v4().to_string();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = validator.validate(&signup_input.get_untracked());
        match &result {
            Some(error) => log::debug!("signup rejected: {}", error),
            None => log::debug!("signup input accepted"),
        }
        validation_error.set(result);
    };

    let fields = signup_fields();
    let submit_button = FormButton::new(ButtonType::Submit, None);

    // validation owns the error surface, so native constraint
    // validation stays off
    view! {
        <form
            id=form_id
            novalidate=true
            class="flex flex-wrap w-full max-w-2xl text-black border p-4 font-mono"
            on:submit=handle_submit
        >
            <For
                each=move || fields.clone().into_iter().enumerate()
                key=|(index, _)| *index
                children=move |(_, input_data)| {
                    view! {
                        <TextBoxView
                            input_data
                            signup_input
                        />
                    }
                }
            />
            <ValidationStatusView validation_error={validation_error.into()}/>
            {submit_button.into_view()}
        </form>
    }
}
