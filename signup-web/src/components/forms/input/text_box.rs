use leptos::*;

use crate::components::forms::{FieldId, InputFieldData, SignupInput};

#[component]
pub fn TextBoxView(
    input_data: InputFieldData,
    signup_input: RwSignal<SignupInput>,
) -> impl IntoView {
    // show Label and InputField; the error element is rendered once per
    // form, not per field
    let field_id = input_data.id();
    let label_text = input_data.label_text();
    let is_password = input_data.content_type().is_password();
    let placeholder_text = input_data.placeholder();

    view! {
        <div class="w-full flex-col items-start text-left mb-2">
            <InputFieldLabelView
                label_text
                field_name=field_id.name()
            />
            <InputFieldView
                is_password
                field_id
                signup_input
                placeholder_text
            />
        </div>
    }
}

#[component]
pub fn InputFieldLabelView(
    label_text: String,
    field_name: &'static str,
) -> impl IntoView {
    view! {
        <label for=field_name class="text-base font-semibold text-gray-900">
            {label_text}
        </label>
    }
}

#[component]
pub fn InputFieldView(
    is_password: bool,
    field_id: FieldId,
    signup_input: RwSignal<SignupInput>,
    placeholder_text: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type=if is_password { "password" } else { "text" }
            id=field_id.name()
            name=field_id.name()
            prop:value=move || signup_input.get().field(field_id).to_string()
            on:input=move |ev| {
                let value = event_target_value(&ev);
                signup_input.update(|input| input.update_field(field_id, value));
            }
            placeholder=placeholder_text
            class=get_input_class()
        />
    }
}

fn get_input_class() -> &'static str {
    "bg-gray-50 border border-gray-300 text-gray-900 rounded-lg \
     focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
}
