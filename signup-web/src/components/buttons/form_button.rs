use leptos::*;

use super::button_type::ButtonType;

#[derive(Clone)]
pub struct FormButton {
    button_type: ButtonType,
    text: Option<String>,
}

impl FormButton {
    pub fn new(button_type: ButtonType, text: Option<&str>) -> Self {
        Self {
            button_type,
            text: text.map(|s| s.to_string()),
        }
    }

    pub fn text(&self) -> String {
        self.text
            .clone()
            .unwrap_or_else(|| self.button_type.button_text().to_string())
    }

    pub fn button_class(&self) -> String {
        self.button_type.button_class()
    }

    pub fn into_view(self) -> impl IntoView {
        view! {
            <button
                type="submit"
                class=self.button_class()
            >
                {self.text()}
            </button>
        }
        .into_view()
    }
}
