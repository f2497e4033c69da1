use leptos::*;

use crate::components::forms::SignupError;

#[component]
pub fn ValidationStatusView(
    validation_error: Signal<Option<SignupError>>,
) -> impl IntoView {
    view! {
        // Show the error message of the last submit attempt, if any
        { move || if let Some(error) = validation_error.get() {
            view! {
                <p class="text-red-500">
                    {error.message()}
                </p>
            }.into_view()
        } else {
            view! { }.into_view()
        }}
    }
}
