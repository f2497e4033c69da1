use leptos::*;

use crate::components::SignupForm;

#[component]
pub fn Signup() -> impl IntoView {
    view! {
        <div class="w-full text-2xl mb-4">"Create your account"</div>
        <SignupForm />
    }
}
