use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::routes::Signup;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="signup" href="/pkg/tailwind.css"/>
        <Title text="Sign up"/>
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <Router>
                <main>
                    <Routes>
                        <Route path="" view=|| view! { <Signup/> }/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
