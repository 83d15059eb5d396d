use yew::{Html, function_component, html};

/// Full-screen spinner shown while the session is being restored.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-100">
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}
