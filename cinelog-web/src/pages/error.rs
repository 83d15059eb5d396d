use yew::{Html, function_component, html};

/// Catch-all page for unknown paths. Unknown routes are surfaced instead of
/// silently ignored.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="p-4 space-y-6 text-center">
            <h1 class="text-2xl font-bold">{ "Page not found" }</h1>
            <p class="text-base-content/70">{ "The page you were looking for does not exist." }</p>
        </div>
    }
}
