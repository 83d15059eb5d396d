use crate::api::CinelogClient;
use crate::components::star_rating::StarRating;
use crate::components::toast::ToastMessage;
use shared::models::LogDraft;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogComposerProps {
    pub film_id: i64,
    /// Fired after a log was accepted, so the host view can re-fetch.
    pub on_logged: Callback<()>,
    pub on_notice: Callback<ToastMessage>,
}

/// Star rating plus review box for logging a viewing.
///
/// The draft is validated locally first: an unrated submission never issues
/// a request. The submit button disables while a request is in flight.
#[function_component(LogComposer)]
pub fn log_composer(props: &LogComposerProps) -> Html {
    let rating = use_state(|| 0u8);
    let review = use_state(String::new);
    let submitting = use_state(|| false);

    let on_select = {
        let rating = rating.clone();
        Callback::from(move |value: u8| rating.set(value))
    };

    let on_review_change = {
        let review = review.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                review.set(input.value());
            }
        })
    };

    let onclick = {
        let film_id = props.film_id;
        let rating_handle = rating.clone();
        let review_handle = review.clone();
        let submitting_handle = submitting.clone();
        let on_logged = props.on_logged.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            let draft = LogDraft {
                film_id,
                rating: f32::from(*rating_handle),
                review_text: (*review_handle).clone(),
            };
            let request = match draft.into_request() {
                Ok(request) => request,
                Err(err) => {
                    on_notice.emit(ToastMessage::error(err.to_string()));
                    return;
                }
            };

            submitting_handle.set(true);
            let rating_reset = rating_handle.clone();
            let review_reset = review_handle.clone();
            let submitting_reset = submitting_handle.clone();
            let on_logged = on_logged.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                let client = CinelogClient::shared();
                match client.submit_log(&request).await {
                    Ok(_) => {
                        on_notice.emit(ToastMessage::success("Film logged!"));
                        rating_reset.set(0);
                        review_reset.set(String::new());
                        on_logged.emit(());
                    }
                    Err(err) => {
                        on_notice.emit(ToastMessage::error(err.to_string()));
                    }
                }
                submitting_reset.set(false);
            });
        })
    };

    html! {
        <div class="card bg-base-200 p-4 space-y-3">
            <h3 class="font-semibold">{"Log this film"}</h3>
            <StarRating selected={*rating} {on_select} />
            <textarea
                class="textarea textarea-bordered w-full"
                placeholder="Add a review..."
                value={(*review).clone()}
                oninput={on_review_change}
            />
            <button
                class="btn btn-primary btn-sm"
                disabled={*submitting}
                {onclick}
            >
                { if *submitting { "Logging..." } else { "Log" } }
            </button>
        </div>
    }
}
