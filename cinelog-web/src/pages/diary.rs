use crate::api::CinelogClient;
use crate::components::star_string;
use crate::config::FrontendConfig;
use crate::fetch::FetchGuard;
use crate::models::app_state::AppState;
use chrono::DateTime;
use shared::models::{Film, LogEntry};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

const DIARY_POSTER_WIDTH: u32 = 185;

/// Format an epoch-seconds watch date for display.
pub(crate) fn format_log_date(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|date| date.format("%b %e, %Y").to_string())
        .unwrap_or_else(|| "unknown date".to_string())
}

/// The session user's diary: every log joined with its film.
#[function_component(DiaryPage)]
pub fn diary_page() -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let entries = use_state(|| None::<Vec<(LogEntry, Film)>>);
    let error = use_state(|| None::<String>);
    let user_id = session.as_ref().as_ref().map(|s| s.user_id);

    {
        let entries = entries.clone();
        let error = error.clone();
        use_effect_with(user_id, move |user_id| {
            let guard = FetchGuard::new();
            let cleanup = guard.clone();
            if let Some(user_id) = *user_id {
                spawn_local(async move {
                    let client = CinelogClient::shared();
                    let logs = match client.user_logs(user_id).await {
                        Ok(logs) => logs,
                        Err(err) => {
                            if !guard.is_stale() {
                                error.set(Some(err.to_string()));
                            }
                            return;
                        }
                    };

                    // The logs endpoint returns film ids only; resolve each
                    // film and skip entries whose film has vanished.
                    let mut joined = Vec::with_capacity(logs.len());
                    for log in logs {
                        if let Ok(film) = client.film(log.film_id).await {
                            joined.push((log, film));
                        }
                    }

                    if guard.is_stale() {
                        return;
                    }
                    entries.set(Some(joined));
                });
            }
            move || cleanup.cancel()
        });
    }

    if let Some(message) = &*error {
        return html! {
            <div class="p-8 text-center text-base-content/70">{ message.clone() }</div>
        };
    }

    let Some(list) = &*entries else {
        return html! { <div class="p-8 text-center"><span class="loading loading-spinner"></span></div> };
    };

    let config = FrontendConfig::new();

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">{"Diary"}</h1>
            {
                if list.is_empty() {
                    html! {
                        <p class="text-base-content/60 text-center p-8">
                            {"No diary entries yet. Start logging films!"}
                        </p>
                    }
                } else {
                    html! {
                        <div class="space-y-3">
                            { for list.iter().map(|(log, film)| {
                                let poster = config.poster_url(&film.poster_path, DIARY_POSTER_WIDTH);
                                let review = if log.review_text.is_empty() {
                                    "No review".to_string()
                                } else {
                                    log.review_text.clone()
                                };
                                html! {
                                    <div class="card card-side bg-base-200 shadow">
                                        <figure class="w-24 shrink-0">
                                            <img src={poster} alt={film.title.clone()} />
                                        </figure>
                                        <div class="card-body p-4">
                                            <h2 class="card-title text-base">
                                                { format!("{} ({})", film.title, film.year) }
                                            </h2>
                                            <p class="text-warning">
                                                { format!("{} {:.1}/5", star_string(log.rating), log.rating) }
                                            </p>
                                            <p class="text-sm">{ review }</p>
                                            <p class="text-xs text-base-content/60">
                                                { format!("Watched: {}", format_log_date(log.log_date)) }
                                            </p>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_seconds_format_as_calendar_date() {
        // 2025-01-01T00:00:00Z
        let formatted = format_log_date(1_735_689_600);
        assert!(formatted.contains("2025"));
        assert!(formatted.contains("Jan"));
    }

    #[test]
    fn unrepresentable_dates_do_not_panic() {
        assert_eq!(format_log_date(i64::MAX), "unknown date");
    }
}
