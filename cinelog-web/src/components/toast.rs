use gloo_timers::callback::Timeout;
use yew::{Callback, Html, Properties, function_component, html, use_effect_with};

const TOAST_MILLIS: u32 = 3_000;

/// A transient notification line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub text: String,
    pub is_error: bool,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    #[prop_or_default]
    pub message: Option<ToastMessage>,
    pub on_clear: Callback<()>,
}

/// Toast overlay that clears itself after a few seconds. Dropping the
/// timeout on message change cancels the previous timer.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_clear = props.on_clear.clone();
        use_effect_with(props.message.clone(), move |message| {
            let timer = message
                .as_ref()
                .map(|_| Timeout::new(TOAST_MILLIS, move || on_clear.emit(())));
            move || drop(timer)
        });
    }

    match &props.message {
        Some(message) => {
            let alert_class = if message.is_error {
                "alert alert-error"
            } else {
                "alert alert-success"
            };
            html! {
                <div class="toast toast-end z-50">
                    <div class={alert_class}>
                        <span>{ message.text.clone() }</span>
                    </div>
                </div>
            }
        }
        None => Html::default(),
    }
}
