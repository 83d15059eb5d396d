use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct UserDropdownProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Avatar dropdown with the sign-out action.
#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| {
            if let Some(callback) = &on_logout {
                callback.emit(());
            }
        })
    };

    html! {
        <div class="dropdown dropdown-end">
            <button class="btn btn-ghost btn-circle">
                <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-5 h-5" />
            </button>
            <ul tabindex="0" class="dropdown-content menu z-[1] bg-base-200 p-2 rounded-box shadow w-40">
                <li><a {onclick}>{"Sign out"}</a></li>
            </ul>
        </div>
    }
}
