use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{clear_token, use_session, Session};
use crate::Route;

#[function_component(Logout)]
pub fn logout() -> Html {
    let navigator = use_navigator();
    let session = use_session();

    let onclick = Callback::from(move |_| {
        clear_token();
        session.set(Session::default());
        log::info!("signed out");

        if let Some(nav) = &navigator {
            nav.replace(&Route::Login);
        }
    });

    html! { <button {onclick}>{ "Log out" }</button> }
}
