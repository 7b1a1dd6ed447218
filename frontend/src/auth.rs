use log::{error, info};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{ApiClient, Credentials};
use crate::session::{store_token, use_session, Session};
use crate::utils::input_value;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                                login page                                  */
/* -------------------------------------------------------------------------- */

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let navigator = use_navigator();
    let session = use_session();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let message = message.clone();
        let submitting = submitting.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let credentials = Credentials {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let session = session.clone();
            let navigator = navigator.clone();
            let message = message.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                // no token yet: the login call goes out anonymous
                match ApiClient::new(None).login(&credentials).await {
                    Ok(resp) => {
                        info!("signed in as {}", credentials.username);
                        store_token(&resp.token);
                        session.set(Session { token: Some(resp.token) });
                        if let Some(nav) = &navigator {
                            nav.push(&Route::Admin);
                        }
                    }
                    Err(e) if e.status() == Some(401) => message.set("Invalid username or password".into()),
                    Err(e) => {
                        error!("login: {e}");
                        message.set("Login failed".into());
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = input_value(&e) {
                username.set(v);
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = input_value(&e) {
                password.set(v);
            }
        })
    };

    html! {
        <div class="login-container">
            <h2>{ "Administrator login" }</h2>

            <form {onsubmit}>
                <input type="text" placeholder="Username" value={(*username).clone()} oninput={on_username} required={true} />
                <input type="password" placeholder="Password" value={(*password).clone()} oninput={on_password} required={true} />
                <button type="submit" disabled={*submitting}>{ "Log in" }</button>
            </form>

            {
                if !message.is_empty() {
                    html!(<p class="error">{ &*message }</p>)
                } else {
                    Html::default()
                }
            }
            <p><Link<Route> to={Route::Register}>{ "Create an account" }</Link<Route>></p>
        </div>
    }
}
