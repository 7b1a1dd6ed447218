use gloo_dialogs::alert;
use log::{error, info};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::Registration;
use crate::session::use_session;
use crate::utils::input_value;
use crate::Route;

#[function_component(RegisterForm)]
pub fn register_form() -> Html {
    let navigator = use_navigator();
    let session = use_session();
    let form = use_state(Registration::default);
    let error_msg = use_state(String::new);
    let submitting = use_state(|| false);

    /* ------------------ <form onsubmit=…> --------------------- */
    let onsubmit = {
        let api = session.api();
        let form = form.clone();
        let error_msg = error_msg.clone();
        let submitting = submitting.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let body = (*form).clone();
            let api = api.clone();
            let navigator = navigator.clone();
            let error_msg = error_msg.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                match api.register(&body).await {
                    Ok(()) => {
                        info!("user {} registered", body.username);
                        alert("User registered successfully");
                        if let Some(nav) = &navigator {
                            nav.push(&Route::Login);
                        }
                    }
                    Err(e) => {
                        error!("register: {e}");
                        error_msg.set("Failed to register user".into());
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_username = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = input_value(&e) {
                form.set(Registration { username: v, ..(*form).clone() });
            }
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = input_value(&e) {
                form.set(Registration { password: v, ..(*form).clone() });
            }
        })
    };
    let on_role = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(v) = input_value(&e) {
                form.set(Registration { role_id: v, ..(*form).clone() });
            }
        })
    };

    /* ---------------------------- render --------------------------------- */
    html! {
        <div class="login-container">
            <form {onsubmit}>
                <h1>{ "Register" }</h1>
                <div class="form-group">
                    <label>{ "Username" }</label>
                    <input type="text" value={form.username.clone()} oninput={on_username} required={true} />
                </div>
                <div class="form-group">
                    <label>{ "Password" }</label>
                    <input type="password" value={form.password.clone()} oninput={on_password} required={true} />
                </div>
                <div class="form-group">
                    <label>{ "Role ID" }</label>
                    <input type="text" value={form.role_id.clone()} oninput={on_role} required={true} />
                </div>
                <button type="submit" disabled={*submitting}>{ "Register" }</button>
                {
                    if !error_msg.is_empty() {
                        html!(<p class="error">{ &*error_msg }</p>)
                    } else {
                        Html::default()
                    }
                }
            </form>
            <p><Link<Route> to={Route::Login}>{ "Back to login" }</Link<Route>></p>
        </div>
    }
}
