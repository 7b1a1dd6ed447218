use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::{precheck, verdict, AuthStatus};
use crate::logout::Logout;
use crate::session::use_session;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Admin shell: runs the session guard, then shows navigation and the page.
#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let auth_status = use_state(|| AuthStatus::Loading);

    /* ------------ role check (on mount and when the token changes) ------- */
    {
        let auth_status = auth_status.clone();
        let api = session.api();
        use_effect_with(session.token.clone(), move |token| {
            let to_login = move || {
                if let Some(nav) = &navigator {
                    nav.replace(&Route::Login);
                }
            };

            match precheck(token.as_deref()) {
                Some(status) => {
                    auth_status.set(status);
                    to_login();
                }
                None => {
                    auth_status.set(AuthStatus::Loading);
                    spawn_local(async move {
                        let status = verdict(&api.check_role().await);
                        auth_status.set(status);
                        if status == AuthStatus::Invalid {
                            to_login();
                        }
                    });
                }
            }
            || ()
        });
    }

    /* ---------------- conditional render ------------------------------- */
    match *auth_status {
        AuthStatus::Loading => html!(<p>{"Loading…"}</p>),
        AuthStatus::Invalid => html!(<p>{"Redirecting to login…"}</p>),
        AuthStatus::Valid => html! {
            <>
                <header class="header">
                    <div class="header-title">{"Fleet Admin"}</div>
                    <div class="header-logout">
                        <Logout />
                    </div>
                </header>

                <nav class="nav">
                    <ul class="nav-list">
                        <li class="nav-item"><Link<Route> to={Route::Admin}>{"Dashboard"}</Link<Route>></li>
                        <li class="nav-item"><Link<Route> to={Route::Operators}>{"Operators"}</Link<Route>></li>
                        <li class="nav-item"><Link<Route> to={Route::Vans}>{"Vans"}</Link<Route>></li>
                        <li class="nav-item"><Link<Route> to={Route::Assignments}>{"Assignments"}</Link<Route>></li>
                    </ul>
                </nav>

                <main class="main-content">
                    { for props.children.iter() }
                </main>
            </>
        },
    }
}
