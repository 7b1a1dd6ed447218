use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod config;
mod guard;
mod logout;
mod modal;
mod models;
mod session;
mod utils;

// pages
mod assignments;
mod dashboard;
mod layout;
mod operators;
mod register;
mod vans;

use layout::MainLayout;
use session::SessionProvider;

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/admin")]
    Admin,
    #[at("/operators")]
    Operators,
    #[at("/vans")]
    Vans,
    #[at("/assignments")]
    Assignments,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html!(<Redirect<Route> to={Route::Admin} />),
        Route::Login => html!(<auth::LoginForm />),
        Route::Register => html!(<register::RegisterForm />),
        Route::Admin => html!(<MainLayout><dashboard::Dashboard /></MainLayout>),
        Route::Operators => html!(<MainLayout><operators::ManageOperators /></MainLayout>),
        Route::Vans => html!(<MainLayout><vans::ManageVans /></MainLayout>),
        Route::Assignments => html!(<MainLayout><assignments::ManageAssignments /></MainLayout>),
        Route::NotFound => html!(<h1>{"404 – Not Found"}</h1>),
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn main() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Admin.to_path(), "/admin");
        assert_eq!(Route::recognize("/operators"), Some(Route::Operators));
        assert_eq!(Route::recognize("/vans"), Some(Route::Vans));
    }
}
