use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Landing page behind the session guard.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="container">
            <h1>{ "Admin Dashboard" }</h1>
            <ul class="dashboard-links">
                <li><Link<Route> to={Route::Operators}>{ "Manage operators" }</Link<Route>></li>
                <li><Link<Route> to={Route::Vans}>{ "Manage vans" }</Link<Route>></li>
                <li><Link<Route> to={Route::Assignments}>{ "Assign operators to vans" }</Link<Route>></li>
            </ul>
        </div>
    }
}
