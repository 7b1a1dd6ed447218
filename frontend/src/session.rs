use gloo::storage::{LocalStorage, Storage};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::TOKEN_KEY;

/* ---------------- session ---------------------------- */

/// Credentials of the signed-in user. Only the bearer token is kept; the
/// role is asked to the backend on every guarded page.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.token.clone())
    }
}

/* ---------------- persisted token ------------------ */

/// Token stored by a previous login, as a raw (non-JSON) string.
pub fn stored_token() -> Option<String> {
    LocalStorage::raw()
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

pub fn store_token(token: &str) {
    if LocalStorage::raw().set_item(TOKEN_KEY, token).is_err() {
        log::error!("cannot persist session token");
    }
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

/* ---------------- hook ------------------------------- */

pub type SessionHandle = UseStateHandle<Session>;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider missing")
}

/* -------------- provider props ------------------- */

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/* -------------- provider ------------------------- */

/// Reads local storage once and hands the session down through context.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(|| Session { token: stored_token() });

    html! {
        <ContextProvider<SessionHandle> context={session}>
            { for props.children.iter() }
        </ContextProvider<SessionHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_carries_token() {
        let session = Session { token: Some("t0k3n".into()) };
        assert_eq!(session.api().authorization().as_deref(), Some("Bearer t0k3n"));
    }
}
