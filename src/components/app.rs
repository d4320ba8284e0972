use super::{auth_form::AuthForm, dashboard::Dashboard};
use crate::model::Session;
use crate::session::SessionStore;
use yew::prelude::*;

/// Top-level router: an authenticated session shows the dashboard,
/// otherwise the auth form.
#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(|| None::<Session>);
    let restoring = use_state(|| true);

    // Restore is purely local; a stale token only surfaces once the first
    // authenticated call comes back rejected.
    {
        let session = session.clone();
        let restoring = restoring.clone();
        use_effect_with((), move |_| {
            session.set(SessionStore::browser().load());
            restoring.set(false);
            || ()
        });
    }

    let on_login = {
        let session = session.clone();
        Callback::from(move |s: Session| session.set(Some(s)))
    };
    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            SessionStore::browser().clear();
            session.set(None);
        })
    };

    if *restoring {
        return html! {
            <div style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:#0e1116; color:#e6edf3; font-size:24px;">
                {"Loading..."}
            </div>
        };
    }

    match (*session).clone() {
        Some(active) => html! { <Dashboard session={active} on_logout={on_logout} /> },
        None => html! { <AuthForm on_login={on_login} /> },
    }
}
