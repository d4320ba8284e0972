use crate::api::{self, ApiClient};
use crate::model::{AuthResponse, LoginPayload, RegisterPayload, Session};
use crate::session::SessionStore;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub on_login: Callback<Session>,
}

/// Toggled login/registration form. Registration additionally requires an
/// email; a submit in flight disables the form until it resolves.
#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let mode = use_state(|| AuthMode::Login);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let to_login = {
        let mode = mode.clone();
        Callback::from(move |_| mode.set(AuthMode::Login))
    };
    let to_register = {
        let mode = mode.clone();
        Callback::from(move |_| mode.set(AuthMode::Register))
    };

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            username.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let mode = mode.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            busy.set(true);
            error.set(None);

            let mode_now = *mode;
            let username_val = (*username).clone();
            let email_val = (*email).clone();
            let password_val = (*password).clone();
            let busy = busy.clone();
            let error = error.clone();
            let on_login = on_login.clone();
            spawn_local(async move {
                let client = ApiClient::new();
                let result = match mode_now {
                    AuthMode::Login => {
                        client
                            .post_json(
                                "/auth/login",
                                &LoginPayload {
                                    username: &username_val,
                                    password: &password_val,
                                },
                            )
                            .await
                    }
                    AuthMode::Register => {
                        client
                            .post_json(
                                "/auth/register",
                                &RegisterPayload {
                                    username: &username_val,
                                    email: &email_val,
                                    password: &password_val,
                                },
                            )
                            .await
                    }
                }
                .and_then(|body| api::decode::<AuthResponse>(body));

                match result {
                    Ok(auth) => {
                        let session = Session {
                            token: auth.access_token,
                            user: auth.user,
                        };
                        SessionStore::browser().save(&session);
                        on_login.emit(session);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let tab_style = |active: bool| {
        if active {
            "flex:1; padding:8px 16px; border-radius:6px; border:none; background:#1f6feb; color:#fff; cursor:pointer;"
        } else {
            "flex:1; padding:8px 16px; border-radius:6px; border:none; background:transparent; color:#8b949e; cursor:pointer;"
        }
    };
    let input_style = "width:100%; box-sizing:border-box; padding:10px 14px; background:#161b22; border:1px solid #30363d; border-radius:8px; color:#e6edf3;";

    html! {
        <div style="min-height:100vh; display:flex; align-items:center; justify-content:center; background:linear-gradient(135deg, #1a1033, #0d1b3e, #101735); padding:16px;">
            <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:14px; padding:28px 32px; width:100%; max-width:400px;">
                <div style="text-align:center; margin-bottom:24px;">
                    <h1 style="margin:0 0 6px 0; font-size:30px; color:#e6edf3;">{"🎮 GameHub"}</h1>
                    <p style="margin:0; color:#8b949e;">{"Your Gaming Adventure Awaits"}</p>
                </div>

                <div style="display:flex; gap:4px; margin-bottom:20px; background:rgba(255,255,255,0.05); border-radius:8px; padding:4px;">
                    <button onclick={to_login} style={tab_style(*mode == AuthMode::Login)}>{"Login"}</button>
                    <button onclick={to_register} style={tab_style(*mode == AuthMode::Register)}>{"Register"}</button>
                </div>

                <form {onsubmit} style="display:flex; flex-direction:column; gap:12px;">
                    <input
                        type="text"
                        placeholder="Username"
                        value={(*username).clone()}
                        oninput={on_username}
                        style={input_style}
                        required={true}
                    />
                    if *mode == AuthMode::Register {
                        <input
                            type="email"
                            placeholder="Email"
                            value={(*email).clone()}
                            oninput={on_email}
                            style={input_style}
                            required={true}
                        />
                    }
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password}
                        style={input_style}
                        required={true}
                    />

                    if let Some(msg) = (*error).clone() {
                        <div style="color:#f85149; background:rgba(248,81,73,0.1); border:1px solid rgba(248,81,73,0.3); padding:10px 12px; border-radius:8px; font-size:13px;">
                            { msg }
                        </div>
                    }

                    <button
                        type="submit"
                        disabled={*busy}
                        style="padding:12px; background:linear-gradient(90deg, #1f6feb, #8957e5); border:none; border-radius:8px; color:#fff; font-weight:600; cursor:pointer;"
                    >
                        {
                            if *busy {
                                "Processing..."
                            } else if *mode == AuthMode::Login {
                                "Login"
                            } else {
                                "Register"
                            }
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
