use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ApiError, AuthApi};
use crate::components::icons::{icon_lock_closed, icon_lock_open};
use crate::config::AppConfig;
use crate::models::Credentials;
use crate::remote::use_mounted;
use crate::session::{Session, SessionContext};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoginError {
    #[error("Por favor, completá todos los campos.")]
    MissingFields,
    #[error("Credenciales inválidas")]
    InvalidCredentials,
    #[error("No se pudo conectar con el servidor.")]
    Unreachable,
}

pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, LoginError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(LoginError::MissingFields);
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Validates, then exchanges the credentials. Nothing is sent when
/// validation fails.
pub async fn sign_in_with<A: AuthApi>(
    api: &A,
    username: &str,
    password: &str,
) -> Result<Session, LoginError> {
    let credentials = validate_credentials(username, password)?;
    match api.demo_login(&credentials).await {
        Ok(token) => Ok(Session {
            token,
            display_name: credentials.username,
        }),
        Err(ApiError::Network(e)) => {
            tracing::warn!(error = %e, "login request did not reach the server");
            Err(LoginError::Unreachable)
        }
        Err(e) => {
            tracing::warn!(error = %e, "login rejected");
            Err(LoginError::InvalidCredentials)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_authenticated: Callback<()>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let session = use_context::<SessionContext>();
    let mounted = use_mounted();

    let username = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let username_val = (*username).clone();
            let password_val = (*password).clone();
            if let Err(err) = validate_credentials(&username_val, &password_val) {
                error.set(Some(err.to_string()));
                return;
            }

            loading.set(true);
            let client = ApiClient::new(&config, None);
            let session = session.clone();
            let error = error.clone();
            let loading = loading.clone();
            let on_authenticated = on_authenticated.clone();
            let mounted = mounted.clone();

            spawn_local(async move {
                let result = sign_in_with(&client, &username_val, &password_val).await;
                if !*mounted.borrow() {
                    return;
                }
                match result {
                    Ok(next) => {
                        tracing::info!("login accepted");
                        if let Some(session) = &session {
                            session.sign_in(next);
                        }
                        on_authenticated.emit(());
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    html! {
        <div class="min-h-screen bg-[#1b1e20] flex items-center justify-center px-4">
            <form onsubmit={on_submit} class="bg-[#111314] text-white w-full max-w-md p-8 rounded-xl shadow-lg space-y-6">
                <div class="flex justify-center">
                    <span class="text-3xl font-black tracking-tight">{"dTalent"}</span>
                </div>

                <div class="space-y-1">
                    <label class="text-sm text-gray-400">{"Número de documento"}</label>
                    <input
                        type="text"
                        placeholder="1.234.567-8"
                        class="w-full px-4 py-2 bg-transparent border border-gray-600 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:border-blue-500"
                        value={(*username).clone()}
                        oninput={{
                            let username = username.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                username.set(input.value());
                            })
                        }}
                    />
                </div>

                <div class="space-y-1">
                    <label class="text-sm text-gray-400">{"Contraseña"}</label>
                    <div class="relative">
                        <input
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="••••••••••••"
                            class="w-full px-4 py-2 pr-10 bg-transparent border border-blue-600 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:border-blue-500 transition-colors duration-200"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                        <button
                            type="button"
                            onclick={toggle_password}
                            class="absolute right-3 top-1/2 transform -translate-y-1/2 text-blue-500 hover:text-blue-400 transition duration-200"
                        >
                            { if *show_password { icon_lock_open() } else { icon_lock_closed() } }
                        </button>
                    </div>
                </div>

                <button
                    type="submit"
                    class="w-full bg-blue-600 hover:bg-blue-700 text-white font-semibold py-2 rounded-lg"
                    disabled={*loading}
                >
                    { if *loading { "INGRESANDO..." } else { "INICIAR SESIÓN" } }
                </button>

                if let Some(msg) = &*error {
                    <p class="text-red-500 text-center text-sm mt-2">{ msg.clone() }</p>
                }

                <div class="text-center">
                    <a href="#" class="text-sm text-blue-400 hover:underline">{"¿Olvidaste tu contraseña?"}</a>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeAuth {
        calls: Cell<usize>,
        answer: Result<String, ApiError>,
    }

    impl FakeAuth {
        fn answering(answer: Result<String, ApiError>) -> Self {
            Self {
                calls: Cell::new(0),
                answer,
            }
        }
    }

    impl AuthApi for FakeAuth {
        async fn demo_login(&self, _credentials: &Credentials) -> Result<String, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.answer.clone()
        }
    }

    #[test]
    fn empty_password_never_reaches_the_server() {
        let api = FakeAuth::answering(Ok("t".into()));
        let result = block_on(sign_in_with(&api, "1.234.567-8", ""));
        assert_eq!(result, Err(LoginError::MissingFields));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Por favor, completá todos los campos."
        );
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn whitespace_only_fields_are_blank() {
        assert_eq!(validate_credentials("   ", "secret"), Err(LoginError::MissingFields));
        assert_eq!(validate_credentials("user", " \t"), Err(LoginError::MissingFields));
    }

    #[test]
    fn success_keeps_token_and_submitted_username() {
        let api = FakeAuth::answering(Ok("abc".into()));
        let session = block_on(sign_in_with(&api, "1.234.567-8", "pw")).unwrap();
        assert_eq!(
            session,
            Session {
                token: "abc".into(),
                display_name: "1.234.567-8".into(),
            }
        );
        assert_eq!(api.calls.get(), 1);
    }

    #[test]
    fn any_rejection_is_reported_generically() {
        for status in [400, 401, 403, 500] {
            let api = FakeAuth::answering(Err(ApiError::Status(status)));
            let result = block_on(sign_in_with(&api, "user", "pw"));
            assert_eq!(result, Err(LoginError::InvalidCredentials));
        }
    }

    #[test]
    fn network_failure_is_distinguished() {
        let api = FakeAuth::answering(Err(ApiError::Network("offline".into())));
        let result = block_on(sign_in_with(&api, "user", "pw"));
        assert_eq!(result, Err(LoginError::Unreachable));
    }
}
