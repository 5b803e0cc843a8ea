mod api;
mod components;
mod config;
mod download;
mod format;
mod models;
mod pages;
mod remote;
mod session;
mod table;

use yew::prelude::*;

use crate::components::Layout;
use crate::config::AppConfig;
use crate::pages::{EmployeesPage, LoginPage, MaintenancePage, ReceiptsPage};
use crate::session::{BrowserStore, Session, SessionContext};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page {
    Employees,
    Receipts,
    Communications,
    Settings,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Screen {
    Login,
    Page(Page),
}

/// Every navigation goes through here: without a session token only the
/// login screen is reachable. The token itself is not validated.
fn guard(signed_in: bool, requested: Page) -> Screen {
    if signed_in {
        Screen::Page(requested)
    } else {
        Screen::Login
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(AppConfig::from_build_env);
    let current_session = use_state(|| Session::load(&BrowserStore));
    let session = SessionContext::new(current_session);
    let active_page = use_state(|| Page::Employees);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match guard(session.is_signed_in(), *active_page) {
        Screen::Login => {
            let active_page = active_page.clone();
            html! { <LoginPage on_authenticated={Callback::from(move |_| active_page.set(Page::Employees))} /> }
        }
        Screen::Page(page) => {
            let screen = match page {
                Page::Employees => html! { <EmployeesPage /> },
                Page::Receipts => html! { <ReceiptsPage /> },
                Page::Communications | Page::Settings => html! { <MaintenancePage /> },
            };
            html! {
                <Layout active_page={page} on_select={on_select}>
                    { screen }
                </Layout>
            }
        }
    };

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <ContextProvider<SessionContext> context={session}>
                { content }
            </ContextProvider<SessionContext>>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!(api = %AppConfig::from_build_env().api_base_url, "starting dashboard");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_users_only_reach_login() {
        for page in [Page::Employees, Page::Receipts, Page::Communications, Page::Settings] {
            assert_eq!(guard(false, page), Screen::Login);
        }
    }

    #[test]
    fn signed_in_users_reach_the_requested_page() {
        assert_eq!(guard(true, Page::Receipts), Screen::Page(Page::Receipts));
        assert_eq!(guard(true, Page::Settings), Screen::Page(Page::Settings));
    }
}
