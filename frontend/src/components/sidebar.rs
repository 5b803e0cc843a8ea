use yew::prelude::*;

use crate::components::icons::{icon_close, icon_file, icon_megaphone, icon_settings, icon_users};
use crate::config::{AppConfig, SidebarName};
use crate::session::SessionContext;
use crate::Page;

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Empleados",
        page: Page::Employees,
        icon: icon_users,
    },
    NavItem {
        label: "Recibos",
        page: Page::Receipts,
        icon: icon_file,
    },
    NavItem {
        label: "Comunicados",
        page: Page::Communications,
        icon: icon_megaphone,
    },
    NavItem {
        label: "Configuración",
        page: Page::Settings,
        icon: icon_settings,
    },
];

/// Name shown in the sidebar footer.
pub fn greeting_name(source: &SidebarName, session_name: Option<String>) -> String {
    match source {
        SidebarName::Fixed(name) => name.clone(),
        SidebarName::Session => session_name.unwrap_or_default(),
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active_page: Page,
    pub on_select: Callback<Page>,
    /// Present on the mobile overlay variant only.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let session = use_context::<SessionContext>();
    let username = greeting_name(
        &config.sidebar_name,
        session.as_ref().and_then(|s| s.display_name()),
    );
    let avatar = username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();

    html! {
        <div class="fixed md:static top-0 left-0 h-full md:h-screen w-64 bg-[#111314] text-white flex flex-col justify-between shadow-lg z-50">
            <div class="p-4 space-y-6">
                <div class="flex justify-between items-center">
                    <span class="text-2xl font-black tracking-tight">{"dTalent"}</span>
                    if let Some(on_close) = props.on_close.clone() {
                        <button class="md:hidden text-white text-xl" aria-label="Cerrar menú" onclick={Callback::from(move |_| on_close.emit(()))}>
                            { icon_close() }
                        </button>
                    }
                </div>

                <nav class="space-y-2 mt-4">
                    { for NAV_ITEMS.iter().map(|item| {
                        let class_name = if item.page == props.active_page {
                            "flex items-center gap-3 px-4 py-2 rounded-lg w-full font-medium transition duration-200 bg-blue-600 text-white"
                        } else {
                            "flex items-center gap-3 px-4 py-2 rounded-lg w-full font-medium transition duration-200 text-gray-300 hover:bg-[#1b1e20] hover:text-white"
                        };
                        let on_select = props.on_select.clone();
                        let on_close = props.on_close.clone();
                        let page = item.page;

                        html! {
                            <button type="button" key={item.label} class={class_name} onclick={Callback::from(move |_| {
                                on_select.emit(page);
                                if let Some(on_close) = &on_close {
                                    on_close.emit(());
                                }
                            })}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span>{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>
            </div>

            <div class="p-4 border-t border-[#1f1f1f] flex items-center gap-3">
                <div class="bg-blue-700 text-white w-10 h-10 rounded-full flex items-center justify-center font-bold">
                    { avatar }
                </div>
                <div class="text-sm leading-tight">
                    <p class="text-gray-400">{"Bienvenido"}</p>
                    <p class="text-white font-semibold">{ username }</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_name_ignores_session() {
        let name = greeting_name(&SidebarName::Fixed("dLab".into()), Some("1.234.567-8".into()));
        assert_eq!(name, "dLab");
    }

    #[test]
    fn session_name_when_configured() {
        let name = greeting_name(&SidebarName::Session, Some("1.234.567-8".into()));
        assert_eq!(name, "1.234.567-8");
        assert_eq!(greeting_name(&SidebarName::Session, None), "");
    }

    #[test]
    fn every_page_has_an_entry() {
        let pages: Vec<Page> = NAV_ITEMS.iter().map(|item| item.page).collect();
        assert_eq!(
            pages,
            vec![Page::Employees, Page::Receipts, Page::Communications, Page::Settings]
        );
    }
}
