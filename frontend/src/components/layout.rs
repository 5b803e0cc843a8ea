use yew::prelude::*;

use crate::components::icons::icon_menu;
use crate::components::Sidebar;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar_open = use_state(|| false);

    let open_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(true))
    };
    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(false))
    };

    html! {
        <div class="relative flex min-h-screen bg-[#1b1e20] text-white">
            <div class="hidden md:block">
                <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} />
            </div>

            if *sidebar_open {
                <div class="fixed inset-0 z-50 md:hidden">
                    <div class="fixed inset-0 bg-black bg-opacity-50" onclick={{
                        let close_sidebar = close_sidebar.clone();
                        Callback::from(move |_| close_sidebar.emit(()))
                    }}></div>
                    <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} on_close={close_sidebar.clone()} />
                </div>
            }

            <main class="flex-1 px-4 md:px-10 py-8 w-full">
                <button onclick={open_sidebar} class="md:hidden text-white text-2xl mb-4" aria-label="Abrir menú">
                    { icon_menu() }
                </button>
                { for props.children.iter() }
            </main>
        </div>
    }
}
