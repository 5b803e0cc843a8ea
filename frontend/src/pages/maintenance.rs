use yew::prelude::*;

use crate::components::icons::icon_tool;

#[function_component(MaintenancePage)]
pub fn maintenance_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[calc(100vh-80px)] text-center gap-6">
            <span class="text-blue-500 scale-[3]">{ icon_tool() }</span>
            <h2 class="text-xl font-semibold text-gray-300">
                {"Esta sección se encuentra en mantenimiento."}
                <br />
                {"Estamos trabajando para ofrecerte una mejor experiencia."}
            </h2>
        </div>
    }
}
