use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_solid(path: &'static str) -> Html {
    html! {
        <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 20 20">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_users() -> Html {
    icon_base("M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8zM23 21v-2a4 4 0 00-3-3.87M16 3.13a4 4 0 010 7.75")
}
pub fn icon_file() -> Html {
    icon_base("M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8zM14 2v6h6M16 13H8M16 17H8")
}
pub fn icon_megaphone() -> Html {
    icon_base("M3 11l18-8v18L3 13zM11.6 16.8a3 3 0 11-5.8-1.6")
}
pub fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
pub fn icon_menu() -> Html {
    icon_base("M3 6h18M3 12h18M3 18h18")
}
pub fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
pub fn icon_check() -> Html {
    icon_base("M20 6L9 17l-5-5")
}
pub fn icon_edit() -> Html {
    icon_base("M11 4H4a2 2 0 00-2 2v14a2 2 0 002 2h14a2 2 0 002-2v-7M18.5 2.5a2.1 2.1 0 013 3L12 15l-4 1 1-4z")
}
pub fn icon_external_link() -> Html {
    icon_base("M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6M15 3h6v6M10 14L21 3")
}
pub fn icon_download() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3")
}
pub fn icon_refresh() -> Html {
    icon_base("M23 4v6h-6M1 20v-6h6M3.5 9a9 9 0 0114.9-3.4L23 10M1 14l4.6 4.4A9 9 0 0020.5 15")
}
pub fn icon_alert() -> Html {
    icon_base("M12 9v4M12 17h.01M10.3 3.9L1.8 18a2 2 0 001.7 3h17a2 2 0 001.7-3L13.7 3.9a2 2 0 00-3.4 0z")
}
pub fn icon_tool() -> Html {
    icon_base("M14.7 6.3a1 1 0 000 1.4l1.6 1.6a1 1 0 001.4 0l3.8-3.8a6 6 0 01-7.9 7.9l-6.9 6.9a2.1 2.1 0 01-3-3l6.9-6.9a6 6 0 017.9-7.9z")
}
pub fn icon_search() -> Html {
    html! {
        <svg class="w-4 h-4 absolute right-3 top-1/2 transform -translate-y-1/2 text-gray-400" fill="currentColor" viewBox="0 0 20 20">
            <path fill-rule="evenodd" clip-rule="evenodd" d="M12.9 14.32a8 8 0 111.414-1.414l4.387 4.387-1.414 1.414-4.387-4.387zM8 14a6 6 0 100-12 6 6 0 000 12z"></path>
        </svg>
    }
}
pub fn icon_lock_open() -> Html {
    icon_solid("M18 8h-1V6a5 5 0 10-10 0h2a3 3 0 116 0v2H6a2 2 0 00-2 2v6a2 2 0 002 2h12a2 2 0 002-2v-6a2 2 0 00-2-2z")
}
pub fn icon_lock_closed() -> Html {
    icon_solid("M10 2a6 6 0 00-6 6v2H3v8h14v-8h-1V8a6 6 0 00-6-6zM8 8a2 2 0 114 0v2H8V8z")
}

pub fn spinner() -> Html {
    html! {
        <div class="h-16 w-16 rounded-full border-4 border-blue-600 border-t-transparent animate-spin"></div>
    }
}
