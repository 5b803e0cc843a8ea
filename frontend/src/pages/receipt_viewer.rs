use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::icons::{icon_download, icon_external_link, spinner};
use crate::config::AppConfig;
use crate::download::{save_as, RECEIPT_FILE_NAME};
use crate::remote::use_mounted;

#[derive(Properties, PartialEq)]
pub struct ReceiptViewerProps {
    pub pdf_url: String,
    pub on_close: Callback<()>,
}

/// Modal hosting a receipt PDF in an iframe.
#[function_component(ReceiptViewer)]
pub fn receipt_viewer(props: &ReceiptViewerProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let mounted = use_mounted();
    let loaded = use_state(|| false);
    let downloading = use_state(|| false);
    let download_error = use_state(|| None::<String>);

    let on_load = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    let on_open_tab = {
        let url = props.pdf_url.clone();
        Callback::from(move |_| {
            if let Some(window) = web_sys::window() {
                if window.open_with_url_and_target(&url, "_blank").is_err() {
                    tracing::warn!("could not open receipt in a new tab");
                }
            }
        })
    };

    let on_download = {
        let url = props.pdf_url.clone();
        let downloading = downloading.clone();
        let download_error = download_error.clone();
        Callback::from(move |_| {
            let client = ApiClient::new(&config, None);
            let url = url.clone();
            let downloading = downloading.clone();
            let download_error = download_error.clone();
            let mounted = mounted.clone();

            downloading.set(true);
            download_error.set(None);
            spawn_local(async move {
                let result = save_as(&client, &url, RECEIPT_FILE_NAME).await;
                if let Err(e) = &result {
                    tracing::error!(error = ?e, "receipt download failed");
                }
                if !*mounted.borrow() {
                    return;
                }
                download_error.set(result.err().map(|e| e.to_string()));
                downloading.set(false);
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-80 z-50 flex items-center justify-center">
            <div class="bg-white w-full max-w-5xl h-[90%] rounded-lg shadow-lg flex flex-col overflow-hidden">
                <div class="flex-1 overflow-hidden relative bg-gray-100">
                    if !*loaded {
                        <div class="absolute inset-0 flex items-center justify-center bg-white z-10">
                            { spinner() }
                        </div>
                    }
                    <iframe src={props.pdf_url.clone()} title="Recibo PDF" class="w-full h-full" onload={on_load}></iframe>
                </div>

                <div class="flex justify-between items-center px-6 py-4 bg-[#1b1e20] border-t border-gray-600">
                    <button onclick={on_close} class="bg-blue-700 text-white font-semibold px-6 py-2 rounded hover:bg-blue-800">
                        {"CERRAR"}
                    </button>
                    <div class="flex items-center gap-5 text-xl">
                        if let Some(msg) = &*download_error {
                            <span class="text-sm text-red-400">{ msg.clone() }</span>
                        }
                        <button onclick={on_open_tab} class="text-blue-500 hover:text-blue-300" title="Abrir en nueva pestaña">
                            { icon_external_link() }
                        </button>
                        <button onclick={on_download} class="text-blue-500 hover:text-blue-300 disabled:opacity-50" title="Descargar PDF" disabled={*downloading}>
                            { icon_download() }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
