use std::cmp::Ordering;

use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ApiError, ReceiptFiles};
use crate::components::icons::{icon_check, icon_close, icon_refresh};
use crate::components::{Column, DataTable};
use crate::config::AppConfig;
use crate::format::relative_from_now;
use crate::models::Receipt;
use crate::pages::ReceiptViewer;
use crate::remote::{use_mounted, use_remote_list};
use crate::session::SessionContext;
use crate::table::{
    compare_text, compare_timestamps, compare_timestamps_desc, FieldValue, FilterField, FilterKind, SortOption, TableRecord,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReceiptField {
    Kind,
    Year,
    Month,
    Sent,
    Read,
}

impl FilterField for ReceiptField {
    fn all() -> &'static [Self] {
        &[
            ReceiptField::Kind,
            ReceiptField::Year,
            ReceiptField::Month,
            ReceiptField::Sent,
            ReceiptField::Read,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            ReceiptField::Kind => "Tipo de remuneración",
            ReceiptField::Year => "Año",
            ReceiptField::Month => "Mes",
            ReceiptField::Sent => "Enviado",
            ReceiptField::Read => "Leído",
        }
    }

    fn kind(self) -> FilterKind {
        match self {
            ReceiptField::Sent | ReceiptField::Read => FilterKind::Flag { yes: "Sí", no: "No" },
            _ => FilterKind::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ReceiptSort {
    #[default]
    Newest,
    Oldest,
    Kind,
}

impl SortOption<Receipt> for ReceiptSort {
    fn all() -> &'static [Self] {
        &[ReceiptSort::Newest, ReceiptSort::Oldest, ReceiptSort::Kind]
    }

    fn label(self) -> &'static str {
        match self {
            ReceiptSort::Newest => "Más recientes",
            ReceiptSort::Oldest => "Más antiguos",
            ReceiptSort::Kind => "Tipo",
        }
    }

    fn compare(self, a: &Receipt, b: &Receipt) -> Ordering {
        match self {
            ReceiptSort::Newest => compare_timestamps_desc(&a.created_at, &b.created_at),
            ReceiptSort::Oldest => compare_timestamps(&a.created_at, &b.created_at),
            ReceiptSort::Kind => compare_text(&a.kind, &b.kind),
        }
    }
}

impl TableRecord for Receipt {
    type Field = ReceiptField;
    type Sort = ReceiptSort;

    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, field: ReceiptField) -> FieldValue {
        match field {
            ReceiptField::Kind => FieldValue::text(&self.kind),
            ReceiptField::Year => FieldValue::text(&self.year),
            ReceiptField::Month => FieldValue::text(&self.month),
            ReceiptField::Sent => FieldValue::Flag(self.is_sended),
            ReceiptField::Read => FieldValue::Flag(self.is_readed),
        }
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.kind.as_str()];
        if let Some(name) = &self.employee_full_name {
            text.push(name);
        }
        text
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OpenReceiptError {
    #[error("No se pudo abrir el recibo PDF.")]
    MissingFile,
    #[error("Error al abrir el recibo PDF.")]
    Request(#[from] ApiError),
}

pub async fn resolve_receipt_file<F: ReceiptFiles>(
    files: &F,
    id: &str,
) -> Result<String, OpenReceiptError> {
    files
        .receipt_file(id)
        .await?
        .ok_or(OpenReceiptError::MissingFile)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn flag_cell(done: bool, when: Option<&str>) -> Html {
    if !done {
        return html! { <span class="text-red-500">{ icon_close() }</span> };
    }
    html! {
        <>
            <span class="text-green-500">{ icon_check() }</span>
            if let Some(ago) = when.and_then(relative_from_now) {
                <div class="text-xs text-gray-400">{ ago }</div>
            }
        </>
    }
}

fn kind_cell(r: &Receipt) -> Html {
    html! { { r.kind.clone() } }
}

/// Blank names read as missing.
fn employee_name(r: &Receipt) -> &str {
    r.employee_full_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("-")
}

fn employee_cell(r: &Receipt) -> Html {
    html! {
        <>
            <div>{ employee_name(r) }</div>
            <div class="text-sm text-gray-400">{ format!("#{}", r.employee_number) }</div>
        </>
    }
}

fn period_cell(r: &Receipt) -> Html {
    html! { { format!("{}/{}", r.month, r.year) } }
}

fn sent_cell(r: &Receipt) -> Html {
    flag_cell(r.is_sended, r.sended_date.as_deref())
}

fn read_cell(r: &Receipt) -> Html {
    flag_cell(r.is_readed, r.readed_date.as_deref())
}

fn signed_cell(r: &Receipt) -> Html {
    flag_cell(r.is_signed, None)
}

fn columns() -> Vec<Column<Receipt>> {
    vec![
        Column::new("Tipo", kind_cell),
        Column::new("Empleado", employee_cell),
        Column::new("Fecha", period_cell),
        Column::new("Enviado", sent_cell),
        Column::new("Leído", read_cell),
        Column::new("Firmado", signed_cell),
    ]
}

#[function_component(ReceiptsPage)]
pub fn receipts_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let session = use_context::<SessionContext>();
    let receipts = use_remote_list::<Receipt>();
    let selected_pdf = use_state(|| None::<String>);
    let mounted = use_mounted();

    let on_row_click = {
        let selected_pdf = selected_pdf.clone();
        Callback::from(move |receipt: Receipt| {
            let client = ApiClient::new(&config, session.as_ref().and_then(|s| s.token()));
            let session = session.clone();
            let selected_pdf = selected_pdf.clone();
            let mounted = mounted.clone();

            spawn_local(async move {
                let result = resolve_receipt_file(&client, &receipt.id).await;
                if !*mounted.borrow() {
                    return;
                }
                match result {
                    Ok(url) => selected_pdf.set(Some(url)),
                    Err(OpenReceiptError::Request(ApiError::Unauthorized)) => {
                        if let Some(session) = &session {
                            session.invalidate();
                        }
                    }
                    Err(e) => {
                        tracing::error!(receipt = %receipt.id, error = ?e, "could not open receipt");
                        alert(&e.to_string());
                    }
                }
            });
        })
    };

    let on_close = {
        let selected_pdf = selected_pdf.clone();
        Callback::from(move |_| selected_pdf.set(None))
    };

    let refresh = {
        let reload = receipts.reload.clone();
        html! {
            <button
                class="flex items-center gap-2 bg-blue-700 px-4 py-2 rounded-md text-sm font-semibold hover:bg-blue-800"
                onclick={Callback::from(move |_| reload.emit(()))}
            >
                { icon_refresh() }
                {"REFRESCAR LISTA DE RECIBOS"}
            </button>
        }
    };

    html! {
        <>
            <DataTable<Receipt>
                title="Lista de recibos"
                state={receipts.state}
                columns={columns()}
                search_placeholder="Buscar recibos"
                no_match_message="Lo lamentamos, no se han encontrado registros disponibles."
                on_retry={receipts.reload}
                header_actions={refresh}
                on_row_click={on_row_click}
                echo_search={true}
            />

            if let Some(url) = (*selected_pdf).clone() {
                <ReceiptViewer key={url.clone()} pdf_url={url.clone()} on_close={on_close} />
            }
        </>
    }
}
