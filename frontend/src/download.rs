//! Saving a remote PDF through a temporary object URL.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::api::{js_error, ApiClient, ApiError};

pub const RECEIPT_FILE_NAME: &str = "recibo.pdf";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DownloadError {
    #[error("No se pudo descargar el recibo.")]
    Fetch(#[from] ApiError),
    #[error("No se pudo preparar la descarga.")]
    Browser(String),
}

pub trait RevokeObjectUrl {
    fn revoke(&self, url: &str);
}

pub struct BrowserUrls;

impl RevokeObjectUrl for BrowserUrls {
    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            tracing::warn!(error = %js_error(e), "failed to revoke object url");
        }
    }
}

/// An object URL that is revoked when the guard goes out of scope.
pub struct ScopedObjectUrl<R: RevokeObjectUrl> {
    url: String,
    revoker: R,
}

impl<R: RevokeObjectUrl> ScopedObjectUrl<R> {
    pub fn new(url: String, revoker: R) -> Self {
        Self { url, revoker }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl<R: RevokeObjectUrl> Drop for ScopedObjectUrl<R> {
    fn drop(&mut self) {
        self.revoker.revoke(&self.url);
    }
}

fn browser(e: wasm_bindgen::JsValue) -> DownloadError {
    DownloadError::Browser(js_error(e))
}

/// Fetches `source` and triggers a save-as of the bytes under `file_name`.
pub async fn save_as(client: &ApiClient, source: &str, file_name: &str) -> Result<(), DownloadError> {
    let bytes = client.fetch_bytes(source).await?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(browser)?;
    let object_url = ScopedObjectUrl::new(
        Url::create_object_url_with_blob(&blob).map_err(browser)?,
        BrowserUrls,
    );

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::Browser("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| DownloadError::Browser("no body".into()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into()
        .map_err(|_| DownloadError::Browser("anchor cast failed".into()))?;
    anchor.set_href(object_url.as_str());
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(browser)?;
    anchor.click();
    body.remove_child(&anchor).map_err(browser)?;

    Ok(())
}
