// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{self, HtmlAnchorElement, Window};

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    /// Hands `bytes` to the browser as a file download via a Blob object
    /// URL and a synthetic anchor click.
    pub async fn save_file(name: &str, mime: &str, bytes: Vec<u8>) -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes.as_slice()).into());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(parts.as_ref(), &options)
            .map_err(|_| "failed to create blob".to_string())?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "failed to create object url".to_string())?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "failed to create anchor".to_string())?
            .dyn_into()
            .map_err(|_| "failed to cast to HtmlAnchorElement".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(name);

        body.append_child(&anchor)
            .map_err(|_| "failed to attach anchor".to_string())?;
        anchor.click();
        body.remove_child(&anchor)
            .map_err(|_| "failed to detach anchor".to_string())?;
        web_sys::Url::revoke_object_url(&url).ok();

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        // arboard is blocking; keep it off the UI task.
        tokio::task::spawn_blocking(move || {
            arboard::Clipboard::new()
                .and_then(|mut clipboard| clipboard.set_text(text))
                .is_ok()
        })
        .await
        .unwrap_or(false)
    }

    /// Prompts the user for a save location and writes `bytes` there.
    /// Cancelling the dialog is not an error.
    pub async fn save_file(name: &str, _mime: &str, bytes: Vec<u8>) -> Result<(), String> {
        let file_handle = rfd::AsyncFileDialog::new()
            .set_file_name(name)
            .save_file()
            .await;

        if let Some(handle) = file_handle {
            tokio::fs::write(handle.path(), bytes)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}
