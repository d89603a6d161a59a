//! Browser file helpers: preview reads and object URLs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the `FileReader` and `URL.createObjectURL` glue the avatar flow
//! needs. SSR builds have no files; the object URL release path no-ops there.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

/// Browser file handle; the unit type outside the browser build.
#[cfg(feature = "hydrate")]
pub type FileHandle = web_sys::File;
#[cfg(not(feature = "hydrate"))]
pub type FileHandle = ();

/// Failures from browser file APIs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileError {
    #[error("file reader unavailable: {0}")]
    ReaderUnavailable(String),

    #[error("file read failed")]
    ReadFailed,

    #[error("file read produced no data URL")]
    NotDataUrl,

    #[error("file read abandoned")]
    Abandoned,

    #[error("object URL creation failed: {0}")]
    ObjectUrl(String),
}

#[cfg(feature = "hydrate")]
fn js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// First file of a drop or input selection.
#[cfg(feature = "hydrate")]
pub fn first_file(files: Option<web_sys::FileList>) -> Option<web_sys::File> {
    files.and_then(|list| list.get(0))
}

/// Read `file` into a `data:` URL suitable for an `<img>` source.
#[cfg(feature = "hydrate")]
pub async fn read_data_url(file: &web_sys::File) -> Result<String, FileError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let reader = web_sys::FileReader::new().map_err(|e| FileError::ReaderUnavailable(js_error(&e)))?;
    let (tx, rx) = oneshot::channel::<Result<String, FileError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or(FileError::NotDataUrl);
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(result);
            }
        })
    };
    let onerror = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(FileError::ReadFailed));
            }
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(file).map_err(|e| FileError::ReaderUnavailable(js_error(&e)))?;

    let result = rx.await.unwrap_or(Err(FileError::Abandoned));
    reader.set_onload(None);
    reader.set_onerror(None);
    result
}

/// Create an object URL referencing `file`.
#[cfg(feature = "hydrate")]
pub fn create_object_url(file: &web_sys::File) -> Result<String, FileError> {
    web_sys::Url::create_object_url_with_blob(file).map_err(|e| FileError::ObjectUrl(js_error(&e)))
}

/// Whether `url` was produced by `create_object_url`.
pub fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

/// Release an object URL. Non-`blob:` URLs are ignored.
pub fn revoke_object_url(url: &str) {
    if !is_object_url(url) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("object URL revoke failed: {}", js_error(&e));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("object URL release skipped outside browser: {url}");
    }
}
