//! Browser bridges: downloads, file reading, dialogs, clock

use chrono::{DateTime, Utc};
use gloo::file::{Blob, ObjectUrl};
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlAnchorElement, ProgressEvent};

pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Offer `contents` as a file download
pub fn download_text(file_name: &str, contents: &str, mime_type: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "anchor element unavailable".to_string())?;

    let url = ObjectUrl::from(Blob::new_with_options(contents, Some(mime_type)));
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // revoked once the download has started
    Timeout::new(1_000, move || drop(url)).forget();
    Ok(())
}

/// Read a picked file as UTF-8 text
pub fn read_file_text<F>(file: File, on_done: F) -> Result<(), String>
where
    F: FnOnce(Result<String, String>) + 'static,
{
    let reader = FileReader::new().map_err(|e| format!("{e:?}"))?;

    let reader_clone = reader.clone();
    let closure = Closure::once(move |_: ProgressEvent| {
        let text = reader_clone
            .result()
            .ok()
            .and_then(|result| result.as_string())
            .ok_or_else(|| "el archivo no contiene texto".to_string());
        on_done(text);
    });

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    reader.read_as_text(&file).map_err(|e| format!("{e:?}"))
}

pub fn confirm(message: &str) -> bool {
    gloo::dialogs::confirm(message)
}

pub fn alert(message: &str) {
    gloo::dialogs::alert(message)
}
