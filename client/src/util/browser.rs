//! Hydrate-only browser glue: `localStorage`, prompts, downloads, file reads.

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FileReader, HtmlAnchorElement, HtmlImageElement, Storage, Window};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn local_storage() -> Option<Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("browser: localStorage unavailable: {e:?}");
            None
        }
    }
}

/// Read the string stored under `key` in `localStorage`.
pub fn load_item(key: &str) -> Option<String> {
    match local_storage()?.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("browser: cannot read {key}: {e:?}");
            None
        }
    }
}

/// Store `value` under `key` in `localStorage`.
pub fn save_item(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(key, value) {
        log::warn!("browser: cannot write {key}: {e:?}");
    }
}

/// Window inner size in CSS pixels.
pub fn window_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    match (window.inner_width(), window.inner_height()) {
        (Ok(w), Ok(h)) => Some((w.as_f64()?, h.as_f64()?)),
        _ => None,
    }
}

pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}

/// Ask the user for a line of text. `None` when cancelled.
pub fn prompt_text(message: &str, current: &str) -> Option<String> {
    let window = web_sys::window()?;
    match window.prompt_with_message_and_default(message, current) {
        Ok(answer) => answer,
        Err(e) => {
            log::warn!("browser: prompt failed: {e:?}");
            None
        }
    }
}

/// Save `data_url` as a file named `file_name`.
///
/// # Errors
///
/// Returns `Err` if the anchor element cannot be created.
pub fn download_data_url(data_url: &str, file_name: &str) -> Result<(), JsValue> {
    let document = window()?.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document.create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(data_url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// Read an image file as a data URL, decode it, then call `on_loaded` with
/// the data URL and the image's natural size.
///
/// # Errors
///
/// Returns `Err` if the file reader cannot be created or started.
pub fn read_image_file(file: &File, on_loaded: impl FnOnce(String, f64, f64) + 'static) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let reader_for_cb = reader.clone();
    EventListener::once(&reader, "load", move |_| {
        let src = match reader_for_cb.result() {
            Ok(value) => value.as_string(),
            Err(e) => {
                log::warn!("browser: file read failed: {e:?}");
                None
            }
        };
        let Some(src) = src else {
            return;
        };
        let img = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                log::warn!("browser: cannot decode image: {e:?}");
                return;
            }
        };
        let img_for_cb = img.clone();
        let data_url = src.clone();
        EventListener::once(&img, "load", move |_| {
            on_loaded(data_url, f64::from(img_for_cb.natural_width()), f64::from(img_for_cb.natural_height()));
        })
        .forget();
        img.set_src(&src);
    })
    .forget();
    reader.read_as_data_url(file)
}
