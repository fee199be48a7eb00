//! File decoding for row previews

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

/// Decode a selected file into a data-URL preview.
///
/// Resolves to `None` when the platform reader errors; the row is
/// kept and rendered without a preview.
pub async fn read_data_url(file: &File) -> Option<String> {
    let reader = FileReader::new().ok()?;
    let (sender, receiver) = oneshot::channel();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_load = {
        let sender = sender.clone();
        let reader = reader.clone();
        Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            let data_url = reader.result().ok().and_then(|value| value.as_string());
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(data_url);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let on_error = {
        let sender = sender.clone();
        Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(None);
            }
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_load.forget();
    on_error.forget();

    if reader.read_as_data_url(file).is_err() {
        return None;
    }

    receiver.await.unwrap_or(None)
}
