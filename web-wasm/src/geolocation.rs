//! One-shot device location acquisition

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use leafscan_common::Coordinates;
use wasm_bindgen::prelude::*;
use web_sys::{Position, PositionError};

/// Acquire device coordinates once. Single attempt, no retry, no
/// timeout beyond the platform's own.
///
/// Permission denial, platform errors and unsupported browsers all
/// resolve to absent coordinates; the caller is never blocked on
/// location availability.
pub async fn acquire() -> Coordinates {
    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok())
    else {
        return Coordinates::absent();
    };

    let (sender, receiver) = oneshot::channel();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_success = {
        let sender = sender.clone();
        Closure::wrap(Box::new(move |position: Position| {
            if let Some(sender) = sender.borrow_mut().take() {
                let coords = position.coords();
                let _ = sender.send(Coordinates {
                    latitude: Some(coords.latitude()),
                    longitude: Some(coords.longitude()),
                });
            }
        }) as Box<dyn FnMut(Position)>)
    };

    let on_error = {
        let sender = sender.clone();
        Closure::wrap(Box::new(move |_error: PositionError| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Coordinates::absent());
            }
        }) as Box<dyn FnMut(PositionError)>)
    };

    if geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .is_err()
    {
        return Coordinates::absent();
    }

    on_success.forget();
    on_error.forget();

    receiver.await.unwrap_or_else(|_| Coordinates::absent())
}
