//! Small platform helpers shared by the producer and the intakes.

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Encodes raw bytes as a `data:` URI that an `img` element can display.
pub fn to_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// Waits for `duration` without blocking the UI thread (native version).
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Waits for `duration` without blocking the UI thread (WASM version).
///
/// Tokio timers do not run in the browser, so this wraps `setTimeout` in a
/// promise and awaits it.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    use dioxus::logger::tracing::warn;
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let ms = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = Promise::new(&mut |resolve, _reject| {
        let set_timeout = Reflect::get(&js_sys::global(), &JsValue::from_str("setTimeout"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        let Some(set_timeout) = set_timeout else {
            warn!("setTimeout unavailable, resolving immediately");
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };
        if let Err(e) = set_timeout.call2(&JsValue::NULL, &resolve, &JsValue::from(ms)) {
            warn!("setTimeout failed: {e:?}");
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
        warn!("timer promise rejected: {e:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_has_media_type_and_base64_payload() {
        assert_eq!(to_data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[tokio::test(start_paused = true)]
    async fn sleep_waits_for_the_duration() {
        let start = tokio::time::Instant::now();
        sleep(Duration::from_millis(2_000)).await;
        assert!(start.elapsed() >= Duration::from_millis(2_000));
    }
}
