use futures::future::LocalBoxFuture;
use futures::FutureExt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{js_error_message, WidgetError};

/// Where copied code goes. The page uses [`SystemClipboard`].
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), WidgetError>>;
}

/// `navigator.clipboard.writeText`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), WidgetError>> {
        // `navigator.clipboard` is undefined outside secure contexts.
        let clipboard = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w.navigator(), &JsValue::from_str("clipboard")).ok())
            .and_then(|value| value.dyn_into::<web_sys::Clipboard>().ok());
        let Some(clipboard) = clipboard else {
            return async { Err(WidgetError::Clipboard("Clipboard API unavailable".to_string())) }.boxed_local();
        };

        let promise = clipboard.write_text(text);
        async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| WidgetError::Clipboard(js_error_message(&e)))
        }
        .boxed_local()
    }
}
