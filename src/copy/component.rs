use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::config::CopyStrings;

use super::clipboard::ClipboardSink;
use super::state::CopyButtonState;

/// Revert one click after `delay_ms`. Timers are never cancelled.
fn schedule_revert(state: RwSignal<CopyButtonState>, delay_ms: u32) {
    let callback = wasm_bindgen::closure::Closure::once(move || {
        state.update(CopyButtonState::revert);
    });

    let scheduled = web_sys::window().map(|window| {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )
    });

    match scheduled {
        Some(Ok(_)) => callback.forget(),
        _ => {
            log::warn!("Could not schedule copy button reset, resetting now");
            state.update(CopyButtonState::revert);
        }
    }
}

/// Copy button plus its screen-reader status region for one code block.
#[component]
pub fn CopyCodeButton(
    /// Code captured from the block when the button was created
    #[prop(into)]
    text: String,
    strings: CopyStrings,
    /// How long the copied state stays visible after a click
    revert_delay_ms: u32,
    clipboard: Rc<dyn ClipboardSink>,
) -> impl IntoView {
    let state = RwSignal::new(CopyButtonState::default());
    let aria_label = strings.aria_label.clone();
    let strings = StoredValue::new(strings);
    let text = StoredValue::new(text);
    let clipboard = StoredValue::new_local(clipboard);

    let on_click = move |_| {
        let seq = state.try_update(CopyButtonState::click).unwrap_or_default();

        let text = text.get_value();
        let clipboard = clipboard.get_value();
        spawn_local(async move {
            if let Err(err) = clipboard.write_text(&text).await {
                log::warn!("Copy to clipboard failed: {}", err);
                state.update(|s| s.fail(seq));
            }
        });

        schedule_revert(state, revert_delay_ms);
    };

    view! {
        <button
            type="button"
            class=move || state.with(CopyButtonState::class)
            aria-label=aria_label
            on:click=on_click
        >
            {move || strings.with_value(|s| state.get().label(s).to_string())}
        </button>
        <span role="alert" class="screen-reader-only">
            {move || strings.with_value(|s| state.get().announcement(s).to_string())}
        </span>
    }
}
