use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::SiteConfig;
use crate::error::{dom_error, WidgetError};

use super::clipboard::ClipboardSink;
use super::component::CopyCodeButton;
use super::state::capture_code_text;

pub const CONTAINER_CLASS: &str = "copy-code";

/// Decorate every code block matching the configured selector with a copy
/// button. Returns how many blocks were decorated.
///
/// Each block's text is read once, here. Later edits to the block do not
/// change what its button copies.
pub fn inject_copy_buttons(
    document: &web_sys::Document,
    config: &SiteConfig,
    clipboard: Rc<dyn ClipboardSink>,
) -> Result<usize, WidgetError> {
    let blocks = document
        .query_selector_all(&config.code_block_selector)
        .map_err(dom_error)?;

    let mut injected = 0;
    for index in 0..blocks.length() {
        let Some(block) = blocks
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };

        let text = capture_code_text(block.inner_text(), block.text_content());

        let container = document
            .create_element("div")
            .map_err(dom_error)?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| WidgetError::Dom("div is not an HtmlElement".to_string()))?;
        container.set_class_name(CONTAINER_CLASS);
        block.after_with_node_1(&container).map_err(dom_error)?;

        let strings = config.copy.clone();
        let revert_delay_ms = config.revert_delay_ms;
        let clipboard = clipboard.clone();
        log::debug!("Copy button {} captured {} bytes", index, text.len());

        leptos::mount::mount_to(container, move || {
            view! {
                <CopyCodeButton
                    text=text
                    strings=strings
                    revert_delay_ms=revert_delay_ms
                    clipboard=clipboard
                />
            }
        })
        .forget();
        injected += 1;
    }

    log::info!("Added copy buttons to {} code blocks", injected);
    Ok(injected)
}
