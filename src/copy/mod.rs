//! Copy-to-clipboard buttons for rendered code blocks.

mod clipboard;
mod component;
mod inject;
mod state;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use component::CopyCodeButton;
pub use inject::{inject_copy_buttons, CONTAINER_CLASS};
pub use state::{capture_code_text, CopyButtonState, CopyStatus, BUTTON_CLASS};
