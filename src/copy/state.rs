use crate::config::CopyStrings;

pub const BUTTON_CLASS: &str = "copy-code-button";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

/// Visible state of one copy button.
///
/// Every click schedules its own revert and none are cancelled. The button
/// stays out of `Idle` until the last outstanding revert has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyButtonState {
    status: CopyStatus,
    pending_reverts: u32,
    last_click: u64,
}

impl CopyButtonState {
    pub fn status(&self) -> CopyStatus {
        self.status
    }

    pub fn pending_reverts(&self) -> u32 {
        self.pending_reverts
    }

    pub fn is_copied(&self) -> bool {
        self.status == CopyStatus::Copied
    }

    /// A click: show the copied state and account for its revert timer.
    ///
    /// Returns the click's sequence number, to be handed back to
    /// [`fail`](Self::fail) if its clipboard write is rejected.
    pub fn click(&mut self) -> u64 {
        self.status = CopyStatus::Copied;
        self.pending_reverts += 1;
        self.last_click += 1;
        self.last_click
    }

    /// The write for click `seq` was rejected. Only the latest click's
    /// outcome is shown, and nothing changes once everything has reverted.
    pub fn fail(&mut self, seq: u64) {
        if seq == self.last_click && self.pending_reverts > 0 {
            self.status = CopyStatus::Failed;
        }
    }

    /// One revert timer fired.
    pub fn revert(&mut self) {
        self.pending_reverts = self.pending_reverts.saturating_sub(1);
        if self.pending_reverts == 0 {
            self.status = CopyStatus::Idle;
        }
    }

    pub fn label<'a>(&self, strings: &'a CopyStrings) -> &'a str {
        match self.status {
            CopyStatus::Idle => &strings.default,
            CopyStatus::Copied => &strings.copied,
            CopyStatus::Failed => &strings.failed,
        }
    }

    /// Text for the screen-reader status region.
    pub fn announcement<'a>(&self, strings: &'a CopyStrings) -> &'a str {
        match self.status {
            CopyStatus::Idle => "",
            CopyStatus::Copied => &strings.copied,
            CopyStatus::Failed => &strings.failed,
        }
    }

    pub fn class(&self) -> String {
        match self.status {
            CopyStatus::Idle => BUTTON_CLASS.to_string(),
            CopyStatus::Copied => format!("{} copied", BUTTON_CLASS),
            CopyStatus::Failed => format!("{} copy-failed", BUTTON_CLASS),
        }
    }
}

/// Text to copy for a block: its rendered `innerText`, or `textContent` when
/// the block renders no text (e.g. it is hidden).
pub fn capture_code_text(inner_text: String, text_content: Option<String>) -> String {
    if inner_text.is_empty() {
        text_content.unwrap_or_default()
    } else {
        inner_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        let state = CopyButtonState::default();
        let strings = CopyStrings::default();
        assert_eq!(state.status(), CopyStatus::Idle);
        assert_eq!(state.label(&strings), "Copy");
        assert_eq!(state.announcement(&strings), "");
        assert_eq!(state.class(), "copy-code-button");
    }

    #[test]
    fn test_click_then_revert() {
        let strings = CopyStrings::default();
        let mut state = CopyButtonState::default();

        state.click();
        assert!(state.is_copied());
        assert_eq!(state.label(&strings), "Copied");
        assert_eq!(state.announcement(&strings), "Copied");
        assert_eq!(state.class(), "copy-code-button copied");

        state.revert();
        assert_eq!(state.status(), CopyStatus::Idle);
        assert_eq!(state.pending_reverts(), 0);
        assert_eq!(state.label(&strings), "Copy");
        assert_eq!(state.announcement(&strings), "");
    }

    #[test]
    fn test_double_click_waits_for_last_revert() {
        let mut state = CopyButtonState::default();
        state.click();
        state.click();
        assert_eq!(state.pending_reverts(), 2);

        state.revert();
        assert!(state.is_copied(), "first revert must not clear a later click");

        state.revert();
        assert_eq!(state.status(), CopyStatus::Idle);
    }

    #[test]
    fn test_failure_shows_until_revert() {
        let strings = CopyStrings::default();
        let mut state = CopyButtonState::default();
        let seq = state.click();
        state.fail(seq);

        assert_eq!(state.label(&strings), "Copy failed");
        assert_eq!(state.announcement(&strings), "Copy failed");
        assert_eq!(state.class(), "copy-code-button copy-failed");

        state.revert();
        assert_eq!(state.status(), CopyStatus::Idle);
    }

    #[test]
    fn test_late_failure_after_revert_is_ignored() {
        let mut state = CopyButtonState::default();
        let seq = state.click();
        state.revert();
        state.fail(seq);
        assert_eq!(state.status(), CopyStatus::Idle);
    }

    #[test]
    fn test_stale_failure_does_not_mask_later_copy() {
        let strings = CopyStrings::default();
        let mut state = CopyButtonState::default();
        let first = state.click();
        let second = state.click();
        assert!(second > first);

        state.fail(first);
        assert_eq!(state.label(&strings), "Copied");
        assert_eq!(state.announcement(&strings), "Copied");

        state.fail(second);
        assert_eq!(state.status(), CopyStatus::Failed);
    }

    #[test]
    fn test_stray_revert_stays_idle() {
        let mut state = CopyButtonState::default();
        state.revert();
        assert_eq!(state, CopyButtonState::default());
    }

    #[test]
    fn test_capture_prefers_inner_text() {
        assert_eq!(
            capture_code_text("let x = 1;".to_string(), Some("ignored".to_string())),
            "let x = 1;"
        );
    }

    #[test]
    fn test_capture_falls_back_to_text_content() {
        assert_eq!(capture_code_text(String::new(), Some("fn main() {}".to_string())), "fn main() {}");
        assert_eq!(capture_code_text(String::new(), None), "");
    }
}
