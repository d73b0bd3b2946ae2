//! Post-capture prompt and settings dialogs — collaborator seams.
//!
//! The dialog toolkit is external to this crate. Both entry points exist
//! unconditionally and report a distinct "unavailable" condition so the
//! orchestrator can log once and fall back (timestamp-only naming, no
//! settings changes) instead of failing the capture.
//!
//! A real implementation marshals all widget work onto the toolkit's UI
//! thread and reports back through `overlay::result_slot`, so Save-vs-close
//! races resolve to exactly one outcome.

use std::path::Path;

use crate::capture::Frame;
use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("post-capture prompt UI is unavailable in this build")]
    PromptUnavailable,

    #[error("settings UI is unavailable in this build")]
    SettingsUnavailable,
}

/// What the user chose in the post-capture dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Save, with an optional name to append to the filename. May be empty.
    Save { name: String },
    /// Discard the capture (Delete button or closing the window).
    Discard,
}

/// Shows a preview of the capture with a name field and Save/Delete buttons.
pub fn prompt_save(_frame: &Frame) -> Result<PromptOutcome, UiError> {
    Err(UiError::PromptUnavailable)
}

/// Opens the settings window pre-filled with the current values.
///
/// `Ok(Some(config))` when the user clicked Save; `Ok(None)` when the window
/// was closed without saving.
pub fn show_settings(
    _current_output_dir: &Path,
    _post_capture_prompt: bool,
) -> Result<Option<Config>, UiError> {
    Err(UiError::SettingsUnavailable)
}
