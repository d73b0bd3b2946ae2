//! Capture orchestration — sequences hotkey events through capture,
//! selection, naming, and saving.
//!
//! One single-threaded event loop: whichever hotkey fires is handled to
//! completion before the next event is observed. A failed capture is logged
//! and the loop continues; nothing here ever terminates the process. Every
//! optional enhancement (area selection, prompt, settings) has a guaranteed
//! fallback so a capture is never lost to a missing UI feature.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use anyhow::Context;
use chrono::{DateTime, Local};
use global_hotkey::{GlobalHotKeyEvent, HotKeyState};

use crate::capture::{self, CropError, Frame};
use crate::config::{self, Config};
use crate::hotkeys::{HotkeyAction, Hotkeys};
use crate::naming;
use crate::overlay::{self, SelectError, SelectionOutcome};
use crate::storage;
use crate::ui::{self, PromptOutcome, UiError};

/// Environment variable consulted for the output directory when no flag is
/// given.
pub const OUTPUT_DIR_ENV: &str = "KEYSNAP_OUT";

/// How one capture flow ended. Cancellation is a normal outcome, distinct
/// from failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Saved(PathBuf),
    Cancelled,
}

/// Resolves the output directory: flag > environment > config > default.
pub fn resolve_output_dir(
    flag: Option<&Path>,
    lookup_env: impl Fn(&str) -> Option<String>,
    config_value: &str,
) -> PathBuf {
    if let Some(dir) = flag {
        if !dir.as_os_str().is_empty() {
            return dir.to_path_buf();
        }
    }
    if let Some(dir) = lookup_env(OUTPUT_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    let config_value = config_value.trim();
    if !config_value.is_empty() {
        return PathBuf::from(config_value);
    }
    storage::default_output_dir()
}

/// A configured output directory; empty falls back to the built-in default.
fn effective_output_dir(raw: &str) -> PathBuf {
    let raw = raw.trim();
    if raw.is_empty() {
        storage::default_output_dir()
    } else {
        PathBuf::from(raw)
    }
}

/// Captures the full primary display and saves it.
pub fn handle_full(
    out_dir: &Path,
    prompt_enabled: bool,
    now: impl Fn() -> DateTime<Local>,
) -> anyhow::Result<CaptureOutcome> {
    let frame = capture::capture_display(0).context("fullscreen capture")?;
    save_capture(&frame, out_dir, prompt_enabled, now())
}

/// Runs the area-selection flow, then captures and crops.
///
/// When the selection overlay is unavailable in this build, logs once and
/// degrades to a full-display capture rather than failing the hotkey press.
pub fn handle_area(
    out_dir: &Path,
    prompt_enabled: bool,
    now: impl Fn() -> DateTime<Local>,
) -> anyhow::Result<CaptureOutcome> {
    let selection = match overlay::select_area() {
        Ok(SelectionOutcome::Region(rect)) => rect,
        Ok(SelectionOutcome::Cancelled) => return Ok(CaptureOutcome::Cancelled),
        Err(SelectError::Unavailable) => {
            static LOGGED: Once = Once::new();
            LOGGED.call_once(|| {
                log::warn!("[CAPTURE] Area selection unavailable — falling back to full capture");
            });
            return handle_full(out_dir, prompt_enabled, now);
        }
        Err(e) => return Err(e).context("area selection"),
    };

    let frame = capture::capture_display(0).context("area capture")?;
    let display = capture::display_bounds(0).context("display bounds")?;

    let crop_rect = capture::map_capture_rect_to_image_space(frame.bounds, display, selection);
    let cropped = match capture::crop(Some(&frame), crop_rect) {
        Ok(frame) => frame,
        Err(CropError::EmptyCrop) => {
            // Selection fell outside the captured raster; nothing to save.
            log::info!("[CAPTURE] Selection maps to an empty crop — nothing to do");
            return Ok(CaptureOutcome::Cancelled);
        }
        Err(e) => return Err(e).context("crop selection"),
    };

    save_capture(&cropped, out_dir, prompt_enabled, now())
}

/// Shared tail of both capture flows: optional prompt, naming, PNG write.
///
/// A prompt failure never loses the capture — it is logged and the frame is
/// saved under the timestamp-only scheme.
fn save_capture(
    frame: &Frame,
    out_dir: &Path,
    prompt_enabled: bool,
    t: DateTime<Local>,
) -> anyhow::Result<CaptureOutcome> {
    let mut name = String::new();
    if prompt_enabled {
        match ui::prompt_save(frame) {
            Ok(PromptOutcome::Discard) => return Ok(CaptureOutcome::Cancelled),
            Ok(PromptOutcome::Save { name: entered }) => name = entered,
            Err(e @ UiError::PromptUnavailable) => {
                static LOGGED: Once = Once::new();
                LOGGED.call_once(|| {
                    log::warn!("[CAPTURE] Post-capture prompt failed (saving anyway): {e}");
                });
            }
            Err(e) => log::warn!("[CAPTURE] Post-capture prompt failed (saving anyway): {e}"),
        }
    }

    let dest = if naming::sanitize_filename_component(&name).is_empty() {
        naming::unique_timestamp_path(out_dir, t, storage::path_exists)
    } else {
        let base = naming::base_name_for(t, &name);
        naming::unique_named_path(out_dir, &base, storage::path_exists)
    };

    storage::save_png(&frame.pixels, &dest)
        .with_context(|| format!("save PNG to {}", dest.display()))?;
    Ok(CaptureOutcome::Saved(dest))
}

/// Registers the hotkeys and runs the event loop until the hotkey event
/// channel closes.
pub fn run(initial_out_dir: PathBuf, config_path: Option<PathBuf>, config: Config) -> anyhow::Result<()> {
    let hotkeys = Hotkeys::register_defaults()?;

    // Shared with the settings flow; captures read it once per flow and see
    // either the old or the new directory, never a partial update.
    let out_dir = Mutex::new(initial_out_dir);
    let mut config = config;

    log::info!("[STARTUP] Listening for hotkeys — Ctrl+Shift+1 full, Ctrl+Shift+2 area, Ctrl+Shift+S settings");

    let receiver = GlobalHotKeyEvent::receiver();
    while let Ok(event) = receiver.recv() {
        if event.state() != HotKeyState::Pressed {
            continue;
        }
        let Some(action) = hotkeys.action(event.id()) else {
            continue;
        };

        match action {
            HotkeyAction::CaptureFull | HotkeyAction::CaptureArea => {
                let dir = out_dir
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .clone();
                let result = match action {
                    HotkeyAction::CaptureFull => {
                        handle_full(&dir, config.post_capture_prompt, Local::now)
                    }
                    _ => handle_area(&dir, config.post_capture_prompt, Local::now),
                };
                match result {
                    Ok(CaptureOutcome::Saved(path)) => {
                        log::info!("[CAPTURE] Saved {}", path.display());
                        println!("{}", path.display());
                    }
                    Ok(CaptureOutcome::Cancelled) => {
                        log::info!("[CAPTURE] Cancelled by user");
                    }
                    Err(e) => log::error!("[CAPTURE] Capture failed: {e:#}"),
                }
            }
            HotkeyAction::OpenSettings => {
                apply_settings_flow(&out_dir, &mut config, config_path.as_deref());
            }
        }
    }

    Ok(())
}

/// Opens the settings dialog and applies/persists a saved result.
fn apply_settings_flow(out_dir: &Mutex<PathBuf>, config: &mut Config, config_path: Option<&Path>) {
    let current = out_dir
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone();

    let saved = match ui::show_settings(&current, config.post_capture_prompt) {
        Ok(Some(new_config)) => new_config,
        Ok(None) => return,
        Err(e @ UiError::SettingsUnavailable) => {
            static LOGGED: Once = Once::new();
            LOGGED.call_once(|| log::warn!("[SETTINGS] {e}"));
            return;
        }
        Err(e) => {
            log::error!("[SETTINGS] Settings dialog failed: {e}");
            return;
        }
    };

    let effective = effective_output_dir(&saved.output_dir);
    if let Err(e) = storage::ensure_dir(&effective) {
        log::error!(
            "[SETTINGS] Failed to create output dir {}: {e}",
            effective.display()
        );
        return;
    }

    *out_dir
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = effective;
    *config = saved;

    // Takes effect for the next capture; persistence is best-effort.
    if let Some(path) = config_path {
        if let Err(e) = config::save(path, config) {
            log::error!("[SETTINGS] Failed to save config {}: {e}", path.display());
        } else {
            log::info!("[SETTINGS] Saved config to {}", path.display());
        }
    }
}
