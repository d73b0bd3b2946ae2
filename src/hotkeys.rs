//! Global hotkey registration.
//!
//! Thin wrapper over the `global-hotkey` crate: registers the default
//! bindings and maps incoming event ids back to actions. Registrations live
//! as long as the manager, so [`Hotkeys`] must be kept alive for the whole
//! event loop.

use std::collections::HashMap;

use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use global_hotkey::GlobalHotKeyManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Capture the full primary display. Ctrl+Shift+1.
    CaptureFull,
    /// Capture a user-selected area. Ctrl+Shift+2.
    CaptureArea,
    /// Open the settings dialog. Ctrl+Shift+S.
    OpenSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum HotkeyError {
    #[error("failed to register global hotkeys: {0}")]
    Register(#[from] global_hotkey::Error),
}

pub struct Hotkeys {
    // Dropping the manager unregisters everything.
    _manager: GlobalHotKeyManager,
    bindings: HashMap<u32, HotkeyAction>,
}

impl Hotkeys {
    /// Registers the default bindings with the OS.
    pub fn register_defaults() -> Result<Self, HotkeyError> {
        let manager = GlobalHotKeyManager::new()?;
        let modifiers = Modifiers::CONTROL | Modifiers::SHIFT;

        let defaults = [
            (Code::Digit1, HotkeyAction::CaptureFull),
            (Code::Digit2, HotkeyAction::CaptureArea),
            (Code::KeyS, HotkeyAction::OpenSettings),
        ];

        let mut bindings = HashMap::new();
        for (code, action) in defaults {
            let hotkey = HotKey::new(Some(modifiers), code);
            manager.register(hotkey)?;
            bindings.insert(hotkey.id(), action);
            log::info!("[HOTKEY] Registered {:?} for {:?}", hotkey, action);
        }

        Ok(Self {
            _manager: manager,
            bindings,
        })
    }

    /// Maps a hotkey event id back to its action.
    pub fn action(&self, id: u32) -> Option<HotkeyAction> {
        self.bindings.get(&id).copied()
    }
}
