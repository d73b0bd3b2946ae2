//! keysnap — hotkey-driven desktop screenshot tool.
//!
//! Global hotkeys trigger full-display or area captures, saved as uniquely
//! named PNGs to a configurable directory, optionally after a preview/name
//! prompt. No business logic lives here — only module declarations.
//!
//! Domains:
//!   - capture/   — screen capture (xcap glue) and pure cropping
//!   - geom       — rectangles and the canvas-to-screen transform
//!   - naming     — deterministic, collision-free destination filenames
//!   - overlay    — drag-selection state machine + result handoff
//!   - app        — the hotkey event loop orchestrating one flow at a time
//!   - config / storage / hotkeys / ui — persistence and OS collaborators

pub mod app;
pub mod capture;
pub mod config;
pub mod geom;
pub mod hotkeys;
pub mod naming;
pub mod overlay;
pub mod storage;
pub mod ui;
