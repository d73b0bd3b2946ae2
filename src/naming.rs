//! Destination filename generation — pure string logic.
//!
//! Nothing here touches the filesystem. Collision probing goes through an
//! injected `exists` predicate so the whole scheme is testable without I/O,
//! and the predicate is authoritative: every candidate is checked, including
//! the suffix-free one.
//!
//! Two collision-suffix conventions exist on purpose and mirror each base
//! name's own separator: timestamp-only names append `_NNN`, user-named
//! captures append ` - NNN`. Unifying them would change on-disk output.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Timelike};

/// Fallback base when a caller passes an empty/whitespace base name.
const FALLBACK_BASE: &str = "screenshot";

/// Renders `t` as a deterministic local-time PNG filename:
/// `YYYYMMDD_HHMMSS_mmm.png`.
pub fn filename_for_timestamp(t: DateTime<Local>) -> String {
    format!(
        "{}_{:03}.png",
        t.format("%Y%m%d_%H%M%S"),
        t.nanosecond() / 1_000_000
    )
}

/// Returns a string safe to use as a filename component on the most
/// restrictive common target filesystem (Windows naming rules).
///
/// Trims whitespace, drops ASCII control characters, replaces the reserved
/// characters `< > : " / \ | ? *` with `_`, strips trailing dots/spaces, and
/// prefixes `_` for reserved base names such as CON, PRN, AUX, NUL,
/// COM1..COM9, LPT1..LPT9.
///
/// Idempotent; an empty result means "no usable name supplied".
pub fn sanitize_filename_component(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut replaced = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        if (c as u32) < 32 {
            continue;
        }
        match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => replaced.push('_'),
            _ => replaced.push(c),
        }
    }

    let out = replaced.trim().trim_end_matches(['.', ' ']);
    if out.is_empty() {
        return String::new();
    }
    if is_reserved_base_name(&out.to_uppercase()) {
        return format!("_{out}");
    }
    out.to_string()
}

fn is_reserved_base_name(upper: &str) -> bool {
    matches!(upper, "CON" | "PRN" | "AUX" | "NUL")
        || (upper.len() == 4
            && (upper.starts_with("COM") || upper.starts_with("LPT"))
            && upper.ends_with(|c: char| c.is_ascii_digit() && c != '0'))
}

/// Returns a deterministic base filename (no extension) for `t` and an
/// optional user-supplied name: `YYYYMMDD_HHMMSS_mmm` or
/// `YYYYMMDD_HHMMSS_mmm - <sanitized name>`.
pub fn base_name_for(t: DateTime<Local>, raw_name: &str) -> String {
    let filename = filename_for_timestamp(t);
    let ts = filename.trim_end_matches(".png");
    let name = sanitize_filename_component(raw_name);
    if name.is_empty() {
        ts.to_string()
    } else {
        format!("{ts} - {name}")
    }
}

/// Returns a destination path inside `dir` for a timestamp-only capture.
/// Collisions append an underscore counter: `..._001.png`, `..._002.png`, ...
pub fn unique_timestamp_path(
    dir: &Path,
    t: DateTime<Local>,
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    let filename = filename_for_timestamp(t);
    let base = filename.trim_end_matches(".png").to_string();

    let candidate = dir.join(&filename);
    if !exists(&candidate) {
        return candidate;
    }
    for i in 1.. {
        let candidate = dir.join(format!("{base}_{i:03}.png"));
        if !exists(&candidate) {
            return candidate;
        }
    }
    unreachable!("unbounded counter always finds a free candidate")
}

/// Returns a destination path inside `dir` for the provided base name (no
/// extension). Collisions append a dash counter: `... - 001.png`, ...
pub fn unique_named_path(dir: &Path, base: &str, exists: impl Fn(&Path) -> bool) -> PathBuf {
    let base = base.trim();
    let base = if base.is_empty() { FALLBACK_BASE } else { base };

    let candidate = dir.join(format!("{base}.png"));
    if !exists(&candidate) {
        return candidate;
    }
    for i in 1.. {
        let candidate = dir.join(format!("{base} - {i:03}.png"));
        if !exists(&candidate) {
            return candidate;
        }
    }
    unreachable!("unbounded counter always finds a free candidate")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
            .with_nanosecond(ms * 1_000_000)
            .unwrap()
    }

    #[test]
    fn filename_format() {
        let t = local(2025, 1, 2, 3, 4, 5, 678);
        assert_eq!(filename_for_timestamp(t), "20250102_030405_678.png");
    }

    #[test]
    fn filename_pads_milliseconds() {
        let t = local(2025, 1, 2, 3, 4, 5, 7);
        assert_eq!(filename_for_timestamp(t), "20250102_030405_007.png");
    }

    #[test]
    fn sanitize_passthrough() {
        assert_eq!(sanitize_filename_component("meeting notes"), "meeting notes");
    }

    #[test]
    fn sanitize_replaces_reserved_chars() {
        assert_eq!(sanitize_filename_component("a<b>c"), "a_b_c");
        assert_eq!(sanitize_filename_component(r"a/b\c:d"), "a_b_c_d");
    }

    #[test]
    fn sanitize_drops_control_chars() {
        assert_eq!(sanitize_filename_component("a\x00b\x1fc"), "abc");
    }

    #[test]
    fn sanitize_strips_trailing_dots_and_spaces() {
        assert_eq!(sanitize_filename_component("trailing.. "), "trailing");
        assert_eq!(sanitize_filename_component("a. . ."), "a");
        assert_eq!(sanitize_filename_component("..."), "");
    }

    #[test]
    fn sanitize_empty_and_whitespace() {
        assert_eq!(sanitize_filename_component(""), "");
        assert_eq!(sanitize_filename_component("   \t  "), "");
    }

    #[test]
    fn sanitize_prefixes_reserved_names() {
        assert_eq!(sanitize_filename_component("CON"), "_CON");
        assert_eq!(sanitize_filename_component("con"), "_con");
        assert_eq!(sanitize_filename_component("COM7"), "_COM7");
        assert_eq!(sanitize_filename_component("lpt9"), "_lpt9");
        // Not reserved: COM0, COM10, CONSOLE.
        assert_eq!(sanitize_filename_component("COM0"), "COM0");
        assert_eq!(sanitize_filename_component("COM10"), "COM10");
        assert_eq!(sanitize_filename_component("CONSOLE"), "CONSOLE");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in ["", "CON", "a<b>c", "trailing.. ", "  x  ", "_CON", "名前?"] {
            let once = sanitize_filename_component(raw);
            assert_eq!(sanitize_filename_component(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn sanitize_keeps_non_ascii() {
        assert_eq!(sanitize_filename_component("スクショ"), "スクショ");
    }

    #[test]
    fn base_name_without_name_is_timestamp() {
        let t = local(2025, 1, 2, 3, 4, 5, 678);
        assert_eq!(base_name_for(t, ""), "20250102_030405_678");
        assert_eq!(base_name_for(t, "  ?? "), "20250102_030405_678 - __");
    }

    #[test]
    fn base_name_appends_sanitized_name() {
        let t = local(2025, 1, 2, 3, 4, 5, 678);
        assert_eq!(
            base_name_for(t, " standup board "),
            "20250102_030405_678 - standup board"
        );
    }

    #[test]
    fn unique_timestamp_path_no_collision() {
        let dir = Path::new("some/dir");
        let t = local(2025, 1, 2, 3, 4, 5, 0);
        let got = unique_timestamp_path(dir, t, |_| false);
        assert_eq!(got, dir.join("20250102_030405_000.png"));
    }

    #[test]
    fn unique_timestamp_path_skips_collisions() {
        let dir = Path::new("some/dir");
        let t = local(2025, 1, 2, 3, 4, 5, 111);

        let taken: HashSet<PathBuf> = [
            dir.join("20250102_030405_111.png"),
            dir.join("20250102_030405_111_001.png"),
        ]
        .into();

        let got = unique_timestamp_path(dir, t, |p| taken.contains(p));
        assert_eq!(got, dir.join("20250102_030405_111_002.png"));
        assert!(!taken.contains(&got));
    }

    #[test]
    fn unique_named_path_no_collision() {
        let dir = Path::new("shots");
        let got = unique_named_path(dir, "20250102_030405_678 - demo", |_| false);
        assert_eq!(got, dir.join("20250102_030405_678 - demo.png"));
    }

    #[test]
    fn unique_named_path_uses_dash_suffix() {
        let dir = Path::new("shots");
        let base = "20250102_030405_678 - demo";

        let taken: HashSet<PathBuf> = [
            dir.join("20250102_030405_678 - demo.png"),
            dir.join("20250102_030405_678 - demo - 001.png"),
            dir.join("20250102_030405_678 - demo - 002.png"),
        ]
        .into();

        let got = unique_named_path(dir, base, |p| taken.contains(p));
        assert_eq!(got, dir.join("20250102_030405_678 - demo - 003.png"));
    }

    #[test]
    fn unique_named_path_empty_base_falls_back() {
        let dir = Path::new("shots");
        let got = unique_named_path(dir, "   ", |_| false);
        assert_eq!(got, dir.join("screenshot.png"));
    }
}
