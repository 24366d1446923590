//! Deterministic accent colors for lists created without one.
//!
//! Maps a list id to an entry of a Material-style accent palette, so the same
//! list always renders with the same header color.

/// Accent palette (6-char hex without `#`).
const PALETTE: &[&str] = &[
    "2196F3", // blue
    "FF9800", // orange
    "4CAF50", // green
    "F44336", // red
    "9C27B0", // purple
    "00BCD4", // cyan
    "FFC107", // amber
    "3F51B5", // indigo
    "E91E63", // pink
    "009688", // teal
    "8BC34A", // light green
    "795548", // brown
];

/// Return a deterministic accent color for a list id.
pub fn auto_color(list_id: &str) -> &'static str {
    let idx = (fnv1a(list_id) as usize) % PALETTE.len();
    PALETTE[idx]
}

/// FNV-1a hash (32-bit) for short strings.
fn fnv1a(s: &str) -> u32 {
    s.bytes().fold(0x811c_9dc5_u32, |hash, byte| {
        (hash ^ byte as u32).wrapping_mul(0x0100_0193)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_color_deterministic() {
        assert_eq!(auto_color("backlog"), auto_color("backlog"));
    }

    #[test]
    fn test_auto_color_valid_hex() {
        for id in &["todo", "inProgress", "done", "backlog", "review"] {
            let color = auto_color(id);
            assert_eq!(color.len(), 6);
            assert!(color.chars().all(|c| c.is_ascii_hexdigit()));
            assert!(PALETTE.contains(&color));
        }
    }

    #[test]
    fn test_palette_spread() {
        let seen: std::collections::HashSet<_> =
            (0..60).map(|i| auto_color(&format!("list-{i}"))).collect();
        assert!(seen.len() >= 6, "Only hit {} palette entries", seen.len());
    }
}
