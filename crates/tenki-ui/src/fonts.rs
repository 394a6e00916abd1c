//! Japanese-capable font installation for egui.
//!
//! egui's bundled fonts have no CJK glyphs, so a system font is loaded and
//! put in front of both families.

use std::path::{Path, PathBuf};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const FONT_KEY: &str = "tenki-jp";

/// Well-known CJK fonts, first existing file wins
const CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/ipafont-gothic/ipagp.ttf",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    // macOS
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    // Windows
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\YuGothR.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// Pick the font file to load: `configured` if it exists, else the first
/// existing candidate.
pub fn find_font(configured: Option<&Path>, candidates: &[&str]) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Configured font {} not found", path.display());
    }

    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Install a Japanese font into `ctx`. Returns the file that was used.
pub fn install_japanese_fonts(ctx: &egui::Context, configured: Option<&Path>) -> Option<PathBuf> {
    let Some(path) = find_font(configured, CANDIDATES) else {
        tracing::warn!("No Japanese font found; set ui.font_path in config.toml");
        return None;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to read font {}: {}", path.display(), e);
            return None;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_KEY.to_string(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, FONT_KEY.to_string());
    }
    ctx.set_fonts(fonts);

    tracing::info!("Loaded Japanese font {}", path.display());
    Some(path)
}
