//! Font configuration
//!
//! egui's built-in fonts have no Devanagari or Telugu glyphs, so system
//! Noto fonts are appended as fallbacks when installed.

use egui::{FontData, FontDefinitions, FontFamily};
use tracing::{debug, info};

#[cfg(target_os = "macos")]
const FONT_FALLBACKS: &[(&str, &str)] = &[
    ("devanagari", "/System/Library/Fonts/Supplemental/Devanagari Sangam MN.ttc"),
    ("telugu", "/System/Library/Fonts/Supplemental/Telugu Sangam MN.ttc"),
    ("arial_unicode", "/System/Library/Fonts/Supplemental/Arial Unicode.ttf"),
];

#[cfg(target_os = "windows")]
const FONT_FALLBACKS: &[(&str, &str)] = &[
    ("devanagari", "C:\\Windows\\Fonts\\Nirmala.ttf"),
    ("symbols", "C:\\Windows\\Fonts\\seguisym.ttf"),
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const FONT_FALLBACKS: &[(&str, &str)] = &[
    (
        "devanagari",
        "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    ),
    (
        "devanagari_alt",
        "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    ),
    ("telugu", "/usr/share/fonts/truetype/noto/NotoSansTelugu-Regular.ttf"),
    ("telugu_alt", "/usr/share/fonts/noto/NotoSansTelugu-Regular.ttf"),
    ("lohit_telugu", "/usr/share/fonts/truetype/fonts-telu-extra/Pothana2000.ttf"),
    ("dejavu", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
];

/// Install default fonts plus whatever script fallbacks exist on this machine
pub(crate) fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    for (name, path) in FONT_FALLBACKS {
        match std::fs::read(path) {
            Ok(font_data) => {
                fonts
                    .font_data
                    .insert((*name).to_owned(), FontData::from_owned(font_data).into());

                for family in [FontFamily::Proportional, FontFamily::Monospace] {
                    if let Some(list) = fonts.families.get_mut(&family) {
                        list.push((*name).to_owned());
                    }
                }
                info!("Loaded fallback font '{}' from {}", name, path);
            }
            Err(_) => debug!("Fallback font '{}' not found at {}", name, path),
        }
    }

    ctx.set_fonts(fonts);
}
