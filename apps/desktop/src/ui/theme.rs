//! Static styling for the navigation bar and the placeholder pages.

use eframe::egui::Color32;
use shell_core::PageId;

/// Slate-blue navigation bar with a darker fill on the active button.
pub const NAV_BAR_FILL: Color32 = Color32::from_rgb(0x6A, 0x5A, 0xCD);
pub const NAV_BUTTON_ACTIVE_FILL: Color32 = Color32::from_rgb(0x48, 0x3D, 0x8B);

pub const NAV_TEXT: Color32 = Color32::WHITE;

pub fn nav_button_fill(active: bool) -> Color32 {
    if active {
        NAV_BUTTON_ACTIVE_FILL
    } else {
        NAV_BAR_FILL
    }
}

pub fn page_fill(page: PageId) -> Color32 {
    let [r, g, b] = page.fill_rgb();
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_button_is_the_darker_fill() {
        assert_eq!(nav_button_fill(true), NAV_BUTTON_ACTIVE_FILL);
        assert_eq!(nav_button_fill(false), NAV_BAR_FILL);
        assert_ne!(NAV_BAR_FILL, NAV_BUTTON_ACTIVE_FILL);
    }

    #[test]
    fn page_fills_match_the_page_model() {
        assert_eq!(page_fill(PageId::Home), Color32::from_rgb(255, 255, 255));
        assert_eq!(page_fill(PageId::Explore), Color32::from_rgb(255, 0, 0));
        assert_eq!(page_fill(PageId::Thoughts), Color32::from_rgb(0, 0, 255));
        assert_eq!(page_fill(PageId::Notes), Color32::from_rgb(0, 128, 0));
        assert_eq!(page_fill(PageId::Tools), Color32::from_rgb(255, 255, 255));
        assert_eq!(page_fill(PageId::Other), Color32::from_rgb(128, 128, 128));
    }
}
