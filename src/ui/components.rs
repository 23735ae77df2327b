//! Reusable UI components
//!
//! This module contains standalone UI components and formatting helpers
//! that can be used throughout the application.

use crate::constants::{NAME_DISPLAY_MAX, NAME_TRUNCATE_TO};
use crate::theme;
use eframe::egui;

/// Format integer cents for display, e.g. 2550 -> "€ 25.50".
/// The stored value stays integer cents; this is presentation only.
pub fn format_price(cents: i64) -> String {
    format!("€ {:.2}", cents as f64 / 100.0)
}

/// Quantity prefix for an order row, e.g. "2x Margherita"
pub fn format_line_label(quantity: u32, name: &str) -> String {
    format!("{}x {}", quantity, name)
}

/// Cut long pizza names down for the menu row
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_DISPLAY_MAX {
        name.to_owned()
    } else {
        let mut cut: String = name.chars().take(NAME_TRUNCATE_TO).collect();
        cut.push_str("...");
        cut
    }
}

/// Caret icon for the expand/collapse toggle on a menu row
pub fn expand_icon(expanded: bool) -> &'static str {
    if expanded {
        egui_phosphor::regular::CARET_DOWN
    } else {
        egui_phosphor::regular::CARET_RIGHT
    }
}

/// Custom square icon button with hover/press feedback. Returns the response.
pub fn icon_button(ui: &mut egui::Ui, icon: &str, size: f32, fill: egui::Color32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.6),
            egui::Color32::WHITE,
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_with_two_decimals() {
        assert_eq!(format_price(800), "€ 8.00");
        assert_eq!(format_price(2550), "€ 25.50");
        assert_eq!(format_price(0), "€ 0.00");
        assert_eq!(format_price(5), "€ 0.05");
    }

    #[test]
    fn short_names_pass_through() {
        assert_eq!(truncate_name("Margherita"), "Margherita");
        // Exactly at the limit
        assert_eq!(truncate_name("1234567890123456789012345"), "1234567890123456789012345");
    }

    #[test]
    fn long_names_are_cut_with_ellipsis() {
        assert_eq!(
            truncate_name("Calzone Classico Ripieno al Forno"),
            "Calzone Classico Ripie..."
        );
    }

    #[test]
    fn line_labels_show_quantity() {
        assert_eq!(format_line_label(2, "Margherita"), "2x Margherita");
    }
}
