//! App module - contains the main application state and logic

mod modals;
mod views;

use crate::order::Order;
use crate::settings::Settings;
use crate::theme;
use crate::types::MenuItem;
use eframe::egui;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) menu: Vec<MenuItem>,
    pub(crate) order: Order,
    // Ephemeral per-row UI state, never persisted
    pub(crate) expanded: HashSet<usize>,
    pub(crate) show_order_sent: bool,
    // Window geometry tracking for saving on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, menu: Vec<MenuItem>, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            menu,
            order: Order::new(),
            expanded: HashSet::new(),
            show_order_sent: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }

    /// Clear the order and raise the confirmation dialog. The order returns
    /// to the accumulating phase as soon as the dialog is dismissed; there is
    /// no in-flight or error state.
    pub(crate) fn send_order(&mut self) {
        let lines = self.order.clear();
        info!(lines, "Order sent");
        self.show_order_sent = true;
    }
}
