//! Modal dialogs (order confirmation)

use super::App;
use crate::theme;
use eframe::egui;

impl App {
    /// Confirmation shown after sending an order. One dialog per send;
    /// dismissing it returns straight to the accumulating phase.
    pub(crate) fn render_order_sent_modal(&mut self, ctx: &egui::Context) {
        if !self.show_order_sent {
            return;
        }

        // Built-in Modal with backdrop, escape-to-close, click-outside handling
        let modal = egui::Modal::new(egui::Id::new("order_sent_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.set_max_width(260.0);

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                        .size(36.0)
                        .color(theme::ACCENT),
                );
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Order sent!").size(16.0).strong());
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Thanks! Your pizzas are on their way.")
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(16.0);
                let ok_btn = ui.add(theme::button_accent(format!(
                    "{}  OK",
                    egui_phosphor::regular::CHECK
                )));
                if ok_btn.clicked() {
                    self.show_order_sent = false;
                }
            });
        });
        if modal_response.should_close() {
            self.show_order_sent = false;
        }
    }
}
