//! View rendering (menu list and order panel)

use super::App;
use crate::constants::DESCRIPTION_PLACEHOLDER;
use crate::theme;
use crate::ui::components::{
    expand_icon, format_line_label, format_price, icon_button, truncate_name,
};
use eframe::egui;
use tracing::info;

impl App {
    /// Right side panel: the current order, its total and the send button.
    pub(crate) fn render_order_panel(&mut self, ctx: &egui::Context) {
        // Clicked line, applied after the list is drawn
        let mut removed: Option<(String, i64)> = None;
        let mut send_clicked = false;

        egui::SidePanel::right("order_panel")
            .exact_width(theme::ORDER_PANEL_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(theme::SPACING_MD);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("YOUR ORDER")
                                .size(theme::FONT_HEADING)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                });
                ui.add_space(theme::SPACING_LG);

                // Reserve room for the total row and send button below the list
                let footer_height = theme::STROKE_THICK
                    + theme::SPACING_LG * 2.0
                    + theme::ORDER_ROW_HEIGHT
                    + 36.0
                    + theme::SPACING_MD;

                egui::ScrollArea::vertical()
                    .max_height(ui.available_height() - footer_height)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if self.order.is_empty() {
                            ui.add_space(theme::SPACING_XL);
                            ui.vertical_centered(|ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new("Nothing here yet")
                                            .size(theme::FONT_LABEL)
                                            .color(theme::TEXT_DIM),
                                    )
                                    .selectable(false),
                                );
                            });
                        }

                        for line in self.order.lines() {
                            let (rect, response) = ui.allocate_exact_size(
                                egui::vec2(ui.available_width(), theme::ORDER_ROW_HEIGHT),
                                egui::Sense::click(),
                            );
                            if ui.is_rect_visible(rect) {
                                if response.hovered() {
                                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                                    ui.painter().rect_filled(
                                        rect,
                                        theme::RADIUS_DEFAULT,
                                        theme::BG_SURFACE,
                                    );
                                }
                                let painter = ui.painter();
                                painter.text(
                                    rect.left_center() + egui::vec2(theme::SPACING_MD, 0.0),
                                    egui::Align2::LEFT_CENTER,
                                    format_line_label(line.quantity, &line.name),
                                    egui::FontId::proportional(theme::FONT_BODY),
                                    theme::TEXT_SECONDARY,
                                );
                                painter.text(
                                    rect.right_center() - egui::vec2(theme::SPACING_MD, 0.0),
                                    egui::Align2::RIGHT_CENTER,
                                    format_price(line.subtotal()),
                                    egui::FontId::proportional(theme::FONT_BODY),
                                    theme::TEXT_MUTED,
                                );
                            }
                            // Clicking a row removes one unit of that line
                            if response.clicked() {
                                removed = Some((line.name.clone(), line.price));
                            }
                            response.on_hover_text("Remove one");
                        }
                    });

                ui.add_space(theme::SPACING_LG);

                // Short rule above the total, inset from both edges
                let (line_rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), theme::STROKE_THICK),
                    egui::Sense::hover(),
                );
                ui.painter().line_segment(
                    [
                        egui::pos2(line_rect.left() + 48.0, line_rect.center().y),
                        egui::pos2(line_rect.right() - 48.0, line_rect.center().y),
                    ],
                    egui::Stroke::new(theme::STROKE_THICK, theme::BORDER_DEFAULT),
                );
                ui.add_space(theme::SPACING_LG);

                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Total:")
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format_price(self.order.total_cents()))
                                    .size(theme::FONT_HEADING)
                                    .strong()
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .selectable(false),
                        );
                    });
                });

                ui.add_space(theme::SPACING_MD);
                let send_btn = ui.add_enabled(
                    !self.order.is_empty(),
                    theme::button_accent(format!(
                        "{}  Send Order",
                        egui_phosphor::regular::PAPER_PLANE_TILT
                    ))
                    .min_size(egui::vec2(ui.available_width(), 36.0)),
                );
                if send_btn.clicked() {
                    send_clicked = true;
                }
            });

        if let Some((name, price)) = removed {
            self.order.remove_one(&name, price);
        }
        if send_clicked {
            self.send_order();
        }
    }

    /// Central panel: the scrollable menu with expandable rows.
    pub(crate) fn render_menu_panel(&mut self, ctx: &egui::Context) {
        let mut toggled: Option<usize> = None;
        let mut added: Option<(String, i64)> = None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("MENU")
                                .size(theme::FONT_HEADING)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("{} pizzas", self.menu.len()))
                                    .size(theme::FONT_SECTION)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                });
                ui.add_space(theme::SPACING_MD);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (idx, item) in self.menu.iter().enumerate() {
                            let expanded = self.expanded.contains(&idx);

                            theme::card_frame().show(ui, |ui| {
                                ui.set_min_height(theme::MENU_ROW_HEIGHT - 2.0 * theme::SPACING_LG);
                                ui.horizontal(|ui| {
                                    let caret = icon_button(
                                        ui,
                                        expand_icon(expanded),
                                        24.0,
                                        theme::BG_SURFACE,
                                    );
                                    if caret.clicked() {
                                        toggled = Some(idx);
                                    }

                                    ui.add_space(theme::SPACING_SM);
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new(truncate_name(&item.name))
                                                .size(theme::FONT_BODY)
                                                .color(theme::TEXT_SECONDARY),
                                        )
                                        .selectable(false),
                                    );

                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            let add = icon_button(
                                                ui,
                                                egui_phosphor::regular::PLUS,
                                                24.0,
                                                theme::BTN_ACCENT,
                                            );
                                            if add.clicked() {
                                                added = Some((item.name.clone(), item.price));
                                            }
                                            ui.add_space(theme::SPACING_SM);
                                            ui.add(
                                                egui::Label::new(
                                                    egui::RichText::new(format_price(item.price))
                                                        .size(theme::FONT_BODY)
                                                        .color(theme::TEXT_MUTED),
                                                )
                                                .selectable(false),
                                            );
                                        },
                                    );
                                });

                                if expanded {
                                    ui.add_space(theme::SPACING_SM);
                                    let text = item
                                        .description
                                        .as_deref()
                                        .unwrap_or(DESCRIPTION_PLACEHOLDER);
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new(text)
                                                .size(theme::FONT_LABEL)
                                                .color(theme::TEXT_DIM),
                                        )
                                        .wrap()
                                        .selectable(false),
                                    );
                                }
                            });
                            ui.add_space(theme::SPACING_SM);
                        }
                    });
            });

        if let Some(idx) = toggled {
            if !self.expanded.remove(&idx) {
                self.expanded.insert(idx);
            }
        }
        if let Some((name, price)) = added {
            info!(name = %name, price, "Pizza added from menu");
            self.order.add(&name, price);
        }
    }
}
