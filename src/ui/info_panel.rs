//! Info panel showing the selected planet's catalog entry.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::{dismiss_panel, PanelState};

/// System that renders the info panel while it is open.
pub fn info_panel(mut contexts: EguiContexts, mut panel: ResMut<PanelState>) {
    if !panel.open {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let panel_frame = egui::Frame::new()
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
        .inner_margin(egui::Margin::same(12));

    egui::SidePanel::right("info_panel")
        .resizable(false)
        .default_width(240.0)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&panel.title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{2715}").on_hover_text("Close").clicked() {
                        dismiss_panel(&mut panel);
                    }
                });
            });

            ui.separator();
            ui.label(&panel.info);
        });
}
