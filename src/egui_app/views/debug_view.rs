use eframe::egui;

use crate::egui_app::debug::{DebugCategory, DebugLevel};
use crate::egui_app::state::AppState;

pub fn render_debug_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Debug Console").strong());

            if ui
                .button(if state.debug_view_expanded {
                    "⬇ Collapse"
                } else {
                    "⬆ Expand"
                })
                .clicked()
            {
                state.debug_view_expanded = !state.debug_view_expanded;
            }

            ui.label(format!("Entries: {}", state.debug_logger.count()));

            if ui.button("Clear").clicked() {
                state.debug_logger.clear();
            }

            ui.separator();

            ui.label("Filter:");
            let categories = [
                ("All", None),
                ("Network", Some(DebugCategory::Network)),
                ("Auth", Some(DebugCategory::Auth)),
                ("Storage", Some(DebugCategory::Storage)),
                ("Validation", Some(DebugCategory::Validation)),
                ("UI", Some(DebugCategory::UI)),
            ];

            for (label, category) in categories {
                if ui
                    .selectable_label(state.debug_filter_category == category, label)
                    .clicked()
                {
                    state.debug_filter_category = category;
                }
            }

            ui.separator();

            ui.label("Level:");
            let levels = [
                ("All", None),
                ("Debug", Some(DebugLevel::Debug)),
                ("Info", Some(DebugLevel::Info)),
                ("Warn", Some(DebugLevel::Warn)),
                ("Error", Some(DebugLevel::Error)),
            ];

            for (label, level) in levels {
                if ui
                    .selectable_label(state.debug_filter_level == level, label)
                    .clicked()
                {
                    state.debug_filter_level = level;
                }
            }
        });

        ui.separator();

        let entries = match (&state.debug_filter_category, &state.debug_filter_level) {
            (Some(category), Some(level)) => state
                .debug_logger
                .get_entries_by_category(category.clone())
                .into_iter()
                .filter(|entry| &entry.level == level)
                .collect(),
            (Some(category), None) => state.debug_logger.get_entries_by_category(category.clone()),
            (None, Some(level)) => state.debug_logger.get_entries_by_level(level.clone()),
            (None, None) => state.debug_logger.get_entries(),
        };

        let show_height = if state.debug_view_expanded { 300.0 } else { 120.0 };

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .max_height(show_height)
            .show(ui, |ui| {
                for entry in entries.iter().rev() {
                    let color = match entry.level {
                        DebugLevel::Error => egui::Color32::RED,
                        DebugLevel::Warn => egui::Color32::from_rgb(0xB4, 0x69, 0x00),
                        DebugLevel::Info => egui::Color32::DARK_GREEN,
                        DebugLevel::Debug => egui::Color32::GRAY,
                    };
                    ui.colored_label(color, entry.to_string());
                }
            });
    });
}
