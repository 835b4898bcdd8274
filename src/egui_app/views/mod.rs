use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

pub mod debug_view;
pub mod home_view;
pub mod signup_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, frame: &mut eframe::Frame) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            let _frame = frame;

            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("♻ ChemCycle").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    if ui.small_button("🐛").clicked() {
                        state.debug_view_open = !state.debug_view_open;
                    }

                    if state.auth_state.authenticated {
                        ui.add_space(8.0);
                        if ui.button("Изход").clicked() {
                            state.logout();
                        }
                        if let Some(ref user) = state.auth_state.user {
                            ui.colored_label(colors::TEXT_LIGHT, user.email.as_str());
                        }
                    }
                });
            });
        });
}

pub fn render_footer(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::bottom("footer_panel")
        .frame(styles::footer_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("© ChemCycle").size(12.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.hyperlink_to(
                        egui::RichText::new("Политика за поверителност").size(12.0),
                        state.config.web_route("/privacy"),
                    );
                    ui.add_space(12.0);
                    ui.hyperlink_to(
                        egui::RichText::new("Общи условия").size(12.0),
                        state.config.web_route("/terms"),
                    );
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    if state.debug_view_open {
        egui::TopBottomPanel::bottom("debug_panel").show(ctx, |ui| {
            debug_view::render_debug_panel(ui, state);
        });
    }

    let frame = egui::Frame::default()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Signup => signup_view::render(ui, state),
            AppView::Home => home_view::render(ui, state),
        });
}
