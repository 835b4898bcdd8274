use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Post-signup home screen, the desktop stand-in for the web app's "/".
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter()
        .rect_filled(available_rect, 0.0, colors::BG_LIGHT);

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new("♻ ChemCycle").size(42.0).strong(),
        );
        ui.add_space(10.0);

        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new("Добре дошли!").size(24.0),
        );
        if let Some(ref user) = state.auth_state.user {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                egui::RichText::new(user.email.as_str()).size(16.0),
            );
        }
        ui.add_space(8.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            "Акаунтът ви беше създаден успешно.",
        );
        ui.add_space(30.0);

        let open_button = egui::Button::new(
            egui::RichText::new("Към ChemCycle")
                .size(16.0)
                .color(colors::TEXT_LIGHT),
        )
        .fill(colors::PRIMARY);
        if ui.add_sized([220.0, 36.0], open_button).clicked() {
            let url = state.config.web_route("/");
            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
        }

        ui.add_space(10.0);
        if ui.add_sized([220.0, 30.0], egui::Button::new("Изход")).clicked() {
            state.logout();
        }
    });
}
