use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::validation::MSG_PASSWORDS_MISMATCH;

/// Render the registration form.
///
/// Mirrors the ChemCycle web signup page: name fields, email, password
/// with a live requirements checklist, confirmation, terms checkbox,
/// submit, and the federated Google button.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter()
        .rect_filled(available_rect, 0.0, colors::BG_LIGHT);

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);

            ui.colored_label(
                colors::TEXT_PRIMARY,
                egui::RichText::new("Присъединете се към ChemCycle")
                    .size(26.0)
                    .strong(),
            );
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Създайте своя акаунт и започнете да правите разлика",
            );
            ui.add_space(16.0);

            ui.vertical_centered(|ui| {
                ui.set_max_width(420.0);
                styles::card_frame().show(ui, |ui| {
                    render_form(ui, state);
                });
            });

            ui.add_space(24.0);
        });
    });
}

fn render_form(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new("Регистрация").size(20.0).strong(),
        );
        ui.colored_label(
            colors::TEXT_SECONDARY,
            egui::RichText::new("Създайте безплатен акаунт, за да започнете").size(13.0),
        );
    });
    ui.add_space(12.0);

    if let Some(error) = state.auth_state.error.clone() {
        styles::error_banner_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(colors::ERROR, error);
        });
        ui.add_space(10.0);
    }

    let mut edited = false;

    // Name fields side by side
    ui.columns(2, |columns| {
        columns[0].colored_label(colors::TEXT_SECONDARY, "Име");
        edited |= columns[0]
            .add(egui::TextEdit::singleline(&mut state.form.first_name).hint_text("Иван"))
            .changed();

        columns[1].colored_label(colors::TEXT_SECONDARY, "Фамилия");
        edited |= columns[1]
            .add(egui::TextEdit::singleline(&mut state.form.last_name).hint_text("Димитров"))
            .changed();
    });
    ui.add_space(8.0);

    ui.colored_label(colors::TEXT_SECONDARY, "Имейл адрес");
    edited |= ui
        .add_sized(
            [ui.available_width(), 24.0],
            egui::TextEdit::singleline(&mut state.form.email)
                .hint_text("ivan.dimitrov@example.com"),
        )
        .changed();
    ui.add_space(8.0);

    ui.colored_label(colors::TEXT_SECONDARY, "Парола");
    ui.horizontal(|ui| {
        let toggle_width = 28.0;
        edited |= ui
            .add_sized(
                [ui.available_width() - toggle_width, 24.0],
                egui::TextEdit::singleline(&mut state.form.password)
                    .password(!state.form.show_password)
                    .hint_text("Създайте силна парола"),
            )
            .changed();
        if ui
            .add_sized([toggle_width, 24.0], egui::Button::new("👁"))
            .clicked()
        {
            state.form.show_password = !state.form.show_password;
        }
    });

    if !state.form.password.is_empty() {
        ui.add_space(4.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            egui::RichText::new("Изисквания за паролата:").size(11.0),
        );
        let requirements = state.password_requirements();
        requirement_line(ui, requirements.length, "Най-малко 8 символа");
        requirement_line(ui, requirements.uppercase, "Една главна буква");
        requirement_line(ui, requirements.lowercase, "Една малка буква");
        requirement_line(ui, requirements.number, "Едно число");
    }
    ui.add_space(8.0);

    ui.colored_label(colors::TEXT_SECONDARY, "Потвърдете паролата");
    ui.horizontal(|ui| {
        let toggle_width = 28.0;
        edited |= ui
            .add_sized(
                [ui.available_width() - toggle_width, 24.0],
                egui::TextEdit::singleline(&mut state.form.confirm_password)
                    .password(!state.form.show_confirm_password)
                    .hint_text("Потвърдете паролата си"),
            )
            .changed();
        if ui
            .add_sized([toggle_width, 24.0], egui::Button::new("👁"))
            .clicked()
        {
            state.form.show_confirm_password = !state.form.show_confirm_password;
        }
    });

    // Reactive mismatch hint, shown before any submit attempt.
    if !state.form.confirm_password.is_empty()
        && state.form.password != state.form.confirm_password
    {
        ui.colored_label(
            colors::ERROR,
            egui::RichText::new(MSG_PASSWORDS_MISMATCH).size(11.0),
        );
    }
    ui.add_space(10.0);

    ui.horizontal_wrapped(|ui| {
        ui.checkbox(&mut state.form.agreed_to_terms, "");
        ui.colored_label(colors::TEXT_SECONDARY, "Съгласен съм с");
        ui.hyperlink_to("Общите условия", state.config.web_route("/terms"));
        ui.colored_label(colors::TEXT_SECONDARY, "и");
        ui.hyperlink_to(
            "Политиката за поверителност",
            state.config.web_route("/privacy"),
        );
    });
    ui.add_space(12.0);

    let submit_label = if state.auth_state.loading {
        "Създаване на акаунт..."
    } else {
        "Регистрирай се"
    };
    let can_submit = state.can_submit();
    ui.add_enabled_ui(can_submit, |ui| {
        let button = egui::Button::new(
            egui::RichText::new(submit_label)
                .size(15.0)
                .color(colors::TEXT_LIGHT),
        )
        .fill(colors::PRIMARY);
        if ui
            .add_sized([ui.available_width(), 34.0], button)
            .clicked()
        {
            state.handle_submit();
        }
    });

    if state.auth_state.loading {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(colors::TEXT_SECONDARY, "Моля, изчакайте...");
        });
    }

    ui.add_space(12.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.colored_label(
            colors::TEXT_MUTED,
            egui::RichText::new("Или се регистрирайте с").size(12.0),
        );
    });
    ui.add_space(8.0);

    ui.add_enabled_ui(!state.auth_state.loading, |ui| {
        if ui
            .add_sized(
                [ui.available_width(), 30.0],
                egui::Button::new("🌐 Google"),
            )
            .clicked()
        {
            if let Some(url) = state.handle_google_signup() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
            }
        }
    });

    ui.add_space(14.0);
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 180.0).max(0.0) / 2.0);
            ui.colored_label(colors::TEXT_SECONDARY, "Вече имате акаунт?");
            ui.hyperlink_to("Вход", state.config.web_route("/login"));
        });
    });

    if edited {
        state.note_field_edited();
    }
}

fn requirement_line(ui: &mut egui::Ui, met: bool, text: &str) {
    let color = if met {
        colors::REQUIREMENT_MET
    } else {
        colors::REQUIREMENT_UNMET
    };
    ui.horizontal(|ui| {
        ui.colored_label(color, "✔");
        ui.colored_label(color, egui::RichText::new(text).size(11.0));
    });
}
