/**
 * egui Native Desktop App - Main Entry Point
 *
 * Main entry point for the ChemCycle registration client. It implements
 * eframe::App and wires the per-frame auth polling to the views.
 */
use chemcycle::egui_app::{theme, views, AppState};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 760.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ChemCycle - Регистрация",
        options,
        Box::new(|cc| {
            theme::styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(ChemcycleApp::default()))
        }),
    )
}

/// Main application state
struct ChemcycleApp {
    state: AppState,
}

impl Default for ChemcycleApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for ChemcycleApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.state.check_auth_result();

        views::render_top_bar(ctx, &mut self.state, frame);

        views::render_footer(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        // Keep polling the worker channel while a signup is in flight.
        if self.state.auth_state.loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
