/**
 * walletbox Desktop App - Main Entry Point
 *
 * Implements `eframe::App`: drains finished effects into the store, then
 * renders the top bar, the current page and the sign-out dialog.
 */
use eframe::egui;
use walletbox::egui_app::{theme, views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    tracing::info!("Using server {}", config.server_url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Walletbox",
        options,
        Box::new(move |cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            let state = AppState::new(config, cc.egui_ctx.clone())?;
            Ok(Box::new(WalletApp { state }))
        }),
    )?;

    Ok(())
}

struct WalletApp {
    state: AppState,
}

impl eframe::App for WalletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_effects();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
    }
}
