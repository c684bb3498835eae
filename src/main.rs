#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap;
mod bridge;
mod checksum;
mod config;
mod copy;
mod debug;
mod delete;
mod disk;
mod error;
mod extract;
mod github;
mod installer;
mod java;
mod layout;
mod router;
mod shortcuts;
mod store;

use app::InstallerApp;
use bootstrap::Bootstrap;
use config::{COLOR_BG_DARK, WINDOW_MIN_SIZE, WINDOW_SIZE, WINDOW_TITLE};
use eframe::egui;
use router::{Route, Router};

fn main() -> eframe::Result<()> {
    debug::log_section("Startup");

    // The first view is settled before the window exists
    let mut router = Router::new();
    if let Err(e) = router.replace(Route::Home.path()) {
        debug::log(&format!("ERROR: {}", e));
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([WINDOW_SIZE.0, WINDOW_SIZE.1])
        .with_min_inner_size([WINDOW_MIN_SIZE.0, WINDOW_MIN_SIZE.1])
        .with_resizable(true);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut bootstrap = Bootstrap::new();

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| create_app(cc, &mut bootstrap, router)),
    )
}

/// eframe calls this once the native window is up
fn create_app(
    cc: &eframe::CreationContext<'_>,
    bootstrap: &mut Bootstrap,
    router: Router,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    // Set initial visuals (theme is fully applied in InstallerApp::new)
    cc.egui_ctx.set_visuals(egui::Visuals {
        panel_fill: COLOR_BG_DARK,
        window_fill: COLOR_BG_DARK,
        extreme_bg_color: COLOR_BG_DARK,
        faint_bg_color: COLOR_BG_DARK,
        ..egui::Visuals::dark()
    });

    let app = bootstrap.mount(|| InstallerApp::new(cc, router))??;
    debug::log(&format!("Lifecycle: {:?}", bootstrap.lifecycle()));
    Ok(Box::new(app))
}
