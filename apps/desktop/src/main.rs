use std::path::Path;
use std::sync::Arc;

mod controller;
mod ui;

use eframe::egui;
use shell_core::assets::SplashAnimation;
use shell_core::DEFAULT_SPLASH_DELAY;

use crate::ui::app::ShellApp;

const APP_TITLE: &str = "Trailhead";
const ICON_PATH: &str = "assets/icon.png";
const SPLASH_ANIMATION_PATH: &str = "assets/splash.gif";
const SPLASH_WINDOW_SIZE: [f32; 2] = [400.0, 300.0];

/// Both startup assets are cosmetic: a missing or broken file degrades to a
/// warning, never a startup failure.
fn load_startup_assets() -> (Option<egui::IconData>, Option<SplashAnimation>) {
    let icon = match shell_core::assets::load_window_icon(Path::new(ICON_PATH)) {
        Ok(icon) => Some(egui::IconData {
            rgba: icon.rgba,
            width: icon.width,
            height: icon.height,
        }),
        Err(err) => {
            tracing::warn!(path = ICON_PATH, error = %err, "window icon unavailable, continuing without it");
            None
        }
    };

    let animation =
        match shell_core::assets::load_splash_animation(Path::new(SPLASH_ANIMATION_PATH)) {
            Ok(animation) => {
                tracing::debug!(frames = animation.frame_count(), "splash animation loaded");
                Some(animation)
            }
            Err(err) => {
                tracing::warn!(
                    path = SPLASH_ANIMATION_PATH,
                    error = %err,
                    "splash animation unavailable, using placeholder"
                );
                None
            }
        };

    (icon, animation)
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let (icon, animation) = load_startup_assets();

    // The window starts life as the splash: small, undecorated, centered on
    // screen. The handoff restyles it into the main window.
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size(SPLASH_WINDOW_SIZE)
        .with_decorations(false)
        .with_resizable(false);
    if let Some(icon) = icon {
        viewport = viewport.with_icon(Arc::new(icon));
    }
    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(ShellApp::bootstrap(DEFAULT_SPLASH_DELAY, animation)))),
    )
}
