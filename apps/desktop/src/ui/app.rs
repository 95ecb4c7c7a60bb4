//! Top-level eframe app: the splash phase, the one-shot handoff, and the
//! tabbed main shell (nav bar + colored page panels).

use std::time::Duration;

use eframe::egui;
use shell_core::assets::SplashAnimation;
use shell_core::{PageId, ShellState, NAV_ITEMS};

use crate::controller::phase::AppPhase;
use crate::ui::splash::SplashView;
use crate::ui::theme;

const MAIN_WINDOW_SIZE: egui::Vec2 = egui::vec2(1000.0, 800.0);
const NAV_BAR_HEIGHT: f32 = 40.0;

pub struct ShellApp {
    phase: AppPhase,
    splash_view: Option<SplashView>,
}

impl ShellApp {
    pub fn bootstrap(splash_delay: Duration, animation: Option<SplashAnimation>) -> Self {
        Self {
            phase: AppPhase::splash(splash_delay),
            splash_view: Some(SplashView::new(animation)),
        }
    }

    /// Runs once, on the tick where the phase flipped to main. The sequencer
    /// (worker thread + channel) was already released by the flip; what is
    /// left is closing the splash view and restyling the viewport into the
    /// main window.
    fn complete_handoff(&mut self, ctx: &egui::Context) {
        self.splash_view = None;
        ctx.send_viewport_cmd(egui::ViewportCommand::Decorations(true));
        ctx.send_viewport_cmd(egui::ViewportCommand::Resizable(true));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(MAIN_WINDOW_SIZE));
        tracing::info!("splash handoff complete, showing main window");
    }
}

fn show_nav_bar(ctx: &egui::Context, shell: &mut ShellState) {
    egui::TopBottomPanel::top("nav_bar")
        .exact_height(NAV_BAR_HEIGHT)
        .frame(egui::Frame::NONE.fill(theme::NAV_BAR_FILL))
        .show(ctx, |ui| {
            ui.style_mut().spacing.item_spacing = egui::vec2(0.0, 0.0);
            ui.horizontal_centered(|ui| {
                for item in NAV_ITEMS {
                    let active = shell.is_active(item.page);
                    let button = egui::Button::new(
                        egui::RichText::new(item.label).color(theme::NAV_TEXT),
                    )
                    .fill(theme::nav_button_fill(active))
                    .stroke(egui::Stroke::NONE)
                    .corner_radius(egui::CornerRadius::ZERO)
                    .min_size(egui::vec2(0.0, NAV_BAR_HEIGHT));

                    if ui.add(button).clicked() && shell.switch_to(item.page) {
                        tracing::debug!(page = %item.page, "nav button switched page");
                    }
                }
            });
        });
}

fn show_active_page(ctx: &egui::Context, page: PageId) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::page_fill(page)))
        .show(ctx, |_ui| {});
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.phase.advance() {
            self.complete_handoff(ctx);
        }

        match &mut self.phase {
            AppPhase::Splash(_) => {
                if let Some(view) = self.splash_view.as_mut() {
                    view.show(ctx);
                }
                // Keep polling the sequencer even while nothing animates.
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            AppPhase::Main(shell) => {
                show_nav_bar(ctx, shell);
                show_active_page(ctx, shell.active());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_starts_in_splash_with_a_view() {
        let app = ShellApp::bootstrap(Duration::from_secs(6), None);
        assert!(app.phase.is_splash());
        assert!(app.splash_view.is_some());
    }

    #[test]
    fn nav_styling_follows_the_single_active_page() {
        let mut shell = ShellState::new();
        shell.switch_to(PageId::Notes);

        let active_fills: Vec<bool> = NAV_ITEMS
            .iter()
            .map(|item| theme::nav_button_fill(shell.is_active(item.page)))
            .map(|fill| fill == theme::NAV_BUTTON_ACTIVE_FILL)
            .collect();

        assert_eq!(active_fills.iter().filter(|&&a| a).count(), 1);
        assert!(active_fills[PageId::Notes.index()]);
    }
}
