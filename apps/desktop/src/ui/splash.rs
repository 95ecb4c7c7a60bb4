//! Splash-phase rendering: the looping animation scaled to the fixed
//! splash window, with a drawn placeholder when the asset failed to load.

use eframe::egui;
use shell_core::assets::SplashAnimation;

const SPLASH_BACKDROP: egui::Color32 = egui::Color32::from_rgb(18, 18, 20);
const PLACEHOLDER_REPAINT_MS: u64 = 33;

pub struct SplashView {
    animation: Option<SplashAnimation>,
    current_frame: usize,
    next_frame_at_secs: f64,
    texture: Option<egui::TextureHandle>,
}

impl SplashView {
    pub fn new(animation: Option<SplashAnimation>) -> Self {
        Self {
            animation,
            current_frame: 0,
            next_frame_at_secs: 0.0,
            texture: None,
        }
    }

    /// Step playback to the frame due at `now` (seconds). Returns `true`
    /// when the visible frame changed and the texture needs a refresh; the
    /// first call schedules frame 0 and always reports a change.
    fn advance_frame(&mut self, now: f64) -> bool {
        let Some(animation) = self.animation.as_ref() else {
            return false;
        };

        if self.next_frame_at_secs == 0.0 {
            self.next_frame_at_secs = now + frame_delay_secs(animation, self.current_frame);
            return true;
        }
        if now < self.next_frame_at_secs {
            return false;
        }

        // Loop forever; the sequencer decides when the splash goes away.
        self.current_frame = (self.current_frame + 1) % animation.frames.len();
        self.next_frame_at_secs = now + frame_delay_secs(animation, self.current_frame);
        true
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let frame_changed = self.advance_frame(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(SPLASH_BACKDROP))
            .show(ctx, |ui| match self.animation.as_ref() {
                Some(animation) => {
                    if frame_changed || self.texture.is_none() {
                        let frame = &animation.frames[self.current_frame];
                        let color_image = egui::ColorImage::from_rgba_unmultiplied(
                            [frame.width as usize, frame.height as usize],
                            &frame.rgba,
                        );
                        match self.texture.as_mut() {
                            Some(texture) => {
                                texture.set(color_image, egui::TextureOptions::LINEAR);
                            }
                            None => {
                                self.texture = Some(ctx.load_texture(
                                    "splash-animation",
                                    color_image,
                                    egui::TextureOptions::LINEAR,
                                ));
                            }
                        }
                    }
                    if let Some(texture) = &self.texture {
                        ui.centered_and_justified(|ui| {
                            ui.add(
                                egui::Image::new(texture).fit_to_exact_size(ui.available_size()),
                            );
                        });
                    }
                }
                None => {
                    // Degraded start: no animation asset, keep a visible pulse.
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Spinner::new().size(48.0));
                    });
                }
            });

        let repaint_ms = self
            .animation
            .as_ref()
            .map(|animation| u64::from(animation.frames[self.current_frame].delay_ms))
            .unwrap_or(PLACEHOLDER_REPAINT_MS);
        ctx.request_repaint_after(std::time::Duration::from_millis(repaint_ms));
    }
}

fn frame_delay_secs(animation: &SplashAnimation, frame: usize) -> f64 {
    f64::from(animation.frames[frame].delay_ms) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use shell_core::assets::AnimationFrame;

    fn two_frame_animation(delay_ms: u32) -> SplashAnimation {
        let frame = |_| AnimationFrame {
            width: 2,
            height: 2,
            rgba: vec![0; 2 * 2 * 4],
            delay_ms,
        };
        SplashAnimation {
            frames: vec![frame(0), frame(1)],
        }
    }

    #[test]
    fn first_tick_shows_frame_zero() {
        let mut view = SplashView::new(Some(two_frame_animation(100)));
        assert!(view.advance_frame(1.0));
        assert_eq!(view.current_frame, 0);
    }

    #[test]
    fn frames_advance_on_schedule_and_loop() {
        let mut view = SplashView::new(Some(two_frame_animation(100)));
        assert!(view.advance_frame(1.0));

        // Not due yet.
        assert!(!view.advance_frame(1.05));
        assert_eq!(view.current_frame, 0);

        // Due: advances, then wraps back to frame 0.
        assert!(view.advance_frame(1.11));
        assert_eq!(view.current_frame, 1);
        assert!(view.advance_frame(1.25));
        assert_eq!(view.current_frame, 0);
    }

    #[test]
    fn placeholder_view_never_advances() {
        let mut view = SplashView::new(None);
        assert!(!view.advance_frame(1.0));
        assert!(!view.advance_frame(99.0));
        assert_eq!(view.current_frame, 0);
    }
}
