//! The one-shot application phase transition: splash, then main shell.

use std::time::Duration;

use shell_core::{ShellState, SplashSequencer};

/// Which of the two application views is live.
///
/// The transition is linear and runs once: `Splash` becomes `Main` when the
/// sequencer's completion signal is consumed, and there is no way back.
pub enum AppPhase {
    Splash(SplashSequencer),
    Main(ShellState),
}

impl AppPhase {
    pub fn splash(delay: Duration) -> Self {
        Self::Splash(SplashSequencer::start(delay))
    }

    pub fn is_splash(&self) -> bool {
        matches!(self, Self::Splash(_))
    }

    /// Drive the handoff. Returns `true` on the single tick where the phase
    /// flips to `Main`; the reactions run in fixed order on the caller's
    /// thread: the splash state is replaced by the main shell at page 0,
    /// then the worker is joined and its channel dropped.
    pub fn advance(&mut self) -> bool {
        let finished = match self {
            Self::Splash(sequencer) => sequencer.poll(),
            Self::Main(_) => false,
        };
        if !finished {
            return false;
        }

        let previous = std::mem::replace(self, Self::Main(ShellState::new()));
        if let Self::Splash(sequencer) = previous {
            sequencer.finish();
        }
        tracing::info!("splash finished; main shell is live");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shell_core::PageId;
    use std::thread;

    fn advance_until_main(phase: &mut AppPhase) -> u32 {
        let mut flips = 0;
        for _ in 0..500 {
            if phase.advance() {
                flips += 1;
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }
        flips
    }

    #[test]
    fn handoff_flips_to_main_exactly_once() {
        let mut phase = AppPhase::splash(Duration::ZERO);
        assert!(phase.is_splash());

        assert_eq!(advance_until_main(&mut phase), 1);
        assert!(!phase.is_splash());

        // The transition is one-shot: further advances change nothing.
        for _ in 0..10 {
            assert!(!phase.advance());
            assert!(!phase.is_splash());
        }
    }

    #[test]
    fn main_shell_opens_on_home() {
        let mut phase = AppPhase::splash(Duration::ZERO);
        assert_eq!(advance_until_main(&mut phase), 1);

        match &phase {
            AppPhase::Main(shell) => assert_eq!(shell.active(), PageId::Home),
            AppPhase::Splash(_) => panic!("phase should be main"),
        }
    }

    #[test]
    fn splash_and_main_are_never_both_live() {
        let mut phase = AppPhase::splash(Duration::from_millis(50));
        loop {
            // Exactly one of the two views is live at every point: splash
            // right up to the flip, main from the flip onward.
            if phase.advance() {
                assert!(!phase.is_splash());
                break;
            }
            assert!(phase.is_splash());
            thread::sleep(Duration::from_millis(5));
        }
    }
}
