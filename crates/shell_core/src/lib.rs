//! Toolkit-free core for the Trailhead desktop shell: the page model, the
//! main-window state machine, the splash startup sequencer, and decoding of
//! the two read-only startup assets.

pub mod assets;
pub mod error;
pub mod page;
pub mod shell;
pub mod splash;

pub use assets::{AnimationFrame, IconImage, SplashAnimation};
pub use error::AssetError;
pub use page::{NavItem, PageId, NAV_ITEMS};
pub use shell::ShellState;
pub use splash::{SplashSequencer, DEFAULT_SPLASH_DELAY};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
