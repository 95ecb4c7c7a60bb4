pub mod app;
pub mod splash;
pub mod theme;
