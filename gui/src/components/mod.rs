pub mod common;
pub mod keyboard;
pub mod pan_controls;
pub mod toolbar;
