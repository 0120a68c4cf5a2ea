pub mod config;
pub mod habits;
pub mod journal;
pub mod keys;
pub mod mood;
pub mod pages;
pub mod render;
pub mod state;
pub mod store;
pub mod tasks;
pub mod theme;
pub mod tracker;

pub use config::Config;
pub use pages::Page;
pub use state::DayState;
pub use store::Store;
pub use tracker::{Outcome, Tracker};
