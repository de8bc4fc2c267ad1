//! Live terminal dashboard for watching a simulation

mod app;
mod rendering;

pub use app::{DashboardState, LiveDashboard, run_live};
pub use rendering::ui;
