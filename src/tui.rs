//! Terminal UI: the studio dashboard.

mod app;
mod panels;

pub use app::run;
