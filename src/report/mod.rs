mod format;
mod renderer;

pub use format::{currency, percent};
pub use renderer::render_report;
