// Server-side rendering of the portfolio page with askama templates
// (see `templates/`). Every renderer is pure: same records in, same HTML out.

pub mod components;
pub mod icons;
pub mod page;

pub use page::{render_page, RenderOptions};
