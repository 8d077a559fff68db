// Resume rendering: request-scoped records in, HTML fragment out.

pub mod html;

pub use html::render_resume_html_or_fallback;
