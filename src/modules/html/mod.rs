pub mod content_pipeline;

pub use content_pipeline::render_post_content;
