pub mod language;
pub mod progress;
pub mod schema;
pub mod text;

pub use language::{Language, detect_language};
pub use progress::{ProgressSink, SilentSink, TracingSink};
pub use text::clean_text;
