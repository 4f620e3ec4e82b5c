//! Translation layer: HTTP provider client and row-isolating batch augmenter.

mod augment;
mod http;

pub use augment::{TRANSLATE_DELAY, translate_rows};
pub use http::{HttpTranslator, Translate, TranslateError};
