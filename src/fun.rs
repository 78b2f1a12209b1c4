//! Go to Fun translation.
//! A translated module is all or nothing: the first unsupported construct aborts it.

mod convert;
pub mod tree;

pub use convert::Translator;
pub use tree::Module;

use crate::error::TranslateError;

pub type Result<T> = std::result::Result<T, TranslateError>;
