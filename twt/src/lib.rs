//! Value records for Turkish Web Treebank sentence annotations.
//!
//! A [`Sentence`] owns its [`Token`]s in linear word order, and every
//! token owns its morphological and miscellaneous [`Feature`]s. The
//! records are constructed once by a reader and carry no behavior
//! beyond field access.

mod sentence;
pub use crate::sentence::Sentence;

mod token;
pub use crate::token::{Feature, Token, TokenBuilder};
