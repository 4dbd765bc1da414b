//! Reader for the Turkish Web Treebank in CoNLL-U format.
//!
//! The treebank consists of two sections, `web` and `wiki`, each backed
//! by one CoNLL-U file. Sentences of a section are deterministically
//! partitioned into `train`, `dev`, and `test` splits by their position
//! in the file, so no split assignment needs to be stored.
//!
//! Reading is lazy: constructing a sentence iterator performs no IO,
//! and a defect in the corpus surfaces on the pull that reaches the
//! offending sentence.
//!
//! The treebank files themselves are distributed separately; place
//! `web.conllu` and `wiki.conllu` in the `data` directory under the
//! package root (or point a [`FileSource`] at another directory) before
//! using the convenience functions below.
//!
//! ```no_run
//! use twt_conllu::sentences;
//!
//! for sentence in sentences(Some("web"), Some("train"))? {
//!     let sentence = sentence?;
//!     println!("{}: {}", sentence.id(), sentence.text());
//! }
//! # Ok::<(), twt_conllu::ReadError>(())
//! ```

mod error;
pub use crate::error::{ParseError, ReadError};

pub mod io;
pub use crate::io::{as_conllu, sentences, CorpusSource, FileSource, Reader, Sentences};

pub mod parse;

pub mod display;

mod split;
pub use crate::split::{in_split, Section, Split};
