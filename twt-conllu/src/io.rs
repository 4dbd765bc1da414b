//! Treebank reading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use twt::Sentence;

use crate::error::ReadError;
use crate::parse::{decompose_sentence, segment_sentences, validate_sentence};
use crate::split::{in_split, Section, Split};

/// A source of raw section content.
///
/// The reader does not care where section files live; anything that can
/// produce the full UTF-8 content of a section can back it.
pub trait CorpusSource {
    /// Get the full content of the section's CoNLL-U file.
    fn content(&self, section: Section) -> io::Result<String>;
}

/// A file-backed corpus source.
///
/// Sections map to `web.conllu` and `wiki.conllu` under a data
/// directory, by default `data` under the package root. The treebank
/// files are distributed separately from this crate and must be placed
/// there before the default source can read anything.
#[derive(Clone, Debug)]
pub struct FileSource {
    data_dir: PathBuf,
}

impl FileSource {
    /// Construct a source that reads section files from the given
    /// data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> FileSource {
        FileSource {
            data_dir: data_dir.into(),
        }
    }
}

impl Default for FileSource {
    fn default() -> Self {
        FileSource::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }
}

impl CorpusSource for FileSource {
    fn content(&self, section: Section) -> io::Result<String> {
        fs::read_to_string(self.data_dir.join(section.file_name()))
    }
}

/// A reader for Turkish Web Treebank sentences.
pub struct Reader<S> {
    source: S,
}

impl<S: CorpusSource> Reader<S> {
    /// Construct a reader over a corpus source.
    pub fn new(source: S) -> Reader<S> {
        Reader { source }
    }

    /// Get a lazy iterator over the sentences of the requested section
    /// and split as structured records.
    ///
    /// An unspecified section reads all sections; an unspecified split
    /// keeps every sentence. No file is opened before the iterator is
    /// first polled, and a corpus defect surfaces only on the pull that
    /// reaches the offending sentence.
    pub fn sentences(self, section: Option<Section>, split: Option<Split>) -> Sentences<S> {
        Sentences {
            source: self.source,
            sections: resolve_sections(section).into_iter(),
            split,
            blocks: Vec::new().into_iter(),
            done: false,
        }
    }

    /// Read the requested section and split back out as CoNLL-U text.
    ///
    /// The surviving sentence annotations are validated and rejoined
    /// with a blank line; no decomposition takes place.
    pub fn as_conllu(
        self,
        section: Option<Section>,
        split: Option<Split>,
    ) -> Result<String, ReadError> {
        let mut blocks = Vec::new();

        for section in resolve_sections(section) {
            let content = self.source.content(section)?;

            for (index, block) in segment_sentences(&content).into_iter().enumerate() {
                if !in_split(index, split) {
                    continue;
                }

                validate_sentence(&block)?;
                blocks.push(block);
            }
        }

        Ok(blocks.iter().join("\n\n"))
    }
}

/// Sections to read for a request, in reading order.
///
/// An unspecified section resolves to every section. Sources are
/// ordered by the name of their backing file, so that sentence order
/// and split assignment stay reproducible across reads.
fn resolve_sections(section: Option<Section>) -> Vec<Section> {
    let mut sections = match section {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };

    sections.sort_by_key(|section| section.file_name());
    sections
}

/// An iterator over the sentences of a treebank read.
///
/// The iterator is finite and not restartable; a fresh [`Reader`] call
/// re-reads from the source. After yielding an error the iterator is
/// exhausted.
#[derive(Debug)]
pub struct Sentences<S> {
    source: S,
    sections: std::vec::IntoIter<Section>,
    split: Option<Split>,
    blocks: std::vec::IntoIter<String>,
    done: bool,
}

impl<S: CorpusSource> Iterator for Sentences<S> {
    type Item = Result<Sentence, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(block) = self.blocks.next() {
                let sentence = validate_sentence(&block)
                    .and_then(|_| decompose_sentence(&block))
                    .map_err(ReadError::from);

                if sentence.is_err() {
                    self.done = true;
                }

                return Some(sentence);
            }

            let section = match self.sections.next() {
                Some(section) => section,
                None => return None,
            };

            let content = match self.source.content(section) {
                Ok(content) => content,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
            };

            let split = self.split;
            self.blocks = segment_sentences(&content)
                .into_iter()
                .enumerate()
                .filter(|&(index, _)| in_split(index, split))
                .map(|(_, block)| block)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}

/// Read treebank sentences as structured records.
///
/// `section` and `split` are validated before any file is opened; the
/// returned iterator reads lazily from the default data directory.
pub fn sentences(
    section: Option<&str>,
    split: Option<&str>,
) -> Result<Sentences<FileSource>, ReadError> {
    let section = section.map(Section::from_name).transpose()?;
    let split = split.map(Split::from_name).transpose()?;

    Ok(Reader::new(FileSource::default()).sentences(section, split))
}

/// Read the treebank back out as CoNLL-U text.
pub fn as_conllu(section: Option<&str>, split: Option<&str>) -> Result<String, ReadError> {
    let section = section.map(Section::from_name).transpose()?;
    let split = split.map(Split::from_name).transpose()?;

    Reader::new(FileSource::default()).as_conllu(section, split)
}
