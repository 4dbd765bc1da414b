//! Segmentation, validation, and decomposition of CoNLL-U sentence
//! annotations.
//!
//! The treebank files use exactly one layout: a sentence annotation is
//! a blank-line-delimited block whose first two lines are the sentence
//! id and sentence text comments, followed by one ten-column
//! tab-separated line per token. Anything else is rejected; there is no
//! lenient recovery.

use twt::{Feature, Sentence, Token, TokenBuilder};

use crate::error::ParseError;

/// Comment prefix of the sentence identifier line.
pub const SENT_ID_PREFIX: &str = "# sent_id = ";

/// Comment prefix of the sentence text line.
pub const TEXT_PREFIX: &str = "# text = ";

/// Placeholder marking an empty feature list or an unused column.
pub const EMPTY_FIELD: &str = "_";

const TOKEN_COLUMNS: usize = 10;

/// Split file content into whitespace-trimmed sentence annotations.
///
/// Annotations are separated by a blank line. The split is total:
/// empty input yields a single empty annotation.
pub fn segment_sentences(conllu: &str) -> Vec<String> {
    conllu.split("\n\n").map(|s| s.trim().to_owned()).collect()
}

/// Split a sentence annotation into whitespace-trimmed lines.
pub fn segment_lines(sentence: &str) -> Vec<String> {
    sentence.split('\n').map(|l| l.trim().to_owned()).collect()
}

/// Check that a sentence annotation is structurally well-formed.
///
/// A well-formed annotation has at least three lines: a sentence id
/// comment, a sentence text comment, and one or more token lines of
/// exactly ten tab-separated columns each.
pub fn validate_sentence(sentence: &str) -> Result<(), ParseError> {
    let lines = segment_lines(sentence);

    if lines.len() < 3 {
        return Err(ParseError::TooFewLines {
            count: lines.len(),
            sentence: sentence.to_owned(),
        });
    }

    if !lines[0].starts_with(SENT_ID_PREFIX) {
        return Err(ParseError::MissingSentenceId {
            sentence: sentence.to_owned(),
        });
    }

    if !lines[1].starts_with(TEXT_PREFIX) {
        return Err(ParseError::MissingText {
            sentence: sentence.to_owned(),
        });
    }

    for line in &lines[2..] {
        if line.split('\t').count() != TOKEN_COLUMNS {
            return Err(ParseError::IncorrectColumnCount { line: line.clone() });
        }
    }

    Ok(())
}

/// Decode a pipe-delimited feature list into ordered features.
///
/// Segments equal to `_` mark an absent feature and are skipped
/// wherever they appear; every other segment must be a single
/// `name=value` pair. Order and duplicates are preserved.
pub fn decode_features(raw: &str) -> Result<Vec<Feature>, ParseError> {
    let mut features = Vec::new();

    for fv in raw.split('|') {
        if fv == EMPTY_FIELD {
            continue;
        }

        let parts: Vec<&str> = fv.split('=').collect();
        if parts.len() != 2 {
            return Err(ParseError::IncorrectFeatureField {
                value: fv.to_owned(),
            });
        }

        features.push(Feature::new(parts[0], parts[1]));
    }

    Ok(features)
}

fn parse_numeric_field(value: &str) -> Result<usize, ParseError> {
    value.parse::<usize>().map_err(|_| ParseError::ParseIntField {
        value: value.to_owned(),
    })
}

fn decompose_token(line: &str) -> Result<Token, ParseError> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != TOKEN_COLUMNS {
        return Err(ParseError::IncorrectColumnCount {
            line: line.to_owned(),
        });
    }

    // Column 8 is unused in this corpus layout.
    let token = TokenBuilder::new(parse_numeric_field(columns[0])?, columns[1])
        .lemma(columns[2])
        .coarse_tag(columns[3])
        .fine_tag(columns[4])
        .features(decode_features(columns[5])?)
        .head(parse_numeric_field(columns[6])?)
        .dependency_relation(columns[7])
        .miscellaneous_features(decode_features(columns[9])?)
        .into();

    Ok(token)
}

/// Decompose a sentence annotation into a `Sentence` record.
///
/// The annotation is expected to have passed [`validate_sentence`];
/// structural defects are still reported rather than ignored.
pub fn decompose_sentence(sentence: &str) -> Result<Sentence, ParseError> {
    let lines = segment_lines(sentence);

    if lines.len() < 3 {
        return Err(ParseError::TooFewLines {
            count: lines.len(),
            sentence: sentence.to_owned(),
        });
    }

    let id = lines[0]
        .strip_prefix(SENT_ID_PREFIX)
        .ok_or_else(|| ParseError::MissingSentenceId {
            sentence: sentence.to_owned(),
        })?;

    let text = lines[1]
        .strip_prefix(TEXT_PREFIX)
        .ok_or_else(|| ParseError::MissingText {
            sentence: sentence.to_owned(),
        })?;

    let tokens = lines[2..]
        .iter()
        .map(|line| decompose_token(line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Sentence::new(id, text, tokens))
}

#[cfg(test)]
mod tests {
    use twt::Feature;

    use super::{
        decode_features, decompose_sentence, segment_lines, segment_sentences, validate_sentence,
    };
    use crate::error::ParseError;

    static MINIMAL: &str =
        "# sent_id = doc:S001\n# text = Ev .\n1\tEv\tev\tNOUN\tNN\t_\t0\troot\t_\t_";

    #[test]
    fn segments_on_blank_lines() {
        let blocks = segment_sentences("a\nb\n\n  c\nd  \n");
        assert_eq!(blocks, ["a\nb", "c\nd"]);
    }

    #[test]
    fn segmenting_empty_input_yields_one_empty_block() {
        assert_eq!(segment_sentences(""), [""]);
    }

    #[test]
    fn segments_and_trims_lines() {
        assert_eq!(segment_lines(" a \nb\n c"), ["a", "b", "c"]);
    }

    #[test]
    fn decodes_empty_feature_list() {
        assert!(decode_features("_").unwrap().is_empty());
    }

    #[test]
    fn decodes_features_in_order() {
        assert_eq!(
            decode_features("A=1|B=2").unwrap(),
            [Feature::new("A", "1"), Feature::new("B", "2")]
        );
    }

    #[test]
    fn skips_feature_sentinel_anywhere() {
        assert_eq!(
            decode_features("A=1|_|B=2").unwrap(),
            [Feature::new("A", "1"), Feature::new("B", "2")]
        );
    }

    #[test]
    fn preserves_duplicate_feature_names() {
        assert_eq!(
            decode_features("A=1|A=2").unwrap(),
            [Feature::new("A", "1"), Feature::new("A", "2")]
        );
    }

    #[test]
    fn rejects_feature_without_value() {
        assert_eq!(
            decode_features("A=1|B").unwrap_err(),
            ParseError::IncorrectFeatureField {
                value: "B".to_owned()
            }
        );
    }

    #[test]
    fn rejects_feature_with_two_separators() {
        assert_eq!(
            decode_features("A=1=2").unwrap_err(),
            ParseError::IncorrectFeatureField {
                value: "A=1=2".to_owned()
            }
        );
    }

    #[test]
    fn minimal_sentence_is_valid() {
        validate_sentence(MINIMAL).unwrap();

        let sentence = decompose_sentence(MINIMAL).unwrap();
        assert_eq!(sentence.id(), "doc:S001");
        assert_eq!(sentence.text(), "Ev .");
        assert_eq!(sentence.len(), 1);
        assert_eq!(sentence[0].form(), "Ev");
    }

    #[test]
    fn rejects_short_annotation() {
        let err = validate_sentence("# sent_id = s\n# text = t").unwrap_err();
        assert!(matches!(err, ParseError::TooFewLines { count: 2, .. }));
    }

    #[test]
    fn rejects_empty_annotation() {
        let err = validate_sentence("").unwrap_err();
        assert!(matches!(err, ParseError::TooFewLines { count: 1, .. }));
    }

    #[test]
    fn rejects_missing_sentence_id() {
        let block = "# id = s\n# text = t\n1\ta\ta\tX\tX\t_\t0\troot\t_\t_";
        let err = validate_sentence(block).unwrap_err();
        assert!(matches!(err, ParseError::MissingSentenceId { .. }));
    }

    #[test]
    fn rejects_missing_text() {
        let block = "# sent_id = s\n# txt = t\n1\ta\ta\tX\tX\t_\t0\troot\t_\t_";
        let err = validate_sentence(block).unwrap_err();
        assert!(matches!(err, ParseError::MissingText { .. }));
    }

    #[test]
    fn validates_first_token_line() {
        // The line right after the two comments is a token line and is
        // held to the ten-column rule like every other one.
        let block = "# sent_id = s\n# text = t\nnot\ta\ttoken";
        let err = validate_sentence(block).unwrap_err();
        assert_eq!(
            err,
            ParseError::IncorrectColumnCount {
                line: "not\ta\ttoken".to_owned()
            }
        );
    }

    #[test]
    fn rejects_nine_column_token() {
        let block = "# sent_id = s\n# text = t\n1\ta\ta\tX\tX\t_\t0\troot\t_";
        let err = validate_sentence(block).unwrap_err();
        assert!(matches!(err, ParseError::IncorrectColumnCount { .. }));
    }

    #[test]
    fn rejects_non_numeric_token_id() {
        let block = "# sent_id = s\n# text = t\nx\ta\ta\tX\tX\t_\t0\troot\t_\t_";
        let err = decompose_sentence(block).unwrap_err();
        assert_eq!(
            err,
            ParseError::ParseIntField {
                value: "x".to_owned()
            }
        );
    }

    #[test]
    fn rejects_non_numeric_head() {
        let block = "# sent_id = s\n# text = t\n1\ta\ta\tX\tX\t_\ty\troot\t_\t_";
        let err = decompose_sentence(block).unwrap_err();
        assert_eq!(
            err,
            ParseError::ParseIntField {
                value: "y".to_owned()
            }
        );
    }

    #[test]
    fn decomposes_all_columns() {
        let block = "# sent_id = doc:S002\n# text = evde kal\n\
                     1\tevde\tev\tNOUN\tNN\tCase=Loc|Number=Sing\t2\tobl\t_\tSpaceAfter=No\n\
                     2\tkal\tkal\tVERB\tVB\t_\t0\troot\t_\t_";
        let sentence = decompose_sentence(block).unwrap();

        assert_eq!(sentence.len(), 2);
        let token = &sentence[0];
        assert_eq!(token.id(), 1);
        assert_eq!(token.form(), "evde");
        assert_eq!(token.lemma(), "ev");
        assert_eq!(token.coarse_tag(), "NOUN");
        assert_eq!(token.fine_tag(), "NN");
        assert_eq!(
            token.features(),
            [Feature::new("Case", "Loc"), Feature::new("Number", "Sing")]
        );
        assert_eq!(token.head(), 2);
        assert_eq!(token.dependency_relation(), "obl");
        assert_eq!(
            token.miscellaneous_features(),
            [Feature::new("SpaceAfter", "No")]
        );
        assert_eq!(sentence[1].head(), 0);
    }
}
