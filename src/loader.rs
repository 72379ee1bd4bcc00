//! Filesystem collaborators
//!
//! The engine itself only sees lines and strings. This module reads them from
//! the conventional on-disk layout:
//!
//! - a stop-word directory whose files are all stop-word lists (Latin-1)
//! - a dictionary directory with the positive and negative lists (Latin-1)
//! - an input list (JSON array of `URL_ID`/`URL` objects)
//! - a text directory holding `<URL_ID>.txt` per document (UTF-8)
//!
//! Missing lexicon files are not fatal: they are logged and treated as empty.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{AnalysisError, AnalysisResult};
use crate::nlp::lexicon::{Category, Lexicon, LexiconBuilder};
use crate::pipeline::spec::LexiconSpec;
use crate::types::{Document, InputRow, MetricsRecord, COLUMNS};

/// Decode bytes as ISO-8859-1: every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Line boundaries for word lists. Wider than `str::lines`: NEL (byte 0x85
/// in Latin-1), form feed, vertical tab and the file/group/record
/// separators all end a line too.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines; `\r\n` counts as one break and a trailing break
/// does not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(LINE_BREAKS) {
        lines.push(rest[..pos].to_string());
        let tail = &rest[pos..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &rest[pos + width..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }
    lines
}

/// Read a Latin-1 file as lines
pub fn read_latin1_lines(path: &Path) -> AnalysisResult<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| AnalysisError::io(path, e))?;
    Ok(split_lines(&decode_latin1(&bytes)))
}

/// Load the lexicon described by `spec`.
///
/// Stop-word files are read in file-name order. Any missing or unreadable
/// file is logged and contributes nothing.
#[tracing::instrument(skip_all, fields(stopwords_dir = %spec.stopwords_dir.display()))]
pub fn load_lexicon(spec: &LexiconSpec) -> Lexicon {
    let mut builder = LexiconBuilder::new();

    for path in stopword_files(&spec.stopwords_dir) {
        match read_latin1_lines(&path) {
            Ok(lines) => {
                debug!(path = %path.display(), lines = lines.len(), "Loaded stop words");
                builder.add_stop_words(lines);
            }
            Err(err) => warn!(error = %err, "Failed to read stop-word file, skipping"),
        }
    }

    for (category, path) in [
        (Category::Positive, spec.positive_path()),
        (Category::Negative, spec.negative_path()),
    ] {
        if !path.is_file() {
            warn!(
                category = category.as_str(),
                path = %path.display(),
                "Sentiment list not found, using an empty set"
            );
            continue;
        }
        match read_latin1_lines(&path) {
            Ok(lines) => builder.add_sentiment_words(category, lines),
            Err(err) => warn!(category = category.as_str(), error = %err, "Failed to read sentiment list"),
        }
    }

    builder.build()
}

fn stopword_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "Stop-word directory not readable, using an empty set");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files
}

/// Read the input list. Failure here is fatal for a run.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_input_rows(path: &Path) -> AnalysisResult<Vec<InputRow>> {
    let json = fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;
    Ok(serde_json::from_str(&json)?)
}

/// Attach `<texts_dir>/<id>.txt` to each row; absent files leave the text empty
pub fn attach_texts(rows: Vec<InputRow>, texts_dir: &Path) -> Vec<Document> {
    rows.into_iter()
        .map(|row| {
            let path = texts_dir.join(format!("{}.txt", row.id));
            let text = match fs::read(&path) {
                Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
                Err(err) => {
                    warn!(id = %row.id, error = %err, "Failed to read document text");
                    None
                }
            };
            row.into_document(text)
        })
        .collect()
}

/// Output encoding for [`write_records`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Array of objects keyed by column name
    #[default]
    Json,
    /// Header row plus one tab-separated row per record
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "tsv" | "tab" => Ok(Self::Tsv),
            other => Err(format!("unknown output format \"{other}\" (expected json or tsv)")),
        }
    }
}

/// Serialize records to any writer
pub fn write_records_to<W: Write>(
    mut writer: W,
    records: &[MetricsRecord],
    format: OutputFormat,
) -> AnalysisResult<()> {
    let io_err = |e: std::io::Error| AnalysisError::io("<output>", e);
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer).map_err(io_err)?;
        }
        OutputFormat::Tsv => {
            writeln!(writer, "{}", COLUMNS.join("\t")).map_err(io_err)?;
            for record in records {
                let row: Vec<String> = record
                    .to_row()
                    .into_iter()
                    .map(|cell| cell.replace(['\t', '\n', '\r'], " "))
                    .collect();
                writeln!(writer, "{}", row.join("\t")).map_err(io_err)?;
            }
        }
    }
    writer.flush().map_err(io_err)
}

/// Write records to `path`
pub fn write_records(path: &Path, records: &[MetricsRecord], format: OutputFormat) -> AnalysisResult<()> {
    let file = fs::File::create(path).map_err(|e| AnalysisError::io(path, e))?;
    write_records_to(BufWriter::new(file), records, format).map_err(|err| match err {
        AnalysisError::Io { source, .. } => AnalysisError::io(path, source),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextMetrics;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, bytes: &[u8]) {
        fs::write(dir.join(name), bytes).unwrap();
    }

    fn lexicon_dirs() -> (TempDir, LexiconSpec) {
        let root = TempDir::new().unwrap();
        let stop = root.path().join("StopWords");
        let dict = root.path().join("MasterDictionary");
        fs::create_dir_all(&stop).unwrap();
        fs::create_dir_all(&dict).unwrap();

        let spec = LexiconSpec {
            stopwords_dir: stop,
            dictionary_dir: dict,
            ..LexiconSpec::default()
        };
        (root, spec)
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(decode_latin1(b"caf\xe9"), "café");
    }

    #[test]
    fn test_split_lines_breaks() {
        assert_eq!(
            split_lines("good\u{85}bad\r\nfine\x0cok\rnew\n"),
            vec!["good", "bad", "fine", "ok", "new"]
        );
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_nel_byte_separates_latin1_entries() {
        let (_root, spec) = lexicon_dirs();
        write(&spec.dictionary_dir, "positive-words.txt", b"good\x85great\n");

        let lexicon = load_lexicon(&spec);

        assert!(lexicon.is_positive("good"));
        assert!(lexicon.is_positive("great"));
        assert_eq!(lexicon.positive_words().len(), 2);
    }

    #[test]
    fn test_load_lexicon_from_directories() {
        let (_root, spec) = lexicon_dirs();
        write(&spec.stopwords_dir, "StopWords_Generic.txt", b"THE\nAND\n");
        write(&spec.stopwords_dir, "StopWords_Currencies.txt", b"USD | Dollar\r\nEURO|Euro\n");
        write(&spec.dictionary_dir, "positive-words.txt", b"good\nthe\nna\xefve\n");
        write(&spec.dictionary_dir, "negative-words.txt", b"bad\n");

        let lexicon = load_lexicon(&spec);

        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("usd"));
        assert!(lexicon.is_stop_word("euro"));
        assert!(lexicon.is_positive("good"));
        assert!(lexicon.is_positive("naïve"));
        assert!(!lexicon.is_positive("the"));
        assert!(lexicon.is_negative("bad"));
    }

    #[test]
    fn test_missing_lexicon_files_yield_empty_sets() {
        let (_root, mut spec) = lexicon_dirs();
        spec.stopwords_dir = spec.stopwords_dir.join("does-not-exist");
        write(&spec.dictionary_dir, "positive-words.txt", b"good\n");

        let lexicon = load_lexicon(&spec);

        assert!(lexicon.stop_words().is_empty());
        assert!(lexicon.negative_words().is_empty());
        assert!(lexicon.is_positive("good"));
    }

    #[test]
    fn test_attach_texts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "1.txt", "Hello there.".as_bytes());

        let rows = vec![
            InputRow { id: "1".into(), url: "a".into() },
            InputRow { id: "2".into(), url: "b".into() },
        ];
        let docs = attach_texts(rows, dir.path());

        assert_eq!(docs[0].raw_text.as_deref(), Some("Hello there."));
        assert!(docs[1].raw_text.is_none());
        assert_eq!(docs[1].url, "b");
    }

    #[test]
    fn test_read_input_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, r#"[{"URL_ID": 1, "URL": "https://a"}]"#).unwrap();

        let rows = read_input_rows(&path).unwrap();
        assert_eq!(rows, vec![InputRow { id: "1".into(), url: "https://a".into() }]);
    }

    #[test]
    fn test_unreadable_input_list_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(read_input_rows(&missing), Err(AnalysisError::Io { .. })));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "not json").unwrap();
        assert!(matches!(read_input_rows(&bad), Err(AnalysisError::Json(_))));
    }

    #[test]
    fn test_write_tsv() {
        let records = vec![MetricsRecord::new("1", "https://a", TextMetrics::zeroed())];
        let mut buf = Vec::new();
        write_records_to(&mut buf, &records, OutputFormat::Tsv).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("URL_ID\tURL\tPOSITIVE SCORE"));
        assert_eq!(lines[1].split('\t').count(), COLUMNS.len());
    }

    #[test]
    fn test_write_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let records = vec![MetricsRecord::new("1", "https://a", TextMetrics::zeroed())];
        write_records(&path, &records, OutputFormat::Json).unwrap();

        let back: Vec<MetricsRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("tsv".parse::<OutputFormat>(), Ok(OutputFormat::Tsv));
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }
}
