//! Line-oriented declaration extraction
//!
//! The extractor is a heuristic, not a parser. Each line is split on whitespace
//! and inspected by its leading token:
//!
//! - `type NAME struct {` starts collecting a type body. Every following line's
//!   tokens are buffered until a line consisting solely of `}`; the buffered
//!   tokens after `type NAME struct {` are then paired two at a time into
//!   `(field name, field type)`.
//! - `func NAME(...` records a function named by the second token, cut at `(`.
//!
//! A field whose type spans several tokens is mis-paired, and a nested body's
//! bare `}` ends the outer body. Both are accepted limits of the line heuristic.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, ScanError};
use crate::models::declaration::{Field, FileScan, FunctionDeclaration, TypeDeclaration};

/// Leading token of a type introduction
pub const TYPE_KEYWORD: &str = "type";
/// Third token of a type introduction that marks a field-bearing aggregate
pub const AGGREGATE_KEYWORD: &str = "struct";
/// Leading token of a function introduction
pub const FUNCTION_KEYWORD: &str = "func";
/// Sole token of the line that ends a type body
pub const CLOSING_BRACE: &str = "}";
/// Keywords whose occurrences are counted per file
pub const COUNTED_KEYWORDS: [&str; 2] = [FUNCTION_KEYWORD, AGGREGATE_KEYWORD];

/// Index of the first field token in a body buffer: `type`, name, `struct`, `{`
const FIELD_OFFSET: usize = 4;

#[derive(Debug)]
enum State {
    Scanning,
    CollectingBody { line: usize, tokens: Vec<String> },
}

/// Two-state extractor for the lines of one file
#[derive(Debug)]
pub struct DeclarationExtractor {
    state: State,
    line_number: usize,
    scan: FileScan,
}

impl DeclarationExtractor {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            state: State::Scanning,
            line_number: 0,
            scan: FileScan::new(path),
        }
    }

    /// Open `path` and extract every declaration in it
    pub fn extract_file(path: &Path) -> Result<FileScan> {
        let file = File::open(path).map_err(|e| ScanError::file_open_error(path, e))?;
        Self::extract_reader(path, BufReader::new(file))
    }

    /// Extract from any buffered reader; lines are decoded lossily as UTF-8
    pub fn extract_reader<R: BufRead>(path: impl AsRef<Path>, mut reader: R) -> Result<FileScan> {
        let mut extractor = Self::new(path);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ScanError::FileRead {
                    path: extractor.path().to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            extractor.feed_line(&String::from_utf8_lossy(&buf));
        }

        Ok(extractor.finish())
    }

    /// Extract from lines already in memory
    pub fn extract_lines<I, S>(path: impl AsRef<Path>, lines: I) -> FileScan
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extractor = Self::new(path);
        for line in lines {
            extractor.feed_line(line.as_ref());
        }
        extractor.finish()
    }

    pub fn path(&self) -> &Path {
        &self.scan.path
    }

    /// Consume one line of input
    pub fn feed_line(&mut self, line: &str) {
        self.line_number += 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        for token in &tokens {
            if COUNTED_KEYWORDS.contains(token) {
                self.scan.keywords.record(token);
            }
        }

        self.state = match std::mem::replace(&mut self.state, State::Scanning) {
            State::Scanning => self.scan_line(&tokens),
            State::CollectingBody { line, tokens: mut body } => {
                if tokens.len() == 1 && tokens[0] == CLOSING_BRACE {
                    self.finalize_type(line, body);
                    State::Scanning
                } else {
                    body.extend(tokens.iter().map(|t| t.to_string()));
                    State::CollectingBody { line, tokens: body }
                }
            }
        };
    }

    /// Finish the file and hand back its private result
    pub fn finish(mut self) -> FileScan {
        if let State::CollectingBody { line, tokens } = std::mem::replace(&mut self.state, State::Scanning) {
            let name = tokens.get(1).cloned().unwrap_or_default();
            self.warn(line, format!("type {} has no closing brace before end of file", name));
        }
        self.scan
    }

    fn scan_line(&mut self, tokens: &[&str]) -> State {
        match tokens.first() {
            Some(&TYPE_KEYWORD) if tokens.len() >= 3 && tokens[2] == AGGREGATE_KEYWORD => {
                let mut body: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
                if closes_on_same_line(tokens) {
                    if body.last().map(String::as_str) == Some(CLOSING_BRACE) {
                        body.pop();
                    }
                    self.finalize_type(self.line_number, body);
                    State::Scanning
                } else {
                    State::CollectingBody {
                        line: self.line_number,
                        tokens: body,
                    }
                }
            }
            Some(&FUNCTION_KEYWORD) => {
                match function_name(tokens) {
                    Some(name) => self.scan.functions.push(FunctionDeclaration {
                        name,
                        file: self.scan.path.clone(),
                        line: self.line_number,
                    }),
                    None => self.warn(self.line_number, "function introduction without a name"),
                }
                State::Scanning
            }
            _ => State::Scanning,
        }
    }

    fn finalize_type(&mut self, line: usize, tokens: Vec<String>) {
        let name = tokens.get(1).cloned().unwrap_or_default();
        let remainder = tokens.get(FIELD_OFFSET..).unwrap_or(&[]);

        let mut pairs = remainder.chunks_exact(2);
        let fields: Vec<Field> = pairs
            .by_ref()
            .map(|pair| Field::new(&pair[0], &pair[1]))
            .collect();

        if let [dangling] = pairs.remainder() {
            self.warn(
                line,
                format!("type {} has a dangling field token '{}'", name, dangling),
            );
        }

        self.scan.types.push(TypeDeclaration {
            name,
            fields,
            file: self.scan.path.clone(),
            line,
        });
    }

    fn warn(&mut self, line: usize, message: impl Into<String>) {
        let err = ScanError::scan_logic_error(self.scan.path.clone(), line, message);
        debug!("{}", err);
        self.scan.warnings.push(err);
    }
}

/// `type Empty struct {}` and `type P struct { X int }` end where they start
fn closes_on_same_line(tokens: &[&str]) -> bool {
    tokens.len() > 3 && tokens.last().map_or(false, |t| t.ends_with('}'))
}

/// Name of a function introduction line: the second token cut at its first `(`
///
/// A receiver list such as `func (s *Server) Run()` leaves nothing before the
/// `(`, so the line yields no name.
fn function_name(tokens: &[&str]) -> Option<String> {
    let second = *tokens.get(1)?;
    let name = second.find('(').map_or(second, |idx| &second[..idx]);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Extract declarations from the file at `path`
pub fn extract_path(path: impl Into<PathBuf>) -> Result<FileScan> {
    DeclarationExtractor::extract_file(&path.into())
}
