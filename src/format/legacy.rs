// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The legacy line-oriented save format.
//!
//! Grammar, byte-compatible with the original writer:
//!
//! ```text
//! CLASSLIST_START\n
//! <class count>\n
//! per class:  "<index> <x> <y> <width> <height> \n"   (trailing space)
//!             "<name>\n\n" "<attributes>\n\n"
//!             "<operations>\n\n" "<description>\n\n"
//! CLASSLIST_END\n
//! LINKLIST_BEGIN\n
//! <link count>\n
//! per link:   "<index> <type> <source> <dest> <srcMin> <srcMax>
//!              <destMin> <destMax> \n"
//!             "<label>\n"
//! LINKLIST_END\n
//! ```
//!
//! Free-text class fields are terminated by a blank line, so a field that
//! itself contains a blank line (or ends in a newline) desynchronizes the
//! stream on reload. That is a limitation of the format, surfaced as a
//! parse error, not silently repaired. `export -> parse -> export` is
//! byte-identical.
//!
//! Cardinality sentinels (`-1` unbounded, `-2` unspecified) and link-kind
//! wire codes exist only here; the model carries the tagged forms.

use std::fmt;

use memchr::{memchr, memchr_iter, memmem};
use smallvec::SmallVec;

use crate::model::{Cardinality, ClassRecord, Diagram, LinkKind, LinkRecord};

const CLASSLIST_START: &str = "CLASSLIST_START";
const CLASSLIST_END: &str = "CLASSLIST_END";
const LINKLIST_BEGIN: &str = "LINKLIST_BEGIN";
const LINKLIST_END: &str = "LINKLIST_END";

const CLASS_HEADER_FIELDS: usize = 5;
const LINK_HEADER_FIELDS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyParseError {
    MissingMarker {
        line_no: usize,
        expected: &'static str,
        found: String,
    },
    InvalidCount {
        line_no: usize,
        value: String,
    },
    InvalidRecordHeader {
        line_no: usize,
        expected_fields: usize,
        line: String,
    },
    InvalidInteger {
        line_no: usize,
        value: String,
    },
    UnknownLinkKind {
        line_no: usize,
        code: i32,
    },
    InvalidEndpoint {
        line_no: usize,
        value: i32,
    },
    UnexpectedEnd {
        line_no: usize,
        expected: &'static str,
    },
}

impl fmt::Display for LegacyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMarker {
                line_no,
                expected,
                found,
            } => write!(
                f,
                "expected marker '{expected}' on line {line_no}, found {found:?}"
            ),
            Self::InvalidCount { line_no, value } => {
                write!(f, "invalid record count on line {line_no}: {value:?}")
            }
            Self::InvalidRecordHeader {
                line_no,
                expected_fields,
                line,
            } => write!(
                f,
                "invalid record header on line {line_no}: expected {expected_fields} integer fields, found {line:?}"
            ),
            Self::InvalidInteger { line_no, value } => {
                write!(f, "invalid integer on line {line_no}: {value:?}")
            }
            Self::UnknownLinkKind { line_no, code } => {
                write!(f, "unknown link type code {code} on line {line_no} (expected 0-5)")
            }
            Self::InvalidEndpoint { line_no, value } => {
                write!(f, "negative link endpoint {value} on line {line_no}")
            }
            Self::UnexpectedEnd { line_no, expected } => {
                write!(f, "unexpected end of input on line {line_no} (expected {expected})")
            }
        }
    }
}

impl std::error::Error for LegacyParseError {}

/// Serializes the diagram store into the legacy text format.
pub fn export_diagram(diagram: &Diagram) -> String {
    let mut out = String::new();
    let mut buffer = itoa::Buffer::new();

    out.push_str(CLASSLIST_START);
    out.push('\n');
    out.push_str(buffer.format(diagram.class_count()));
    out.push('\n');
    for class in diagram.classes() {
        push_int_fields(
            &mut out,
            &[
                class.index() as i64,
                i64::from(class.x()),
                i64::from(class.y()),
                i64::from(class.width()),
                i64::from(class.height()),
            ],
        );
        for text in [
            class.name(),
            class.attributes(),
            class.operations(),
            class.description(),
        ] {
            out.push_str(text);
            out.push_str("\n\n");
        }
    }
    out.push_str(CLASSLIST_END);
    out.push('\n');

    out.push_str(LINKLIST_BEGIN);
    out.push('\n');
    out.push_str(buffer.format(diagram.link_count()));
    out.push('\n');
    for link in diagram.links() {
        push_int_fields(
            &mut out,
            &[
                link.index() as i64,
                i64::from(link.kind().code()),
                link.source() as i64,
                link.dest() as i64,
                i64::from(link.source_min().to_legacy()),
                i64::from(link.source_max().to_legacy()),
                i64::from(link.dest_min().to_legacy()),
                i64::from(link.dest_max().to_legacy()),
            ],
        );
        out.push_str(link.label());
        out.push('\n');
    }
    out.push_str(LINKLIST_END);
    out.push('\n');

    out
}

// Every integer field carries a trailing space, including the last one
// before the newline. The original writer did this and the round-trip
// guarantee depends on it.
fn push_int_fields(out: &mut String, fields: &[i64]) {
    let mut buffer = itoa::Buffer::new();
    for value in fields {
        out.push_str(buffer.format(*value));
        out.push(' ');
    }
    out.push('\n');
}

/// Parses the legacy text format into a fresh diagram store.
///
/// All-or-nothing: either the whole input parses and the populated store
/// is returned, or an error is — there is no partially populated result.
/// Content after the final `LINKLIST_END` marker is ignored, as the
/// original reader did.
pub fn parse_diagram(input: &str) -> Result<Diagram, LegacyParseError> {
    let mut reader = Reader::new(input);
    let mut diagram = Diagram::new();

    reader.expect_marker(CLASSLIST_START)?;
    let class_count = reader.count_line()?;
    for _ in 0..class_count {
        let header_line_no = reader.line_no();
        let fields = reader.int_fields(CLASS_HEADER_FIELDS)?;
        // Stored verbatim: after a class removal under the legacy policy
        // the surviving records carry index != position, and that state
        // round-trips through the file.
        let index =
            usize::try_from(fields[0]).map_err(|_| LegacyParseError::InvalidInteger {
                line_no: header_line_no,
                value: fields[0].to_string(),
            })?;
        let name = reader.text_field()?;
        let attributes = reader.text_field()?;
        let operations = reader.text_field()?;
        let description = reader.text_field()?;

        let mut record = ClassRecord::new_with(name, attributes, operations, description);
        record.set_index(index);
        record.set_x(fields[1]);
        record.set_y(fields[2]);
        record.set_width(fields[3]);
        record.set_height(fields[4]);
        diagram.push_class_raw(record);
    }
    reader.expect_marker(CLASSLIST_END)?;

    reader.expect_marker(LINKLIST_BEGIN)?;
    let link_count = reader.count_line()?;
    for _ in 0..link_count {
        let header_line_no = reader.line_no();
        let fields = reader.int_fields(LINK_HEADER_FIELDS)?;
        let kind = LinkKind::from_code(fields[1]).ok_or(LegacyParseError::UnknownLinkKind {
            line_no: header_line_no,
            code: fields[1],
        })?;
        let source = endpoint(fields[2], header_line_no)?;
        let dest = endpoint(fields[3], header_line_no)?;
        let label = reader.label_line()?;

        diagram.push_link_raw(LinkRecord::new_with(
            kind,
            source,
            dest,
            Cardinality::from_legacy(fields[4]),
            Cardinality::from_legacy(fields[5]),
            Cardinality::from_legacy(fields[6]),
            Cardinality::from_legacy(fields[7]),
            label,
        ));
    }
    reader.expect_marker(LINKLIST_END)?;

    Ok(diagram)
}

fn endpoint(value: i32, line_no: usize) -> Result<usize, LegacyParseError> {
    usize::try_from(value).map_err(|_| LegacyParseError::InvalidEndpoint { line_no, value })
}

/// Cursor over the input that switches between the format's three
/// delimiter disciplines: single-newline lines, space-separated integer
/// headers, and blank-line-terminated free text.
struct Reader<'a> {
    rest: &'a str,
    line_no: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            line_no: 1,
        }
    }

    fn line_no(&self) -> usize {
        self.line_no
    }

    fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match memchr(b'\n', self.rest.as_bytes()) {
            Some(pos) => {
                let line = &self.rest[..pos];
                self.rest = &self.rest[pos + 1..];
                line
            }
            None => {
                let line = self.rest;
                self.rest = "";
                line
            }
        };
        self.line_no += 1;
        Some(line)
    }

    fn expect_marker(&mut self, expected: &'static str) -> Result<(), LegacyParseError> {
        let line_no = self.line_no;
        let Some(line) = self.next_line() else {
            return Err(LegacyParseError::UnexpectedEnd {
                line_no,
                expected,
            });
        };
        if line.trim() != expected {
            return Err(LegacyParseError::MissingMarker {
                line_no,
                expected,
                found: line.to_owned(),
            });
        }
        Ok(())
    }

    fn count_line(&mut self) -> Result<usize, LegacyParseError> {
        let line_no = self.line_no;
        let Some(line) = self.next_line() else {
            return Err(LegacyParseError::UnexpectedEnd {
                line_no,
                expected: "record count",
            });
        };
        line.trim()
            .parse::<usize>()
            .map_err(|_| LegacyParseError::InvalidCount {
                line_no,
                value: line.to_owned(),
            })
    }

    fn int_fields(&mut self, expected_fields: usize) -> Result<SmallVec<[i32; 8]>, LegacyParseError> {
        let line_no = self.line_no;
        let Some(line) = self.next_line() else {
            return Err(LegacyParseError::UnexpectedEnd {
                line_no,
                expected: "record header",
            });
        };

        let mut fields = SmallVec::new();
        for token in line.split_whitespace() {
            let value = token
                .parse::<i32>()
                .map_err(|_| LegacyParseError::InvalidInteger {
                    line_no,
                    value: token.to_owned(),
                })?;
            fields.push(value);
        }
        if fields.len() != expected_fields {
            return Err(LegacyParseError::InvalidRecordHeader {
                line_no,
                expected_fields,
                line: line.to_owned(),
            });
        }
        Ok(fields)
    }

    /// A free-text class field, terminated by a blank line.
    fn text_field(&mut self) -> Result<&'a str, LegacyParseError> {
        match memmem::find(self.rest.as_bytes(), b"\n\n") {
            Some(pos) => {
                let field = &self.rest[..pos];
                self.line_no += memchr_iter(b'\n', field.as_bytes()).count() + 2;
                self.rest = &self.rest[pos + 2..];
                Ok(field)
            }
            None => Err(LegacyParseError::UnexpectedEnd {
                line_no: self.line_no,
                expected: "text field terminated by a blank line",
            }),
        }
    }

    fn label_line(&mut self) -> Result<&'a str, LegacyParseError> {
        let line_no = self.line_no;
        self.next_line()
            .ok_or(LegacyParseError::UnexpectedEnd {
                line_no,
                expected: "link label",
            })
    }
}
