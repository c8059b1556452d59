use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info, warn};

use crate::error::BookResult;
use crate::model::Contact;

/// Every stored record carries exactly name, phone and email.
pub const FIELD_COUNT: usize = 3;

/// A stored row that did not have the expected number of fields, or was not
/// valid UTF-8. Invalid bytes in `fields` are replaced with U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub fields: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub contacts: Vec<Contact>,
    pub skipped: Vec<SkippedRow>,
}

/// Reads every record in `path`, in file order.
/// Returns `Ok(None)` when the file does not exist.
pub fn read_all(path: &Path) -> BookResult<Option<ReadOutcome>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no contact file found, starting empty");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut outcome = ReadOutcome::default();
    for result in reader.byte_records() {
        let record = result?;
        if record.len() != FIELD_COUNT {
            let skipped = skipped_row(&record);
            warn!(line = skipped.line, fields = record.len(), "skipping malformed contact row");
            outcome.skipped.push(skipped);
            continue;
        }
        let record = match StringRecord::from_byte_record(record) {
            Ok(record) => record,
            Err(e) => {
                let skipped = skipped_row(&e.into_byte_record());
                warn!(line = skipped.line, "skipping contact row with invalid UTF-8");
                outcome.skipped.push(skipped);
                continue;
            }
        };
        let contact: Contact = record.deserialize(None)?;
        outcome.contacts.push(contact);
    }

    debug!(
        path = %path.display(),
        loaded = outcome.contacts.len(),
        skipped = outcome.skipped.len(),
        "read contact file"
    );
    Ok(Some(outcome))
}

/// Replaces the contents of `path` with one record per contact.
/// Fields are quoted only when they contain a delimiter, quote or line break.
pub fn write_all<'a, I>(path: &Path, contacts: I) -> BookResult<usize>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    let mut written = 0;
    for contact in contacts {
        writer.serialize(contact)?;
        written += 1;
    }
    writer.flush()?;
    debug!(path = %path.display(), written, "wrote contact file");
    Ok(written)
}

fn skipped_row(record: &ByteRecord) -> SkippedRow {
    SkippedRow {
        line: record.position().map(|p| p.line()).unwrap_or(0),
        fields: record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect(),
    }
}
