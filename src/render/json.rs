//! Newline-delimited JSON record sink.

use crate::error::Result;
use crate::model::Record;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Write records as newline-delimited JSON.
///
/// One compact object per line, in the given order. Non-ASCII text is
/// written as-is. Returns the number of records written.
pub fn write_jsonl<'a, W, I>(records: I, writer: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut writer = BufWriter::new(writer);
    let mut count = 0;
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Write records to a JSONL file, replacing any existing file.
pub fn save_jsonl<'a, P, I>(records: I, path: P) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Record>,
{
    let file = File::create(path.as_ref())?;
    let count = write_jsonl(records, file)?;
    log::info!("Saved {} records to {}", count, path.as_ref().display());
    Ok(count)
}

/// Render records to a JSONL string.
pub fn to_jsonl<'a, I>(records: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut buf = Vec::new();
    write_jsonl(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| crate::Error::Other(e.to_string()))
}

/// Read records from newline-delimited JSON, skipping blank lines.
pub fn read_jsonl<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}
