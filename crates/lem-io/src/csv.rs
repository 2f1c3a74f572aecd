//! CSV output backend.
//!
//! One row per move with header `turn,ant,room`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::MoveWriter;
use crate::{MoveRow, OutputError, OutputResult};

const HEADER: [&str; 3] = ["turn", "ant", "room"];

/// Writes move rows to CSV.
pub struct CsvMoveWriter<W: Write = File> {
    writer:   Writer<W>,
    finished: bool,
}

impl CsvMoveWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvMoveWriter<W> {
    /// Write the header row to `inner`.
    pub fn from_writer(inner: W) -> OutputResult<Self> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self {
            writer,
            finished: false,
        })
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> MoveWriter for CsvMoveWriter<W> {
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
