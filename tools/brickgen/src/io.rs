use std::io::{BufWriter, Write};

use anyhow::Context;

use crate::record::JsonRecord;

/// Line-oriented JSON sink for generated puzzles.
pub struct RecordWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
        }
    }

    pub fn write(&mut self, rec: &JsonRecord<'_>) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, rec)
            .with_context(|| format!("serializing puzzle {}", rec.id))?;
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        self.writer.flush().context("flushing output")
    }
}
