//! Output writers for planned schedules.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::schedule::{CsvSummaryRow, ScheduledRound};
use crate::types::OutputFormat;

pub struct OutputWriter {
    round_writer: Box<dyn Write + Send>,
    format: OutputFormat,
    buffered: Vec<ScheduledRound>,
    csv_writer: csv::Writer<BufWriter<File>>,
    rounds_path: PathBuf,
    csv_path: PathBuf,
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

impl OutputWriter {
    pub fn new(
        output_dir: &Path,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let filename = format!("schedule_{timestamp}.{extension}");

        let (round_writer, rounds_path): (Box<dyn Write + Send>, PathBuf) = if compress {
            let gz_path = output_dir.join(format!("{filename}.gz"));
            let writer = BufWriter::new(GzEncoder::new(
                File::create(&gz_path)?,
                Compression::default(),
            ));
            (Box::new(writer), gz_path)
        } else {
            let path = output_dir.join(&filename);
            let writer = BufWriter::new(create_truncated(&path)?);
            (Box::new(writer), path)
        };

        // Always create CSV summary
        let csv_path = output_dir.join(format!("schedule_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));

        Ok(Self {
            round_writer,
            format: format.clone(),
            buffered: Vec::new(),
            csv_writer,
            rounds_path,
            csv_path,
        })
    }

    pub fn write_round(&mut self, round: &ScheduledRound) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(round)?;
                writeln!(self.round_writer, "{json}")?;
            }
            OutputFormat::Json => self.buffered.push(round.clone()),
        }

        let row = CsvSummaryRow::from(round);
        self.csv_writer.serialize(&row)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if matches!(self.format, OutputFormat::Json) {
            serde_json::to_writer_pretty(&mut self.round_writer, &self.buffered)?;
            writeln!(self.round_writer)?;
        }
        self.round_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.rounds_path, &self.csv_path)
    }
}
