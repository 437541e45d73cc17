use serde::Serialize;
use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceExportError {
    #[error("Failed to write energy trace: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to create trace file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Serialize)]
struct TraceRecord {
    frame: u64,
    energy: f64,
}

/// Rolling window of per-frame energy samples. The window is display-bound:
/// it holds at most one sample per chart pixel column, dropping the oldest
/// on overflow. Not a source of truth.
#[derive(Debug, Clone)]
pub struct EnergyTrace {
    samples: VecDeque<f64>,
    capacity: usize,
    dropped: u64,
}

impl EnergyTrace {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn push(&mut self, sample: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
            self.dropped += 1;
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Absolute frame index of the first retained sample.
    pub fn start_frame(&self) -> u64 {
        self.dropped
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Writes the retained samples as `frame,energy` CSV records.
    pub fn export<W: Write>(&self, writer: W) -> Result<(), TraceExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (offset, energy) in self.samples.iter().enumerate() {
            csv_writer.serialize(TraceRecord {
                frame: self.dropped + offset as u64,
                energy: *energy,
            })?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn export_to_path(&self, path: &Path) -> Result<(), TraceExportError> {
        let file = std::fs::File::create(path).map_err(|e| TraceExportError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        self.export(file)
    }
}
