//! JSON Lines trace of acknowledged steps.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::warn;

use sortanim_core::{Step, StepEvent, StepObserver};

#[derive(Serialize)]
struct TraceRecord<'a> {
    seq: u64,
    step: &'a Step,
}

/// Writes one `{"seq": n, "step": {...}}` object per line.
///
/// The buffer is flushed after every `Done` step and on drop.
pub struct TraceObserver {
    writer: Mutex<BufWriter<File>>,
}

impl TraceObserver {
    /// Create (or truncate) the trace file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Flush buffered records to the file.
    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }

    fn write_record(&self, event: &StepEvent) -> io::Result<()> {
        let mut writer = self.writer.lock();
        let record = TraceRecord {
            seq: event.seq,
            step: &event.step,
        };
        serde_json::to_writer(&mut *writer, &record)?;
        writer.write_all(b"\n")?;
        if matches!(event.step, Step::Done { .. }) {
            writer.flush()?;
        }
        Ok(())
    }
}

impl StepObserver for TraceObserver {
    fn on_step(&self, event: &StepEvent) {
        if let Err(e) = self.write_record(event) {
            warn!(error = %e, seq = event.seq, "failed to write step trace");
        }
    }
}
