use crate::stage::StageResult;
use std::io::Write;

/// Receives every stage result, synchronously and in stage order.
///
/// Sinks observe the chain; they cannot change what it computes.
pub trait StageSink {
    fn record(&mut self, result: &StageResult);
}

/// Discards everything (verbose off).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl StageSink for NoopSink {
    fn record(&mut self, _result: &StageResult) {}
}

/// Writes `LABEL: hex` lines to the wrapped writer.
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StageSink for WriterSink<W> {
    fn record(&mut self, result: &StageResult) {
        if let Err(e) = writeln!(self.out, "{}: {}", result.stage().label(), result.hex()) {
            tracing::warn!(stage = %result.stage(), error = %e, "failed to write verbose output");
        }
    }
}

impl StageSink for Vec<StageResult> {
    fn record(&mut self, result: &StageResult) {
        self.push(result.clone());
    }
}
