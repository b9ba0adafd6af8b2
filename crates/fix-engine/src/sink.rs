//! Output boundary for correlated fills

use fix_types::{FillRecord, FixResult};

/// Destination for fill records
///
/// Records arrive in correlation order. `finish` is called once after the
/// last record so buffered writers can flush.
pub trait FillSink {
    /// Accept one record
    fn emit(&mut self, record: &FillRecord) -> FixResult<()>;

    /// Flush any buffered output
    fn finish(&mut self) -> FixResult<()> {
        Ok(())
    }
}

impl FillSink for Vec<FillRecord> {
    fn emit(&mut self, record: &FillRecord) -> FixResult<()> {
        self.push(record.clone());
        Ok(())
    }
}

impl<S: FillSink + ?Sized> FillSink for &mut S {
    fn emit(&mut self, record: &FillRecord) -> FixResult<()> {
        (**self).emit(record)
    }

    fn finish(&mut self) -> FixResult<()> {
        (**self).finish()
    }
}

impl<S: FillSink + ?Sized> FillSink for Box<S> {
    fn emit(&mut self, record: &FillRecord) -> FixResult<()> {
        (**self).emit(record)
    }

    fn finish(&mut self) -> FixResult<()> {
        (**self).finish()
    }
}
