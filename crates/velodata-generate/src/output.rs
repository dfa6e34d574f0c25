use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use velodata_core::{CSV_HEADER, RentalRecord, TIMESTAMP_FORMAT};

/// Write the dataset as header plus one comma-separated row per record.
///
/// Any existing file at `path` is truncated. Returns the bytes written.
pub fn write_rentals_csv(path: &Path, records: &[RentalRecord]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.write_record(&csv_row(record))?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

fn csv_row(record: &RentalRecord) -> [String; 10] {
    [
        record.rental_id.to_string(),
        record.user_id.to_string(),
        record.age.to_string(),
        record.gender.to_string(),
        record.start_time.format(TIMESTAMP_FORMAT).to_string(),
        record.end_time.format(TIMESTAMP_FORMAT).to_string(),
        record.start_station.to_string(),
        record.end_station.to_string(),
        record.duration_minutes.to_string(),
        format!("{:.2}", record.price),
    ]
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
