//! CSV ingestion of OHLCV price records.
//!
//! A source is a CSV document whose first record is the header
//! `open,high,low,close,volume` (case-insensitive, in this order), followed
//! by rows of exactly five numeric cells. Row order is chronological order.
//!
//! Ingestion is all-or-nothing: the first malformed header, row or cell
//! aborts it, and no records read before the failure are returned.

use std::{fs::File, io, iter::FusedIterator, path::Path};

use csv::{ByteRecord, ReaderBuilder, Trim};
use tracing::{debug, info, warn};

use crate::{Column, LoadError, PriceRecord, PriceSeries, StreamConfig, WindowStream};

#[derive(Debug)]
enum Header {
    Unread,
    Valid,
    Invalid(Vec<String>),
}

/// A CSV price source that has not been drained yet.
///
/// Read the header with [`read_header`](CsvSource::read_header) (optional),
/// then consume the data rows through [`rows`](CsvSource::rows).
#[derive(Debug)]
pub struct CsvSource<R> {
    reader: csv::Reader<R>,
    header: Header,
}

impl CsvSource<File> {
    /// Opens a CSV file for reading.
    ///
    /// # Errors
    ///
    /// [`LoadError::SourceUnavailable`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening price source");

        let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: io::Read> CsvSource<R> {
    /// Wraps any reader, e.g. an in-memory buffer.
    pub fn from_reader(reader: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(reader);

        Self {
            reader,
            header: Header::Unread,
        }
    }

    /// Reads and validates the header record.
    ///
    /// Once the header has been read, further calls return the same verdict
    /// without consuming more input.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Schema`] if the source is empty or the header does not
    ///   name exactly `open, high, low, close, volume` in that order.
    /// - [`LoadError::Csv`] if the reader fails.
    pub fn read_header(&mut self) -> Result<(), LoadError> {
        if let Header::Unread = self.header {
            let mut record = ByteRecord::new();
            let found: Vec<String> = if self.reader.read_byte_record(&mut record)? {
                record
                    .iter()
                    .map(|cell| String::from_utf8_lossy(cell).into_owned())
                    .collect()
            } else {
                Vec::new()
            };

            self.header = if is_valid_header(&found) {
                debug!("price source header accepted");
                Header::Valid
            } else {
                Header::Invalid(found)
            };
        }

        match &self.header {
            Header::Invalid(found) => Err(LoadError::Schema {
                found: found.clone(),
            }),
            Header::Valid | Header::Unread => Ok(()),
        }
    }

    /// Validates the header if not done yet and returns the lazy sequence of
    /// parsed data rows.
    ///
    /// # Errors
    ///
    /// Same as [`read_header`](CsvSource::read_header).
    pub fn rows(mut self) -> Result<Rows<R>, LoadError> {
        self.read_header()?;

        Ok(Rows {
            reader: self.reader,
            record: ByteRecord::new(),
            row: 0,
            done: false,
        })
    }
}

/// Forward-only iterator over the data rows of a [`CsvSource`].
///
/// Yields one parsed [`PriceRecord`] per row. Stops for good after the end of
/// the source or after the first error; it cannot be resumed.
#[derive(Debug)]
pub struct Rows<R> {
    reader: csv::Reader<R>,
    record: ByteRecord,
    row: u64,
    done: bool,
}

impl<R: io::Read> Iterator for Rows<R> {
    type Item = Result<PriceRecord, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = match self.reader.read_byte_record(&mut self.record) {
            Ok(true) => {
                self.row += 1;
                parse_row(self.row, &self.record)
            }
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(e) => Err(e.into()),
        };

        self.done = item.is_err();
        Some(item)
    }
}

impl<R: io::Read> FusedIterator for Rows<R> {}

/// Converts one raw data row into a [`PriceRecord`].
///
/// `row` is the 1-based data row number reported in errors.
///
/// # Errors
///
/// - [`LoadError::RowLength`] unless the row has exactly five cells.
/// - [`LoadError::Parse`] for the first cell that is not numeric text,
///   invalid UTF-8 included.
pub fn parse_row(row: u64, record: &ByteRecord) -> Result<PriceRecord, LoadError> {
    if record.len() != Column::COUNT {
        return Err(LoadError::RowLength {
            row,
            found: record.len(),
        });
    }

    let mut values = [0.0; Column::COUNT];
    for ((column, cell), value) in Column::ALL.into_iter().zip(record).zip(&mut values) {
        *value = std::str::from_utf8(cell)
            .ok()
            .and_then(|token| token.parse::<f64>().ok())
            .ok_or_else(|| LoadError::Parse {
                row,
                column,
                token: String::from_utf8_lossy(cell).into_owned(),
            })?;
    }

    Ok(PriceRecord::from_values(values))
}

/// Loads the whole CSV file at `path` into a [`PriceSeries`].
///
/// # Errors
///
/// Any [`LoadError`]; no series is returned on failure.
pub fn load_series(path: impl AsRef<Path>) -> Result<PriceSeries, LoadError> {
    let path = path.as_ref();
    let series = ingest(CsvSource::open(path)?, Some(path))?;

    info!(path = %path.display(), records = series.len(), "loaded price series");
    Ok(series)
}

/// Reads a whole CSV document from `reader` into a [`PriceSeries`].
///
/// # Errors
///
/// Any [`LoadError`] except [`LoadError::SourceUnavailable`].
pub fn read_series<R: io::Read>(reader: R) -> Result<PriceSeries, LoadError> {
    let series = ingest(CsvSource::from_reader(reader), None)?;

    info!(records = series.len(), "loaded price series");
    Ok(series)
}

/// Loads `path` and replays it with the default window length.
///
/// # Errors
///
/// Same as [`load_series`].
pub fn load_stream(path: impl AsRef<Path>) -> Result<WindowStream, LoadError> {
    load_series(path).map(|series| WindowStream::new(series, StreamConfig::default()))
}

fn ingest<R: io::Read>(
    source: CsvSource<R>,
    path: Option<&Path>,
) -> Result<PriceSeries, LoadError> {
    source
        .rows()
        .and_then(|rows| rows.collect())
        .inspect_err(|error| warn!(?path, %error, "price source rejected"))
}

fn is_valid_header(found: &[String]) -> bool {
    found.len() == Column::COUNT
        && Column::ALL
            .iter()
            .zip(found)
            .all(|(column, token)| column.matches(token))
}
