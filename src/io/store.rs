//! File-backed record store
//!
//! Owns the single ledger file: creating it with its header, appending one
//! line per transaction, and loading every stored transaction back.
//!
//! # Load Policy
//!
//! Loading distinguishes two kinds of bad rows:
//! - Rows with fewer than five fields are skipped silently (logged at debug)
//! - Rows whose date, type, or amount cannot be parsed abort the load with a
//!   `ParseError` naming the line
//!
//! An I/O failure part-way through a read is reported on stderr and whatever
//! was parsed up to that point is returned, so reports still render.
//!
//! # Concurrency
//!
//! No locking is performed. Two processes appending at once may interleave.

use crate::io::csv_format::{self, convert_csv_record, normalize_record, CsvRecord};
use crate::types::{LedgerError, Transaction};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Append-only ledger file
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store handle for the given path
    ///
    /// Does not touch the filesystem; call [`RecordStore::ensure_initialized`]
    /// before reading or appending.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the store with its header line if it does not exist yet
    ///
    /// An existing but empty file also receives the header, otherwise its
    /// first data line would later be skipped as the header.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be created or written.
    pub fn ensure_initialized(&self) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LedgerError::io(
                    &format!("Could not create file '{}'", self.path.display()),
                    e,
                )
            })?;

        let len = file
            .metadata()
            .map_err(|e| {
                LedgerError::io(&format!("Could not inspect '{}'", self.path.display()), e)
            })?
            .len();

        if len == 0 {
            csv_format::write_header(&mut file)?;
            debug!("created store at {}", self.path.display());
        }
        Ok(())
    }

    /// Append one transaction as a single line
    ///
    /// Existing content is never rewritten.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be opened or written.
    pub fn append(&self, tx: &Transaction) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LedgerError::io(
                    &format!("Could not open '{}' for append", self.path.display()),
                    e,
                )
            })?;

        csv_format::write_transaction(tx, &mut file)?;
        debug!(
            "appended {} {} to {}",
            tx.tx_type,
            tx.amount,
            self.path.display()
        );
        Ok(())
    }

    /// Load every stored transaction in file order
    ///
    /// The first line is always treated as the header and skipped.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for the first complete row whose values are
    /// corrupt. Read failures are not errors; see the module docs.
    pub fn load_all(&self) -> Result<Vec<Transaction>, LedgerError> {
        let mut transactions = Vec::new();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Read error: {}", e);
                warn!("could not open {}: {}", self.path.display(), e);
                return Ok(transactions);
            }
        };

        // Trimmed per field in normalize_record
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(Trim::None)
            .from_reader(file);

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                    eprintln!("Read error: {}", e);
                    warn!("read of {} stopped early: {}", self.path.display(), e);
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            let line = record.position().map(|pos| pos.line());

            let Some(normalized) = normalize_record(&record) else {
                debug!(
                    "skipping short row at line {}: '{}'",
                    line.unwrap_or_default(),
                    csv_format::record_content(&record)
                );
                continue;
            };

            let csv_record: CsvRecord = normalized.deserialize(None).map_err(|e| {
                LedgerError::parse(line, &csv_format::record_content(&record), e.to_string())
            })?;

            transactions.push(convert_csv_record(csv_record, line)?);
        }

        debug!(
            "loaded {} transactions from {}",
            transactions.len(),
            self.path.display()
        );
        Ok(transactions)
    }
}
