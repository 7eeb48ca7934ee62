use std::fmt;

// ---------------------------------------------------------------------------
// PriceRecord – one validated row of a price list
// ---------------------------------------------------------------------------

/// A single product position taken from a price-list file.
///
/// Only constructed after every field has parsed, so `weight` is never zero
/// and `unit_price` always equals `price / weight`. Fields are private, so
/// [`PriceRecord::new`] is the only way to build one:
///
/// ```compile_fail
/// use price_machine::data::model::PriceRecord;
///
/// let rec = PriceRecord {
///     name: "Salt".into(),
///     price: 1.0,
///     weight: 0.0,
///     source_file: "price.csv".into(),
///     unit_price: 0.0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    /// Trimmed product name.
    name: String,
    /// Package price.
    price: f64,
    /// Package weight in kilograms – never zero.
    weight: f64,
    /// Base name of the file the row came from.
    source_file: String,
    /// `price / weight`, computed once at ingestion.
    unit_price: f64,
}

impl PriceRecord {
    /// Build a record, deriving the unit price.
    ///
    /// Returns `None` for a zero weight.
    pub fn new(name: impl Into<String>, price: f64, weight: f64, source_file: impl Into<String>) -> Option<Self> {
        if weight == 0.0 {
            return None;
        }
        Some(Self {
            name: name.into(),
            price,
            weight,
            source_file: source_file.into(),
            unit_price: price / weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// `price / weight` as stored at ingestion.
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }
}

// ---------------------------------------------------------------------------
// LoadStats – counters collected while scanning a directory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Regular files whose name carried the marker.
    pub files_matched: usize,
    /// Files that contributed their rows.
    pub files_loaded: usize,
    /// Files dropped for missing columns or read errors.
    pub files_skipped: usize,
    /// Data rows rejected as short, non-numeric or zero-weight.
    pub rows_skipped: usize,
}

impl fmt::Display for LoadStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} matched, {} loaded, {} skipped files, {} skipped rows",
            self.files_matched, self.files_loaded, self.files_skipped, self.rows_skipped
        )
    }
}

// ---------------------------------------------------------------------------
// PriceCatalog – the complete loaded collection
// ---------------------------------------------------------------------------

/// All records in load order (files sorted by name, then row order).
///
/// Built once by the loader and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    records: Vec<PriceRecord>,
    stats: LoadStats,
}

impl PriceCatalog {
    pub fn from_records(records: Vec<PriceRecord>, stats: LoadStats) -> Self {
        PriceCatalog { records, stats }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
