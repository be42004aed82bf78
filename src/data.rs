//! Data loading and segment filtering using Polars

use anyhow::Context;
use polars::prelude::*;

/// Name of the required churn probability column
pub const COL_CHURN_PROBABILITY: &str = "churn_probability";
/// Name of the optional risk segment column
pub const COL_SEGMENT: &str = "segment";
/// Name of the optional average order value column
pub const COL_AVG_ORDER_VALUE: &str = "avg_order_value";
/// Name of the optional purchase count column
pub const COL_PURCHASE_COUNT: &str = "purchase_count";

/// Sentinel segment selection meaning "no filter"
pub const SEGMENT_ALL: &str = "All";

/// Segment labels offered by the upstream churn forecast. The segment
/// column is an open set; unknown labels filter like any other.
pub const KNOWN_SEGMENTS: [&str; 3] = ["Reliable", "At Risk", "High Risk"];

/// One row of the churn forecast
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    /// Estimated probability the customer churns, expected in [0, 1]
    pub churn_probability: f64,
    /// Risk segment label, if the column is present
    pub segment: Option<String>,
    /// Average order value, if the column is present
    pub avg_order_value: Option<f64>,
    /// Number of purchases, if the column is present
    pub purchase_count: Option<i64>,
}

/// An ordered, immutable snapshot of one CSV load
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Records in input order
    pub records: Vec<CustomerRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive the view of records whose segment matches `selection`.
    ///
    /// The sentinel [`SEGMENT_ALL`] returns the dataset unchanged. The
    /// underlying dataset is never mutated; an empty result is not an
    /// error.
    pub fn filter_segment(&self, selection: &str) -> Dataset {
        if selection == SEGMENT_ALL {
            return self.clone();
        }

        Dataset {
            records: self
                .records
                .iter()
                .filter(|r| r.segment.as_deref() == Some(selection))
                .cloned()
                .collect(),
        }
    }
}

/// Load a churn forecast CSV into a [`Dataset`]
///
/// # Arguments
/// * `file_path` - Path to the CSV file (header row required)
///
/// # Returns
/// * `Dataset` with one record per input row, in input order
///
/// The churn probability column must be present and fully populated;
/// the segment, average order value, and purchase count columns are
/// optional and load as `None` when absent.
pub fn load_dataset(file_path: &str) -> crate::Result<Dataset> {
    let df = CsvReader::from_path(file_path)
        .with_context(|| format!("failed to open {}", file_path))?
        .has_header(true)
        .finish()
        .with_context(|| format!("failed to parse {}", file_path))?;

    let Ok(churn_col) = df.column(COL_CHURN_PROBABILITY) else {
        anyhow::bail!(
            "input file must contain a '{}' column",
            COL_CHURN_PROBABILITY
        );
    };

    let churn_col = churn_col
        .cast(&DataType::Float64)
        .with_context(|| format!("column '{}' is not numeric", COL_CHURN_PROBABILITY))?;
    let churn = churn_col.f64()?;

    let missing = churn.null_count();
    if missing > 0 {
        anyhow::bail!(
            "column '{}' has {} empty value(s); a churn probability is required for every row",
            COL_CHURN_PROBABILITY,
            missing
        );
    }

    let churn_values: Vec<f64> = churn.into_no_null_iter().collect();
    let n_rows = churn_values.len();

    let segments = load_optional_utf8(&df, COL_SEGMENT, n_rows)?;
    let order_values = load_optional_f64(&df, COL_AVG_ORDER_VALUE, n_rows)?;
    let purchase_counts = load_optional_i64(&df, COL_PURCHASE_COUNT, n_rows)?;

    let records = churn_values
        .into_iter()
        .zip(segments)
        .zip(order_values)
        .zip(purchase_counts)
        .map(
            |(((churn_probability, segment), avg_order_value), purchase_count)| CustomerRecord {
                churn_probability,
                segment,
                avg_order_value,
                purchase_count,
            },
        )
        .collect();

    Ok(Dataset { records })
}

fn load_optional_utf8(
    df: &DataFrame,
    name: &str,
    n_rows: usize,
) -> crate::Result<Vec<Option<String>>> {
    match df.column(name) {
        Ok(col) => {
            let col = col
                .cast(&DataType::Utf8)
                .with_context(|| format!("column '{}' is not text", name))?;
            Ok(col
                .utf8()?
                .into_iter()
                .map(|v| v.map(String::from))
                .collect())
        }
        Err(_) => Ok(vec![None; n_rows]),
    }
}

fn load_optional_f64(
    df: &DataFrame,
    name: &str,
    n_rows: usize,
) -> crate::Result<Vec<Option<f64>>> {
    match df.column(name) {
        Ok(col) => {
            let col = col
                .cast(&DataType::Float64)
                .with_context(|| format!("column '{}' is not numeric", name))?;
            Ok(col.f64()?.into_iter().collect())
        }
        Err(_) => Ok(vec![None; n_rows]),
    }
}

fn load_optional_i64(
    df: &DataFrame,
    name: &str,
    n_rows: usize,
) -> crate::Result<Vec<Option<i64>>> {
    match df.column(name) {
        Ok(col) => {
            let col = col
                .cast(&DataType::Int64)
                .with_context(|| format!("column '{}' is not an integer", name))?;
            Ok(col.i64()?.into_iter().collect())
        }
        Err(_) => Ok(vec![None; n_rows]),
    }
}
