use crate::evaluation::{CurveError, Measurement, NameRegistry, Vote, VoteSnapshot};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use strum_macros::{Display as StrumDisplay, EnumIter, EnumString};
use tracing::{debug, warn};

/// Rendered in place of a value a row does not hold (or holds as NaN).
pub const MISSING_VALUE: &str = "?";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    StrumDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CurveFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// One row of the curve. Sized to the registry width at insertion time;
/// columns registered later are implicitly absent.
#[derive(Debug, Clone)]
struct Entry {
    values: Vec<Option<f64>>,
}

impl Entry {
    #[inline]
    fn value(&self, column: usize) -> Option<f64> {
        self.values.get(column).copied().flatten()
    }

    #[inline]
    fn ordering_value(&self) -> f64 {
        self.value(0).unwrap_or(f64::NAN)
    }
}

/// History of evaluation measurements, kept sorted by one ordering measurement.
///
/// Every entry is a sparse row aligned to a per-curve [`NameRegistry`] whose
/// position `0` is the ordering measurement. Rows are kept non-decreasing in
/// that column; an entry tying with existing rows is placed in front of them.
///
/// The curve also owns the latest vote snapshot (see [`VoteSnapshot`]).
///
/// History is never pruned: every accepted entry lives as long as the curve.
#[derive(Debug, Clone)]
pub struct LearningCurve {
    measurement_names: NameRegistry,
    entries: Vec<Entry>,
    votes: VoteSnapshot,
}

impl LearningCurve {
    pub fn new<N: Into<String>>(ordering_measurement_name: N) -> Self {
        Self {
            measurement_names: NameRegistry::with_first(ordering_measurement_name),
            entries: Vec::new(),
            votes: VoteSnapshot::default(),
        }
    }

    pub fn ordering_measurement_name(&self) -> &str {
        self.measurement_names.name_at(0).unwrap_or_default()
    }

    /// Adds one row built from `measurements`.
    ///
    /// Fails without touching the curve when no measurement carries the
    /// ordering name. Repeated names within one call keep the last value.
    pub fn insert_entry(&mut self, measurements: &[Measurement]) -> Result<(), CurveError> {
        let ordering = self.ordering_measurement_name();
        if Measurement::named(ordering, measurements).is_none() {
            warn!(
                ordering,
                supplied = measurements.len(),
                "rejecting entry without ordering measurement"
            );
            return Err(CurveError::MissingOrderingMeasurement {
                name: ordering.to_string(),
            });
        }

        let columns: Vec<usize> = measurements
            .iter()
            .map(|m| self.measurement_names.resolve_or_create(&m.name))
            .collect();

        let mut values = vec![None; self.measurement_names.len()];
        for (column, m) in columns.into_iter().zip(measurements) {
            values[column] = Some(m.value);
        }
        let entry = Entry { values };

        let order_value = entry.ordering_value();
        let position = self
            .entries
            .iter()
            .position(|e| order_value.partial_cmp(&e.ordering_value()) != Some(Ordering::Greater))
            .unwrap_or(self.entries.len());

        self.entries.insert(position, entry);
        debug!(
            position,
            order_value,
            width = self.measurement_names.len(),
            entries = self.entries.len(),
            "inserted curve entry"
        );
        Ok(())
    }

    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct measurement names seen so far, ordering one included.
    #[inline]
    pub fn num_measurements(&self) -> usize {
        self.measurement_names.len()
    }

    pub fn measurement_name(&self, index: usize) -> Option<&str> {
        self.measurement_names.name_at(index)
    }

    pub fn measurement_names(&self) -> &[String] {
        self.measurement_names.names()
    }

    /// Stored value at (`entry_index`, `measurement_index`).
    ///
    /// A column the row does not hold reads as NaN.
    pub fn get_measurement(
        &self,
        entry_index: usize,
        measurement_index: usize,
    ) -> Result<f64, CurveError> {
        let entry = self.entry(entry_index)?;
        Ok(entry.value(measurement_index).unwrap_or(f64::NAN))
    }

    pub fn header_to_string(&self) -> String {
        self.measurement_names.join(",")
    }

    pub fn entry_to_string(&self, entry_index: usize) -> Result<String, CurveError> {
        let entry = self.entry(entry_index)?;
        Ok(self.render_entry(entry, ","))
    }

    /// Header followed by every entry, each on a new line indented by `indent` spaces.
    pub fn description(&self, indent: usize) -> String {
        let mut out = self.header_to_string();
        for entry in &self.entries {
            out.push('\n');
            out.extend(std::iter::repeat_n(' ', indent));
            out.push_str(&self.render_entry(entry, ","));
        }
        out
    }

    pub fn set_vote(&mut self, votes: &[Vote]) {
        self.votes.set_vote(votes);
    }

    pub fn vote_header_to_string(&self) -> String {
        self.votes.header_to_string()
    }

    pub fn vote_entry_to_string(&self) -> String {
        self.votes.entry_to_string()
    }

    pub fn votes(&self) -> &VoteSnapshot {
        &self.votes
    }

    pub fn write_to<W: Write>(&self, w: &mut W, fmt: CurveFormat) -> Result<(), CurveError> {
        match fmt {
            CurveFormat::Csv => self.write_with_delimiter(w, ","),
            CurveFormat::Tsv => self.write_with_delimiter(w, "\t"),
            CurveFormat::Json => self.write_json(w),
        }
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), CurveError> {
        let mut w = BufWriter::new(File::create(path.as_ref())?);
        self.write_to(&mut w, fmt)?;
        w.flush()?;
        debug!(path = %path.as_ref().display(), %fmt, entries = self.entries.len(), "exported curve");
        Ok(())
    }

    /// Vote header line followed by the current vote line.
    pub fn write_votes_to<W: Write>(&self, w: &mut W, delimiter: &str) -> Result<(), CurveError> {
        writeln!(w, "{}", self.votes.names().join(delimiter))?;
        writeln!(w, "{}", self.votes.render(delimiter))?;
        Ok(())
    }

    fn entry(&self, entry_index: usize) -> Result<&Entry, CurveError> {
        self.entries
            .get(entry_index)
            .ok_or(CurveError::EntryOutOfRange {
                index: entry_index,
                len: self.entries.len(),
            })
    }

    fn render_entry(&self, entry: &Entry, delimiter: &str) -> String {
        let mut out = String::new();
        for column in 0..self.measurement_names.len() {
            if column > 0 {
                out.push_str(delimiter);
            }
            match entry.value(column) {
                Some(v) if !v.is_nan() => out.push_str(&format_value(v)),
                _ => out.push_str(MISSING_VALUE),
            }
        }
        out
    }

    fn write_with_delimiter<W: Write>(&self, w: &mut W, delimiter: &str) -> Result<(), CurveError> {
        writeln!(w, "{}", self.measurement_names.join(delimiter))?;
        for entry in &self.entries {
            writeln!(w, "{}", self.render_entry(entry, delimiter))?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, w: &mut W) -> Result<(), CurveError> {
        let rows: Vec<Value> = self
            .entries
            .iter()
            .map(|entry| {
                let mut row = Map::new();
                for (column, name) in self.measurement_names.names().iter().enumerate() {
                    let value = match entry.value(column) {
                        Some(v) if !v.is_nan() => Value::from(v),
                        _ => Value::Null,
                    };
                    row.insert(name.clone(), value);
                }
                Value::Object(row)
            })
            .collect();
        serde_json::to_writer_pretty(&mut *w, &Value::Array(rows))?;
        writeln!(w)?;
        Ok(())
    }
}

impl Display for LearningCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description(0))
    }
}

/// Shortest round-trip decimal with a mantissa that always carries a point.
///
/// Magnitudes in `[1e-3, 1e7)` are written plainly (`3.0`, `0.25`); others use
/// `<mantissa>E<exponent>` (`1.0E16`, `3.2E-8`). Infinities are `Infinity` and
/// `-Infinity`.
fn format_value(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = v.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{v:?}");
    }
    let sci = format!("{v:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}
