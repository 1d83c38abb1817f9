//! Diagram construction: turns signal entries into stacked step-plot lanes.
//!
//! Building is a pure transform. Every lane is computed before a [`Diagram`]
//! is returned, so a malformed sequence anywhere yields an error and no
//! partial diagram.

use crate::data::registry::SignalEntry;
use crate::error::DiagramError;

/// Vertical distance between consecutive lane baselines.
pub const LANE_HEIGHT: f64 = 2.0;

pub const X_AXIS_LABEL: &str = "Time";
pub const Y_AXIS_LABEL: &str = "Signals";

/// One signal drawn in its own vertical slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub name: String,
    /// Lane index, equal to the entry's position in the snapshot.
    pub index: usize,
    /// `index * LANE_HEIGHT`.
    pub baseline: f64,
    /// One sample per character: `0..len`.
    pub time: Vec<usize>,
    /// Each character parsed as a decimal digit, not clamped to 0/1.
    pub values: Vec<u32>,
    /// `values[i] + baseline`.
    pub plotted: Vec<f64>,
}

impl Lane {
    fn build(index: usize, entry: &SignalEntry) -> Result<Self, DiagramError> {
        let values = parse_digits(&entry.name, &entry.sequence)?;
        let baseline = index as f64 * LANE_HEIGHT;
        let plotted = values.iter().map(|&v| v as f64 + baseline).collect();
        Ok(Self {
            name: entry.name.clone(),
            index,
            baseline,
            time: (0..values.len()).collect(),
            values,
            plotted,
        })
    }

    /// The raw samples as `[time, plotted]` pairs.
    pub fn sample_points(&self) -> Vec<[f64; 2]> {
        self.time
            .iter()
            .zip(&self.plotted)
            .map(|(&t, &y)| [t as f64, y])
            .collect()
    }

    /// Polyline of the step curve with "post" interpolation: each value holds
    /// from its own sample until the next sample, where the line jumps.
    /// The curve ends at the last sample; nothing is extended past it.
    pub fn step_points(&self) -> Vec<[f64; 2]> {
        let samples = self.sample_points();
        let mut out = Vec::with_capacity(samples.len() * 2);
        for (i, p) in samples.iter().enumerate() {
            out.push(*p);
            if let Some(next) = samples.get(i + 1) {
                out.push([next[0], p[1]]);
            }
        }
        out
    }
}

/// A fully built timing diagram ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub lanes: Vec<Lane>,
    pub x_label: String,
    pub y_label: String,
}

impl Diagram {
    /// Build all lanes from `entries` in order. Fails on the first sequence
    /// holding a non-digit character.
    ///
    /// Sequences of different lengths are accepted as-is: every lane keeps
    /// its own x-range with no padding or truncation.
    pub fn build(entries: &[SignalEntry]) -> Result<Self, DiagramError> {
        let lanes = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Lane::build(index, entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            lanes,
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
        })
    }

    /// Y-axis tick positions, one per lane at its baseline.
    pub fn y_ticks(&self) -> Vec<f64> {
        self.lanes.iter().map(|l| l.baseline).collect()
    }

    /// Y-axis tick labels, the signal names in lane order.
    pub fn y_tick_labels(&self) -> Vec<String> {
        self.lanes.iter().map(|l| l.name.clone()).collect()
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }
}

/// Only ASCII `0`..=`9` are digits; other Unicode decimal digits are rejected.
fn parse_digits(signal: &str, sequence: &str) -> Result<Vec<u32>, DiagramError> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10).ok_or_else(|| DiagramError::InvalidDigit {
                signal: signal.to_string(),
                position,
                found: c,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits_accepts_all_decimal_digits() {
        assert_eq!(
            parse_digits("s", "0123456789").unwrap(),
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn parse_digits_reports_first_bad_position() {
        let err = parse_digits("BUS", "01x1y").unwrap_err();
        assert_eq!(
            err,
            DiagramError::InvalidDigit {
                signal: "BUS".into(),
                position: 2,
                found: 'x'
            }
        );
    }

    #[test]
    fn parse_digits_rejects_non_ascii_digits() {
        let err = parse_digits("s", "\u{0663}1").unwrap_err();
        assert_eq!(
            err,
            DiagramError::InvalidDigit {
                signal: "s".into(),
                position: 0,
                found: '\u{0663}'
            }
        );
    }

    #[test]
    fn parse_digits_rejects_whitespace() {
        assert!(parse_digits("s", "0 1").is_err());
        assert!(parse_digits("s", " 01").is_err());
    }
}
