// File: crates/chart-core/src/legend.rs
// Summary: Text legend (label + swatch color) built from the donut segment set.

use std::fmt;

use crate::color::ColorSpec;
use crate::donut::Segment;

pub const LEGEND_COLUMNS: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: ColorSpec,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub columns: usize,
}

impl Legend {
    /// One entry per segment, in draw order.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let entries = segments
            .iter()
            .map(|s| LegendEntry { label: s.label.clone(), swatch: s.color })
            .collect();
        Self { entries, columns: LEGEND_COLUMNS }
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, LegendEntry> {
        self.entries.chunks(self.columns.max(1))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|e| format!("[{}] {:<width$}", e.swatch, e.label, width = width))
                .collect();
            write!(f, "{}", cells.join("  ").trim_end())?;
        }
        Ok(())
    }
}
