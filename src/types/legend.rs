//! Named intensities for occupancy-grid maps.
//!
//! Map images conventionally encode obstacles as 0, unexplored space as 205
//! and free space as 254. The legend is only used to name ranges in reports
//! and output files; nothing enforces it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Range;

pub const OBSTACLE: u8 = 0;
pub const UNKNOWN: u8 = 205;
pub const FREE: u8 = 254;

/// Mapping from region name to the intensity that marks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Legend {
    entries: BTreeMap<String, u8>,
}

impl Default for Legend {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("obstacle".to_string(), OBSTACLE);
        entries.insert("unknown".to_string(), UNKNOWN);
        entries.insert("free".to_string(), FREE);
        Self { entries }
    }
}

impl Legend {
    /// Name a range by the legend entry it contains.
    ///
    /// With shared boundaries a legend value sitting exactly on a divider
    /// lies in two ranges; the entry is then claimed by whichever range
    /// asks first. When several entries fall in one range the lowest
    /// intensity wins. Ranges without an entry become `range-<index>`.
    pub fn label_for(&self, range: Range, index: usize) -> String {
        self.entries
            .iter()
            .filter(|&(_, &value)| range.contains(value))
            .min_by_key(|&(_, &value)| value)
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| format!("range-{}", index))
    }

    /// Label every range, keeping labels unique.
    pub fn labels(&self, ranges: &[Range]) -> Vec<String> {
        let mut labels: Vec<String> = Vec::with_capacity(ranges.len());
        for (i, range) in ranges.iter().enumerate() {
            let label = self.label_for(*range, i);
            if labels.contains(&label) {
                labels.push(format!("range-{}", i));
            } else {
                labels.push(label);
            }
        }
        labels
    }
}
