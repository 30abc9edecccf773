//! Duplicate-key detection over scanned flags.
//!
//! Detection is purely a report: nothing here rewrites or drops lines.

use std::collections::HashMap;

use serde::Serialize;

use crate::{FlagValue, ScannedFlag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub line: usize,
    pub value: FlagValue,
}

/// A flag name assigned more than once within one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub name: String,
    /// In line order; always at least two entries.
    pub occurrences: Vec<Occurrence>,
}

impl Duplicate {
    /// True when the repeated assignments disagree.
    pub fn is_conflict(&self) -> bool {
        self.occurrences
            .windows(2)
            .any(|pair| pair[0].value != pair[1].value)
    }

    /// Value a last-one-wins reader ends up with.
    pub fn effective(&self) -> Option<&FlagValue> {
        self.occurrences.last().map(|o| &o.value)
    }
}

/// Every name that appears more than once, ordered by first appearance.
pub fn find_duplicates(flags: &[ScannedFlag]) -> Vec<Duplicate> {
    let mut seen: Vec<Duplicate> = Vec::new();
    // name -> index into `seen`
    let mut index: HashMap<&str, usize> = HashMap::new();

    for scanned in flags {
        let occurrence = Occurrence {
            line: scanned.line,
            value: scanned.flag.value.clone(),
        };
        match index.get(scanned.flag.name.as_str()) {
            Some(&i) => seen[i].occurrences.push(occurrence),
            None => {
                index.insert(scanned.flag.name.as_str(), seen.len());
                seen.push(Duplicate {
                    name: scanned.flag.name.clone(),
                    occurrences: vec![occurrence],
                });
            }
        }
    }

    seen.retain(|d| d.occurrences.len() > 1);
    seen
}
