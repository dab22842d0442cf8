use std::collections::HashMap;
use std::sync::LazyLock;

use wq_model::Limit;

/// One parameter's reference limits under both guidelines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidelineEntry {
    /// Display name including the unit, e.g. "BOD5 (mg/L)".
    pub name: &'static str,
    pub who: Limit,
    pub ecr: Limit,
}

/// The fixed guideline table. Entry order is the table's insertion order and
/// drives the order of every comparison report.
#[derive(Debug, Clone)]
pub struct GuidelineRegistry {
    entries: Vec<GuidelineEntry>,
    by_name: HashMap<&'static str, usize>,
}

impl GuidelineRegistry {
    fn new(entries: Vec<GuidelineEntry>) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.name, index))
            .collect();
        Self { entries, by_name }
    }

    /// The built-in eleven-parameter table (WHO and ECR'2023).
    pub fn builtin() -> Self {
        Self::new(vec![
            scalar_entry("BOD5 (mg/L)", 6.0, 6.0),
            scalar_entry("COD (mg/L)", 10.0, 4.0),
            range_entry("pH (-)", (6.5, 8.5), (6.5, 8.5)),
            scalar_entry("Temperature (°C)", 25.0, 30.0),
            scalar_entry("Turbidity (NTU)", 5.0, 10.0),
            scalar_entry("Color-465nm (Pt-Co unit)", 15.0, 15.0),
            scalar_entry("TSS (mg/L)", 10.0, 10.0),
            scalar_entry("TIN (mg/L)", 1.0, 1.0),
            scalar_entry("Free ammonia (mg/L)", 0.5, 0.5),
            scalar_entry("Chromium (mg/L)", 0.05, 0.05),
            scalar_entry("Cobalt (mg/L)", 0.01, 0.01),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &GuidelineEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&GuidelineEntry> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Parameter names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}

fn scalar_entry(name: &'static str, who: f64, ecr: f64) -> GuidelineEntry {
    GuidelineEntry {
        name,
        who: Limit::scalar(who),
        ecr: Limit::scalar(ecr),
    }
}

fn range_entry(name: &'static str, who: (f64, f64), ecr: (f64, f64)) -> GuidelineEntry {
    GuidelineEntry {
        name,
        who: Limit::range(who.0, who.1),
        ecr: Limit::range(ecr.0, ecr.1),
    }
}

static BUILTIN: LazyLock<GuidelineRegistry> = LazyLock::new(GuidelineRegistry::builtin);

/// Process-wide read-only registry, built once on first use.
pub fn guidelines() -> &'static GuidelineRegistry {
    &BUILTIN
}
