// Categorical color assignment
use std::collections::HashMap;

/// d3's `schemeCategory10`, the palette the chart was designed around.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Fixed mapping from group labels to palette colors, assigned in first-seen
/// order and cycling when labels outnumber colors. Deriving it twice from the
/// same label sequence yields identical assignments.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    palette: Vec<String>,
    order: Vec<String>,
    index: HashMap<String, usize>,
}

impl CategoryColors {
    /// Builds the assignment from labels in iteration order. Duplicates keep
    /// their first slot. An empty palette falls back to the default one.
    pub fn from_labels<I, S>(labels: I, palette: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect()
        } else {
            palette.to_vec()
        };
        let mut order = Vec::new();
        let mut index = HashMap::new();
        for label in labels {
            let label = label.as_ref();
            if !index.contains_key(label) {
                index.insert(label.to_string(), order.len());
                order.push(label.to_string());
            }
        }
        Self {
            palette,
            order,
            index,
        }
    }

    /// The color assigned to a label. Labels not seen at construction fall
    /// back to the first palette color.
    pub fn color_for(&self, label: &str) -> &str {
        match self.index.get(label) {
            Some(idx) => self.palette[idx % self.palette.len()].as_str(),
            None => self.palette[0].as_str(),
        }
    }

    /// (label, color) pairs in first-seen order, for the legend.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|label| (label.as_str(), self.color_for(label)))
    }
}
