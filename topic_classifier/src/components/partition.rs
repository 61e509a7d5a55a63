use indexmap::{map::Entry, IndexMap};
use serde::{Deserialize, Serialize};

/// Topic label to the texts assigned to it.
///
/// Labels keep the order in which they were first assigned, and each list
/// keeps the order its texts were added in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition(IndexMap<String, Vec<String>>);

impl Partition {
    pub fn new() -> Self {
        Default::default()
    }

    /// Label-wise concatenation. New labels are appended in `other`'s order.
    pub fn merge(&mut self, other: Partition) {
        for (label, items) in other.0 {
            self.extend_label(label, items);
        }
    }

    pub fn extend_label<S: Into<String>>(&mut self, label: S, items: Vec<String>) {
        match self.0.entry(label.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().extend(items),
            Entry::Vacant(entry) => {
                entry.insert(items);
            }
        }
    }

    pub fn insert<S: Into<String>>(&mut self, label: S, items: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(label.into(), items)
    }

    /// Removes a label, keeping the order of the remaining labels.
    pub fn remove(&mut self, label: &str) -> Option<Vec<String>> {
        self.0.shift_remove(label)
    }

    pub fn get(&self, label: &str) -> Option<&Vec<String>> {
        self.0.get(label)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of texts across every label.
    pub fn total_items(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl IntoIterator for Partition {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for Partition {
    fn from_iter<T: IntoIterator<Item = (S, Vec<String>)>>(iter: T) -> Self {
        let mut partition = Partition::new();
        for (label, items) in iter {
            partition.extend_label(label, items);
        }
        partition
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Partition:")?;
        for (label, items) in &self.0 {
            topic_interface::i_nln(f, format_args!("{label} ({}): {:?}", items.len(), items))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
