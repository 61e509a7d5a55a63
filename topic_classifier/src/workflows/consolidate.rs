use crate::components::partition::Partition;

/// Folds labels holding at most one text into `other_label`.
///
/// The result starts with `other_label` (present even when empty), followed by
/// the surviving labels in their original order.
pub fn consolidate(partition: Partition, other_label: &str) -> Partition {
    let mut consolidated = Partition::new();
    consolidated.insert(other_label, Vec::new());

    for (label, items) in partition {
        if label == other_label || items.len() <= 1 {
            consolidated.extend_label(other_label, items);
        } else {
            consolidated.insert(label, items);
        }
    }
    consolidated
}
