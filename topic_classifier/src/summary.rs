use crate::components::partition::Partition;
use colorful::Colorful;
use unicode_width::UnicodeWidthStr;

pub const SUMMARY_HEADER: &str = "=== Topic classification summary ===";

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub quantity: usize,
    pub percentage: f64,
}

/// Per-label counts of a classified partition, largest first with the other
/// label last.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub total: usize,
}

impl Summary {
    pub fn new(partition: &Partition, other_label: &str) -> Self {
        let total = partition.total_items();
        let mut rows: Vec<SummaryRow> = partition
            .iter()
            .map(|(label, items)| SummaryRow {
                label: label.clone(),
                quantity: items.len(),
                percentage: if total == 0 {
                    0.0
                } else {
                    items.len() as f64 / total as f64 * 100.0
                },
            })
            .collect();
        rows.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        if let Some(pos) = rows.iter().position(|row| row.label == other_label) {
            let other = rows.remove(pos);
            rows.push(other);
        }
        Self { rows, total }
    }

    /// Prints the table to stdout with a highlighted header.
    pub fn print(&self) {
        println!("{}", SUMMARY_HEADER.color(colorful::RGB::new(0, 139, 248)).bold());
        print!("{}", self.table());
    }

    fn table(&self) -> String {
        let label_width = self
            .rows
            .iter()
            .map(|row| row.label.width())
            .chain(std::iter::once("Label".width()))
            .max()
            .unwrap_or_default();
        let mut table = format!(
            "{}  {:<8}  {}\n",
            pad_to_width("Label", label_width),
            "Quantity",
            "Percentage"
        );
        for row in &self.rows {
            table.push_str(&format!(
                "{}  {:<8}  {:.1}%\n",
                pad_to_width(&row.label, label_width),
                row.quantity,
                row.percentage
            ));
        }
        table
    }
}

// Pads by terminal cells; wide (e.g. CJK) characters take two.
fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{SUMMARY_HEADER}")?;
        write!(f, "{}", self.table())
    }
}
