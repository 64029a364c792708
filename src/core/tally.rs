use std::collections::HashMap;
use std::fmt;

/// Running count of scanned products for one session.
///
/// Counts are at least 1 for any present product. `Display` renders the
/// historical receipt format, one `"{count}\t{name}"` line per product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    products: HashMap<String, u32>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the product once more, inserting it at 1 if absent.
    pub fn add(&mut self, name: &str) {
        *self.products.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Clears all entries. Idempotent.
    pub fn reset(&mut self) {
        self.products.clear();
    }

    pub fn count(&self, name: &str) -> u32 {
        self.products.get(name).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Snapshot of `(count, name)` pairs for display. Order is arbitrary but
    /// stable for the duration of one call.
    pub fn render(&self) -> Vec<(u32, String)> {
        self.products
            .iter()
            .map(|(name, &count)| (count, name.clone()))
            .collect()
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .render()
            .into_iter()
            .map(|(count, name)| format!("{count}\t{name}"))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_counts_multiset() {
        let mut tally = Tally::new();
        tally.add("Milk");
        tally.add("Bread");
        tally.add("Milk");

        assert_eq!(tally.count("Milk"), 2);
        assert_eq!(tally.count("Bread"), 1);
        assert_eq!(tally.count("Eggs"), 0);
    }

    #[test]
    fn test_reset_is_total_and_idempotent() {
        let mut tally = Tally::new();
        tally.add("Milk");

        tally.reset();
        assert!(tally.is_empty());

        tally.reset();
        assert!(tally.is_empty());
    }

    #[test]
    fn test_display_renders_tab_separated_lines() {
        let mut tally = Tally::new();
        tally.add("Milk");
        tally.add("Milk");
        tally.add("Bread");

        let mut lines: Vec<String> = tally.to_string().lines().map(str::to_string).collect();
        lines.sort();
        assert_eq!(lines, vec!["1\tBread".to_string(), "2\tMilk".to_string()]);
    }

    #[test]
    fn test_display_of_empty_tally_is_empty() {
        assert_eq!(Tally::new().to_string(), "");
    }
}
