//! The static dataset shown in the table.
//!
//! Records are defined once and never change; display order is the order
//! they appear in [`TABLE_DATA`].

/// One data row: a news category and its most popular headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub category: &'static str,
    pub headline: &'static str,
}

impl Record {
    pub const fn new(category: &'static str, headline: &'static str) -> Self {
        Self { category, headline }
    }
}

/// Rows rendered by the table, top to bottom.
pub static TABLE_DATA: &[Record] = &[
    Record::new("Tech", "AI breakthrough"),
    Record::new("World", "Leaders meet for climate summit"),
    Record::new("Business", "Markets rally on rate cut hopes"),
    Record::new("Science", "New exoplanet found in habitable zone"),
    Record::new("Sports", "Underdogs clinch championship title"),
    Record::new("Health", "Study links sleep to memory"),
    Record::new("Politics", "Senate passes infrastructure bill"),
    Record::new("Entertainment", "Indie film sweeps festival awards"),
    Record::new("Travel", "Night trains make a comeback"),
    Record::new("Food", "Fermentation is the new sourdough"),
];
