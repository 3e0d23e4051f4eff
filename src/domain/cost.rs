use serde::Serialize;

/// One row of a cost breakdown. Amounts are full precision dollars.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostLineItem {
    pub id: String,
    pub category: String,
    pub amount: f64,
    pub basis: String,
    pub notes: Option<String>,
}

impl CostLineItem {
    pub fn new(id: &str, category: &str, amount: f64, basis: String) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            amount,
            basis,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// Sums line items left to right so totals reproduce exactly.
pub fn sum_line_items(items: &[CostLineItem]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}
