//! Display snapshot derived from session state.

use crate::model::conversion::{CategoryId, ConversionId};
use serde::{Deserialize, Serialize};

/// Everything a shell needs to render the converter screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub raw_input: String,
    pub numeric_value: f64,
    pub highlighted_conversion_id: Option<ConversionId>,
    pub categories: Vec<CategoryView>,
}

/// One category section with its result cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: CategoryId,
    pub title: String,
    pub icon_id: String,
    pub results: Vec<ResultView>,
}

/// One tappable result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub conversion_id: ConversionId,
    pub label: String,
    pub source_unit_symbol: String,
    pub destination_unit_symbol: String,
    /// Text shown on the card and written to the clipboard on copy.
    pub formatted_value: String,
    /// Card renders its "Copied" state while this is set.
    pub is_copied: bool,
}

impl SessionView {
    /// Iterates every result card in display order.
    pub fn results(&self) -> impl Iterator<Item = &ResultView> {
        self.categories
            .iter()
            .flat_map(|category| category.results.iter())
    }

    /// Finds one result card by conversion id.
    pub fn result(&self, conversion_id: ConversionId) -> Option<&ResultView> {
        self.results()
            .find(|result| result.conversion_id == conversion_id)
    }
}
