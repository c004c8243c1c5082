//! Row selection by category and variant.

use std::collections::BTreeSet;

use residue_model::{CategoryGroup, CategoryMatch, CellValue, IdentifyingPositions, Sheet};

fn normalize_value(value: &str) -> String {
    value.trim().to_lowercase()
}

fn normalized_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|value| normalize_value(value))
        .filter(|value| !value.is_empty())
        .collect()
}

/// Compiled form of a [`CategoryGroup`].
#[derive(Debug, Clone)]
pub struct RowFilter {
    categories: BTreeSet<String>,
    variants: Option<BTreeSet<String>>,
    matching: CategoryMatch,
}

impl RowFilter {
    pub fn new(group: &CategoryGroup) -> Self {
        Self {
            categories: normalized_set(&group.categories),
            variants: group.variants.as_deref().map(normalized_set),
            matching: group.matching,
        }
    }

    /// True when the category (and, if constrained, the variant) is accepted.
    pub fn matches(&self, category: &CellValue, variant: &CellValue) -> bool {
        let category = category.normalized_text();
        if category.is_empty() || !self.category_accepted(&category) {
            return false;
        }
        match &self.variants {
            None => true,
            Some(accepted) => {
                let variant = variant.normalized_text();
                !variant.is_empty() && accepted.contains(&variant)
            }
        }
    }

    fn category_accepted(&self, category: &str) -> bool {
        match self.matching {
            CategoryMatch::Exact => self.categories.contains(category),
            CategoryMatch::Contains => self
                .categories
                .iter()
                .any(|accepted| category.contains(accepted.as_str())),
        }
    }

    /// Indices of the sheet rows that pass, in sheet order.
    pub fn select(&self, sheet: &Sheet, positions: &IdentifyingPositions) -> Vec<usize> {
        (0..sheet.row_count())
            .filter(|&row| {
                self.matches(
                    sheet.cell(row, positions.category),
                    sheet.cell(row, positions.variant),
                )
            })
            .collect()
    }
}
