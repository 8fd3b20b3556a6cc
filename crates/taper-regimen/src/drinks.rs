//! Standard-drink arithmetic and the preset serve table.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Grams of ethanol per millilitre. One Australian standard drink is 10g of
/// ethanol, which makes volume (L) x ABV (%) x 0.789 come out in standard
/// drinks directly.
const ETHANOL_DENSITY: f64 = 0.789;

/// Standard drinks in a beverage of the given volume and strength.
pub fn standard_drinks(volume_ml: f64, abv_percent: f64) -> f64 {
    (volume_ml / 1000.0) * abv_percent * ETHANOL_DENSITY
}

/// Parse a free-text quantity field. Blank or non-numeric input counts as
/// zero, never an error.
pub fn parse_quantity(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

/// Total standard drinks over (quantity, standard drinks per serve) pairs.
pub fn total_standard_drinks(entries: &[(f64, f64)]) -> f64 {
    entries.iter().map(|(qty, sd)| qty * sd).sum()
}

/// A common Australian serve and its standard-drink value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BeveragePreset {
    pub key: String,
    pub label: String,
    pub standard_drinks: f64,
}

/// The preset serve table, in display order.
pub fn beverage_presets() -> &'static [BeveragePreset] {
    static PRESETS: std::sync::LazyLock<Vec<BeveragePreset>> = std::sync::LazyLock::new(|| {
        let serves = [
            ("light-beer", "Light beer (2.7%), 375mL can", 0.8),
            ("mid-beer", "Mid-strength beer (3.5%), 375mL can", 1.0),
            ("full-beer", "Full-strength beer (4.8%), 375mL can", 1.4),
            ("red-wine", "Red wine (13.5%), 150mL glass", 1.6),
            ("white-wine", "White wine (11.5%), 150mL glass", 1.4),
            ("sparkling", "Sparkling wine (12%), 150mL glass", 1.4),
            ("fortified", "Fortified wine (17.5%), 60mL glass", 0.9),
            ("spirits", "Spirits (40%), 30mL nip", 1.0),
            ("rtd", "Pre-mixed spirits (5%), 375mL can", 1.5),
        ];

        serves
            .iter()
            .map(|(key, label, standard_drinks)| BeveragePreset {
                key: key.to_string(),
                label: label.to_string(),
                standard_drinks: *standard_drinks,
            })
            .collect()
    });
    &PRESETS
}

/// Result block for the by-type tally.
pub fn format_total(total: f64) -> String {
    format!("--- Total Standard Drinks ---\n\nTotal: {total:.2} standard drinks.")
}

/// Result block for the volume-and-strength calculation, formula included.
pub fn format_volume_result(volume_ml: f64, abv_percent: f64) -> String {
    let result = standard_drinks(volume_ml, abv_percent);
    format!(
        "--- Standard Drink Calculation ---\n\nA {volume_ml}mL beverage at {abv_percent}% ABV contains:\n\n--> {result:.2} standard drinks.\n\nFormula: Volume (L) × ABV (%) × 0.789 (density of ethanol)"
    )
}
