//! taper-scales
//!
//! Withdrawal-severity scoring instruments. Pure data plus a small scoring
//! engine: each scale is a fixed, ordered list of graded items; a score
//! sheet tracks one selection per item, sums a total, and maps the total to
//! a severity label through the scale's banding rules.

pub mod error;
pub mod scales;
pub mod scoring;
pub mod sheet;
pub mod view;

use scoring::Item;

/// Trait implemented by each withdrawal scoring scale.
pub trait Scale: Send + Sync {
    /// Unique identifier for this scale, also used as its tab key
    /// (e.g. "ciwa-ar", "cows").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "CIWA-Ar", "COWS").
    fn name(&self) -> &str;

    /// Usage note displayed alongside the form, if the scale has one.
    fn note(&self) -> Option<&str> {
        None
    }

    /// The graded items, in display and summary order.
    fn items(&self) -> &[Item];

    /// Map a total score to its severity label. Banding is a step function
    /// of the total: every total maps to exactly one label, and labels only
    /// escalate as the total grows.
    fn severity(&self, total: i32) -> &'static str;

    /// Highest total the item list can produce.
    fn max_score(&self) -> i32 {
        self.items()
            .iter()
            .map(|item| item.options.iter().map(|o| o.value).max().unwrap_or(0))
            .sum()
    }
}

/// Return all registered scales, in tab order.
pub fn all_scales() -> Vec<Box<dyn Scale>> {
    vec![
        Box::new(scales::aws::Aws),
        Box::new(scales::ciwa_ar::CiwaAr),
        Box::new(scales::saws::Saws),
        Box::new(scales::cows::Cows),
        Box::new(scales::ciwa_b::CiwaB),
        Box::new(scales::nsw_cws::NswCws),
        Box::new(scales::cwas::Cwas),
    ]
}

/// Look up a scale by ID.
pub fn get_scale(id: &str) -> Option<Box<dyn Scale>> {
    all_scales().into_iter().find(|s| s.id() == id)
}
