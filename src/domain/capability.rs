//! Behavior contracts for content variants.
//!
//! - `Content`: license cost and description, implemented by every variant
//! - `Downloadable`: optional download action and daily cap

use std::io::{self, Write};

use super::item::ContentItem;

/// Items at most this many years old are priced at the "fresh" rate
pub const FRESH_AGE_LIMIT: i32 = 2;

/// Common contract for all content variants
pub trait Content {
    /// Shared fields
    fn item(&self) -> &ContentItem;

    /// Shared fields, for the validating setters
    fn item_mut(&mut self) -> &mut ContentItem;

    /// License cost as of `reference_year`
    fn license_cost(&self, reference_year: i32) -> f64;

    /// Human-readable one-line description
    fn describe(&self) -> String {
        self.item().describe()
    }

    fn age(&self, reference_year: i32) -> i32 {
        self.item().age(reference_year)
    }
}

/// Optional download capability
pub trait Downloadable {
    /// Message announcing the download
    fn download_message(&self) -> String;

    /// Advisory daily cap; not enforced anywhere
    fn max_downloads_per_day(&self) -> u32;

    /// Perform the (simulated) download by writing its message to `out`
    fn download(&self, out: &mut dyn Write) -> io::Result<()> {
        let message = self.download_message();
        tracing::debug!(%message, "download");
        writeln!(out, "{}", message)
    }
}

/// Per-minute rate plus a flat factor that depends on whether the item is
/// still fresh at `age`.
pub(crate) fn tiered_cost(
    per_minute: f64,
    duration_minutes: i32,
    age: i32,
    fresh_factor: i32,
    aged_factor: i32,
) -> f64 {
    let age_factor = if age <= FRESH_AGE_LIMIT {
        fresh_factor
    } else {
        aged_factor
    };
    per_minute * f64::from(duration_minutes) + f64::from(age_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiered_cost_threshold() {
        // age 2 is still fresh, age 3 is not
        assert!((tiered_cost(0.1, 10, 2, 5, 2) - 6.0).abs() < 1e-9);
        assert!((tiered_cost(0.1, 10, 3, 5, 2) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiered_cost_negative_age_is_fresh() {
        assert!((tiered_cost(0.0, 10, -4, 7, 1) - 7.0).abs() < 1e-9);
    }
}
