//! Percentage moves from a series of daily closes.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use sentinel_core::PriceSnapshot;

/// Closes needed: today, one session back, and three sessions back.
pub const MIN_CLOSES: usize = 4;

/// Build a snapshot from daily closes, oldest first.
///
/// The 1-day move compares the last close with the one before it; the 3-day
/// move compares it with the close three sessions earlier. Returns `None`
/// when there are fewer than [`MIN_CLOSES`] closes, a close is not finite,
/// or a reference close is zero.
#[must_use]
pub fn snapshot_from_closes(symbol: &str, closes: &[f64]) -> Option<PriceSnapshot> {
    if closes.len() < MIN_CLOSES {
        return None;
    }

    let n = closes.len();
    let current = Decimal::from_f64(closes[n - 1])?;
    let one_day_ago = Decimal::from_f64(closes[n - 2])?;
    let three_days_ago = Decimal::from_f64(closes[n - 4])?;

    Some(PriceSnapshot::new(
        symbol,
        current,
        percent_change(current, one_day_ago)?,
        percent_change(current, three_days_ago)?,
    ))
}

fn percent_change(current: Decimal, reference: Decimal) -> Option<Decimal> {
    (current - reference)
        .checked_div(reference)?
        .checked_mul(Decimal::ONE_HUNDRED)
}
