//! Technical indicators computed over normalized candle sequences.
//!
//! All functions are pure: they take a candle slice and return derived
//! series or scalars, never touching the network. Outputs align 1:1
//! with the input; `None` marks indices where the trailing window has
//! not filled yet.

use rust_decimal::Decimal;

use crate::models::Candle;

/// Rolling-extrema window used by [`support_resistance`].
pub const SWING_WINDOW: usize = 5;

/// Default RSI lookback period.
pub const RSI_PERIOD: usize = 14;

/// Default simple-moving-average lookback period.
pub const SMA_PERIOD: usize = 20;

/// Empirical price floor and ceiling for a candle window, both rounded
/// to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportResistance {
    pub support: Decimal,
    pub resistance: Decimal,
}

/// Relative Strength Index over closing prices.
///
/// Per-step deltas are split into gains and losses, each smoothed with
/// a simple rolling mean of `period` steps; RSI = 100 - 100/(1 + RS)
/// where RS is the gain/loss ratio. The delta at index 0 is undefined,
/// so the first `period` outputs are `None`.
///
/// A window whose average loss is zero saturates to exactly 100. A
/// fully flat window (zero gain and zero loss) has no defined RSI and
/// yields `None`.
pub fn rsi(candles: &[Candle], period: usize) -> Vec<Option<Decimal>> {
    let n = candles.len();
    let mut out = vec![None; n];
    if period == 0 || n <= period {
        return out;
    }

    // gains[i] / losses[i] describe the move into candle i + 1
    let mut gains = Vec::with_capacity(n - 1);
    let mut losses = Vec::with_capacity(n - 1);
    for pair in candles.windows(2) {
        let delta = pair[1].close - pair[0].close;
        gains.push(delta.max(Decimal::ZERO));
        losses.push((-delta).max(Decimal::ZERO));
    }

    let window = Decimal::from(period as u64);
    for i in period..n {
        let start = i - period;
        let avg_gain = gains[start..i].iter().copied().sum::<Decimal>() / window;
        let avg_loss = losses[start..i].iter().copied().sum::<Decimal>() / window;

        out[i] = if avg_loss.is_zero() {
            (!avg_gain.is_zero()).then_some(Decimal::ONE_HUNDRED)
        } else {
            let rs = avg_gain / avg_loss;
            Some(Decimal::ONE_HUNDRED - Decimal::ONE_HUNDRED / (Decimal::ONE + rs))
        };
    }
    out
}

/// Trailing arithmetic mean of closing prices.
///
/// The first `period - 1` outputs are `None`.
pub fn simple_moving_average(candles: &[Candle], period: usize) -> Vec<Option<Decimal>> {
    let n = candles.len();
    let mut out = vec![None; n];
    if period == 0 {
        return out;
    }

    let window = Decimal::from(period as u64);
    for i in period.saturating_sub(1)..n {
        let sum = candles[i + 1 - period..=i]
            .iter()
            .map(|c| c.close)
            .sum::<Decimal>();
        out[i] = Some(sum / window);
    }
    out
}

/// Support and resistance levels from rolling extrema.
///
/// Resistance is the maximum of the rolling [`SWING_WINDOW`]-high
/// series, support the minimum of the rolling lows, each rounded to
/// two decimals. This is a coarse global extremum of smoothed local
/// extrema, deliberately simpler than zone clustering. Returns `None`
/// for inputs shorter than the window.
pub fn support_resistance(candles: &[Candle]) -> Option<SupportResistance> {
    if candles.len() < SWING_WINDOW {
        return None;
    }

    let mut resistance = Decimal::MIN;
    let mut support = Decimal::MAX;
    for window in candles.windows(SWING_WINDOW) {
        let local_high = window.iter().fold(Decimal::MIN, |acc, c| acc.max(c.high));
        let local_low = window.iter().fold(Decimal::MAX, |acc, c| acc.min(c.low));
        resistance = resistance.max(local_high);
        support = support.min(local_low);
    }

    Some(SupportResistance {
        support: support.round_dp(2),
        resistance: resistance.round_dp(2),
    })
}
