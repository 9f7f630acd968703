//! Strike derivation and candidate pricing for bull put spreads.
//!
//! Strikes are rounded to the nearest multiple of 100 with Decimal
//! arithmetic, so re-deriving them from the same inputs is exact. Missing
//! strikes and non-positive credit are normal "no tradable spread" outcomes,
//! not errors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::data::PutChain;

/// Configuration for spread selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadSelectorConfig {
    /// Target sell-strike moneyness (strike / spot). Below 1 places the sold
    /// put out-of-the-money for a credit spread.
    pub sell_strike_moneyness: Decimal,
    /// Protective-leg distance as a fraction of the sell strike.
    pub spread_width_pct: Decimal,
    /// Maximum days-to-expiry for candidate expiries.
    pub max_dte: i64,
    /// Contracts per lot.
    pub lot_size: Decimal,
}

impl Default for SpreadSelectorConfig {
    fn default() -> Self {
        Self {
            sell_strike_moneyness: Decimal::new(98, 2), // 0.98
            spread_width_pct: Decimal::new(1, 2),       // 0.01
            max_dte: 7,
            lot_size: Decimal::from(15),
        }
    }
}

/// A priced, tradable spread candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadCandidate {
    pub expiry: NaiveDate,
    pub sell_strike: Decimal,
    pub buy_strike: Decimal,
    pub sell_price: Decimal,
    pub buy_price: Decimal,
    /// Net premium collected: (sell - buy) x lot size x allocation multiplier.
    pub credit: Decimal,
}

/// Selects and prices bull put spread candidates.
pub struct SpreadSelector {
    config: SpreadSelectorConfig,
}

impl SpreadSelector {
    pub fn new(config: SpreadSelectorConfig) -> Self {
        Self { config }
    }

    /// Target strikes for a given spot price, both exact multiples of 100.
    pub fn target_strikes(&self, price: Decimal) -> (Decimal, Decimal) {
        let hundred = Decimal::ONE_HUNDRED;
        let sell_strike = (price * self.config.sell_strike_moneyness / hundred).round() * hundred;
        let buy_strike =
            (sell_strike * (Decimal::ONE - self.config.spread_width_pct) / hundred).round()
                * hundred;
        (sell_strike, buy_strike)
    }

    /// Nearest expiry with days-to-expiry in [0, max_dte], if any.
    pub fn pick_expiry(&self, today: NaiveDate, expiries: &[NaiveDate]) -> Option<NaiveDate> {
        expiries
            .iter()
            .copied()
            .filter(|e| {
                let dte = (*e - today).num_days();
                (0..=self.config.max_dte).contains(&dte)
            })
            .min()
    }

    /// Price the target spread from the chain.
    ///
    /// Returns `None` when either strike is absent or the scaled net credit
    /// is not positive — both reject the candidate without error.
    pub fn select(
        &self,
        chain: &PutChain,
        price: Decimal,
        allocation_multiplier: Decimal,
    ) -> Option<SpreadCandidate> {
        let (sell_strike, buy_strike) = self.target_strikes(price);

        let sell = chain.put_at_strike(sell_strike)?;
        let buy = chain.put_at_strike(buy_strike)?;

        let credit =
            (sell.last_price - buy.last_price) * self.config.lot_size * allocation_multiplier;
        if credit <= Decimal::ZERO {
            return None;
        }

        Some(SpreadCandidate {
            expiry: chain.expiry,
            sell_strike,
            buy_strike,
            sell_price: sell.last_price,
            buy_price: buy.last_price,
            credit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::data::OptionQuote;

    fn chain(expiry: NaiveDate, quotes: &[(Decimal, Decimal)]) -> PutChain {
        PutChain {
            expiry,
            puts: quotes
                .iter()
                .map(|(strike, last_price)| OptionQuote {
                    strike: *strike,
                    last_price: *last_price,
                })
                .collect(),
        }
    }

    #[test]
    fn test_strike_rounding_to_hundreds() {
        let selector = SpreadSelector::new(SpreadSelectorConfig::default());

        // 48950 * 0.98 = 47971 -> 48000; 48000 * 0.99 = 47520 -> 47500
        let (sell, buy) = selector.target_strikes(dec!(48950));
        assert_eq!(sell, dec!(48000));
        assert_eq!(buy, dec!(47500));

        assert_eq!(sell % dec!(100), Decimal::ZERO);
        assert_eq!(buy % dec!(100), Decimal::ZERO);
    }

    #[test]
    fn test_strike_derivation_is_deterministic() {
        let selector = SpreadSelector::new(SpreadSelectorConfig::default());
        let first = selector.target_strikes(dec!(48123.45));
        for _ in 0..100 {
            assert_eq!(selector.target_strikes(dec!(48123.45)), first);
        }
    }

    #[test]
    fn test_expiry_window() {
        let selector = SpreadSelector::new(SpreadSelectorConfig::default());
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let expiries = vec![
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),  // past
            NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),  // 3 DTE
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(), // 6 DTE
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(), // beyond max_dte
        ];

        assert_eq!(
            selector.pick_expiry(today, &expiries),
            Some(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
        );
    }

    #[test]
    fn test_expiry_window_empty() {
        let selector = SpreadSelector::new(SpreadSelectorConfig::default());
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let expiries = vec![NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()];

        assert_eq!(selector.pick_expiry(today, &expiries), None);
    }

    #[test]
    fn test_select_prices_candidate() {
        let selector = SpreadSelector::new(SpreadSelectorConfig::default());
        let expiry = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let chain = chain(expiry, &[(dec!(48000), dec!(120)), (dec!(47500), dec!(40))]);

        let candidate = selector.select(&chain, dec!(48950), Decimal::ONE).unwrap();
        assert_eq!(candidate.sell_strike, dec!(48000));
        assert_eq!(candidate.buy_strike, dec!(47500));
        // (120 - 40) * 15 * 1.0
        assert_eq!(candidate.credit, dec!(1200));
        assert!(candidate.buy_strike <= candidate.sell_strike);
    }

    #[test]
    fn test_select_scales_by_multiplier() {
        let selector = SpreadSelector::new(SpreadSelectorConfig::default());
        let expiry = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let chain = chain(expiry, &[(dec!(48000), dec!(120)), (dec!(47500), dec!(40))]);

        let candidate = selector.select(&chain, dec!(48950), dec!(0.5)).unwrap();
        assert_eq!(candidate.credit, dec!(600));
    }

    #[test]
    fn test_missing_strike_rejects() {
        let selector = SpreadSelector::new(SpreadSelectorConfig::default());
        let expiry = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let chain = chain(expiry, &[(dec!(48000), dec!(120))]); // no 47500

        assert!(selector.select(&chain, dec!(48950), Decimal::ONE).is_none());
    }

    #[test]
    fn test_non_positive_credit_rejects() {
        let selector = SpreadSelector::new(SpreadSelectorConfig::default());
        let expiry = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        // Inverted pricing: protective leg richer than the sold leg.
        let chain = chain(expiry, &[(dec!(48000), dec!(40)), (dec!(47500), dec!(120))]);

        assert!(selector.select(&chain, dec!(48950), Decimal::ONE).is_none());
    }
}
