use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{round2, TariffTable};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub distance_km: Decimal,
    pub base_fare: Decimal,
    pub surcharge: Decimal,
    pub total: Decimal,
}

impl Quote {
    pub fn new(distance_km: Decimal, rate_per_km: Decimal, surcharge: Decimal) -> Self {
        let base_fare = round2(distance_km * rate_per_km);
        let total = round2(base_fare + surcharge);

        Self {
            distance_km,
            base_fare,
            surcharge,
            total,
        }
    }
}

// One total per known category at the resolved distance, alongside the
// active tariff table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceList {
    pub distance_km: Decimal,
    pub totals: BTreeMap<String, Decimal>,
    pub tariff: TariffTable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn confort_20km_no_wait() {
        let quote = Quote::new(dec!(20), dec!(0.50), Decimal::ZERO);

        assert_eq!(quote.base_fare, dec!(10.00));
        assert_eq!(quote.surcharge, Decimal::ZERO);
        assert_eq!(quote.total, dec!(10.00));
    }

    #[test]
    fn premium_12km_with_hour_wait() {
        let quote = Quote::new(dec!(12), dec!(0.75), dec!(20));

        assert_eq!(quote.base_fare, dec!(9.00));
        assert_eq!(quote.total, dec!(29.00));
    }

    #[test]
    fn base_fare_rounds_before_surcharge_is_added() {
        // 3.333 * 0.50 = 1.6665 -> 1.67, then + 0.005 -> 1.68 (half-up)
        let quote = Quote::new(dec!(3.333), dec!(0.50), dec!(0.005));

        assert_eq!(quote.base_fare, dec!(1.67));
        assert_eq!(quote.total, dec!(1.68));
    }

    #[test]
    fn total_is_never_below_base_fare() {
        let quote = Quote::new(dec!(7.25), dec!(1.10), dec!(15));

        assert!(quote.total >= quote.base_fare);
        assert!(quote.base_fare >= Decimal::ZERO);
    }

    #[test]
    fn zero_distance_prices_to_surcharge_only() {
        let quote = Quote::new(Decimal::ZERO, dec!(0.75), dec!(10));

        assert_eq!(quote.base_fare, dec!(0.00));
        assert_eq!(quote.total, dec!(10.00));
    }
}
