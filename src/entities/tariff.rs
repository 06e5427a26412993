use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// Flat surcharge per extra-wait bucket, keyed by minutes. A single active
// table exists at a time; absent configuration falls back to the defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TariffTable {
    pub surcharges: BTreeMap<u32, Decimal>,
}

impl TariffTable {
    // A bucket the table does not know about costs nothing.
    pub fn surcharge(&self, wait_minutes: Option<u32>) -> Decimal {
        wait_minutes
            .and_then(|bucket| self.surcharges.get(&bucket).copied())
            .unwrap_or(Decimal::ZERO)
    }

    pub fn set(&mut self, bucket: u32, amount: Decimal) {
        self.surcharges.insert(bucket, amount);
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        let surcharges = BTreeMap::from([
            (30, dec!(10)),
            (45, dec!(15)),
            (60, dec!(20)),
            (120, dec!(40)),
            (180, dec!(60)),
        ]);

        Self { surcharges }
    }
}
