use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleCategory {
    pub name: String,
    pub rate_per_km: Decimal,
}

impl VehicleCategory {
    pub fn new(name: impl Into<String>, rate_per_km: Decimal) -> Self {
        Self {
            name: name.into(),
            rate_per_km,
        }
    }
}
