use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::round2;
use crate::error::{invalid_input_error, Error};

// Read-only view of a booking owned by the external booking service; only
// the fields fee computation needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub vehicle_category: String,
    pub fare: Decimal,
    pub scheduled_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CancellationQuote {
    pub fee_amount: Decimal,
    pub refund_amount: Decimal,
}

#[derive(Clone, Debug)]
pub struct CancellationPolicy {
    pub fee_percent: Decimal,
    pub fee_window_hours: i64,
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        Self {
            fee_percent: Decimal::from(20),
            fee_window_hours: 4,
        }
    }
}

impl CancellationPolicy {
    // The fee applies strictly inside the window; a booking whose scheduled
    // time is already past stays on the fee branch.
    pub fn settle(
        &self,
        booking: &Booking,
        now: DateTime<Utc>,
    ) -> Result<CancellationQuote, Error> {
        if booking.fare < Decimal::ZERO {
            return Err(invalid_input_error());
        }

        let remaining = booking.scheduled_at.signed_duration_since(now);

        let fee_amount = if remaining < Duration::hours(self.fee_window_hours) {
            round2(booking.fare * self.fee_percent / Decimal::from(100))
        } else {
            Decimal::ZERO
        };

        let refund_amount = round2(booking.fare - fee_amount);

        Ok(CancellationQuote {
            fee_amount,
            refund_amount,
        })
    }
}
