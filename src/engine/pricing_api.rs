use super::Engine;

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    api::PricingAPI,
    entities::{Booking, CancellationQuote, PriceList, Quote},
    error::{invalid_input_error, unknown_category_error, Error},
};

fn validate_endpoints(origin: &str, destination: &str) -> Result<(), Error> {
    if origin.trim().is_empty() || destination.trim().is_empty() {
        return Err(invalid_input_error());
    }

    Ok(())
}

#[async_trait]
impl PricingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(
        &self,
        origin: &str,
        destination: &str,
        category_name: &str,
        wait_minutes: Option<u32>,
    ) -> Result<Quote, Error> {
        validate_endpoints(origin, destination)?;

        let category = self
            .categories
            .find_category(category_name)
            .await?
            .ok_or_else(|| unknown_category_error(category_name))?;

        let distance_km = self.distance.resolve_distance_km(origin, destination).await?;
        let tariff = self.tariffs.active_tariff().await?;

        Ok(Quote::new(
            distance_km,
            category.rate_per_km,
            tariff.surcharge(wait_minutes),
        ))
    }

    #[tracing::instrument(skip(self))]
    async fn price_list(&self, origin: &str, destination: &str) -> Result<PriceList, Error> {
        validate_endpoints(origin, destination)?;

        let distance_km = self.distance.resolve_distance_km(origin, destination).await?;
        let tariff = self.tariffs.active_tariff().await?;

        let mut totals = BTreeMap::new();
        for category in self.categories.list_categories().await? {
            let quote = Quote::new(distance_km, category.rate_per_km, tariff.surcharge(None));
            totals.insert(category.name, quote.total);
        }

        Ok(PriceList {
            distance_km,
            totals,
            tariff,
        })
    }

    #[tracing::instrument(skip(self))]
    fn cancellation_quote(
        &self,
        booking: &Booking,
        now: DateTime<Utc>,
    ) -> Result<CancellationQuote, Error> {
        self.policy.settle(booking, now)
    }
}
