use std::env;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    api::DistanceAPI,
    error::{distance_unavailable_error, invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    status: String,
    rows: Vec<Row>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Row {
    elements: Vec<Element>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Element {
    status: String,
    distance: Option<Distance>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Distance {
    value: i64,
}

pub struct GoogleMaps {
    client: reqwest::Client,
}

impl GoogleMaps {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for GoogleMaps {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DistanceAPI for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn resolve_distance_km(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Decimal, Error> {
        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let url = format!("https://{}/maps/api/distancematrix/json", api_base);
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        let res = self
            .client
            .get(url)
            .query(&[("key", key)])
            .query(&[("origins", origin)])
            .query(&[("destinations", destination)])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        distance_km(data)
    }
}

fn distance_km(data: Response) -> Result<Decimal, Error> {
    if data.status != "OK" {
        return Err(upstream_error());
    }

    let element = data
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or_else(|| distance_unavailable_error(json!({"status": data.status.clone()})))?;

    if element.status != "OK" {
        return Err(distance_unavailable_error(json!(element)));
    }

    let distance = element
        .distance
        .as_ref()
        .ok_or_else(|| distance_unavailable_error(json!(element)))?;

    Ok(Decimal::from(distance.value) / Decimal::from(1000))
}
