use anyhow::{bail, Context, Result};
use reqwest::Client;
use tracing::{debug, info};

use super::endpoints;
use crate::models::forecast::{ForecastResponse, GeoLocation};

const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// OpenWeatherMap API client
pub struct WeatherClient {
    http: Client,
    geo_url: String,
    weather_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .with_context(|| format!("{} is not set", API_KEY_VAR))?;

        let http = Client::builder()
            .user_agent("pickleball-weather/0.1.0")
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            geo_url: endpoints::GEO_API.to_string(),
            weather_url: endpoints::WEATHER_API.to_string(),
            api_key,
        })
    }

    /// Resolve a city (optionally with a US state code) to coordinates
    pub async fn geocode(&self, city: &str, state: Option<&str>) -> Result<GeoLocation> {
        let query = match state {
            Some(state) => format!("{},{},US", city, state),
            None => city.to_string(),
        };
        let url = format!("{}{}", self.geo_url, endpoints::DIRECT);

        debug!("Geocoding request for {}", query);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query.as_str()), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .context("Geocoding request failed")?;
        if !response.status().is_success() {
            bail!(
                "Bad geolocation request ({}). Check your city name spelling.",
                response.status()
            );
        }

        let matches: Vec<GeoLocation> = response
            .json()
            .await
            .context("Failed to parse geocoding response")?;

        let location = matches.into_iter().next().with_context(|| {
            format!(
                "No location found for '{}'. Check the spelling, or the city/state pairing.",
                query
            )
        })?;

        info!(
            "Geocoded {} -> ({:.4}, {:.4})",
            query, location.lat, location.lon
        );
        Ok(location)
    }

    /// Fetch the 5-day/3-hour forecast for a geocoded location.
    /// Returns the decoded response along with the raw body so the caller
    /// can save it for replay.
    pub async fn fetch_forecast(&self, location: &GeoLocation) -> Result<(ForecastResponse, String)> {
        let url = format!("{}{}", self.weather_url, endpoints::FORECAST);

        debug!("Forecast request for {}", location.name);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", format!("{:.4}", location.lat)),
                ("lon", format!("{:.4}", location.lon)),
                ("units", "imperial".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .context("Forecast request failed")?;
        if !response.status().is_success() {
            bail!("Weather API request failed ({}). Try again.", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read forecast response")?;
        let forecast: ForecastResponse =
            serde_json::from_str(&body).context("Failed to parse forecast response")?;

        info!("Fetched {} forecast entries", forecast.list.len());
        Ok((forecast, body))
    }
}
