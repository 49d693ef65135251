//! Geocoding provider interface and HTTP client.
//!
//! Resolution of a free-text place name to coordinates is delegated to an
//! external provider behind the [`Geocoder`] trait. [`HttpGeocoder`] is the
//! bundled implementation, speaking the Google-style geocoding JSON API.

use crate::config::Config;
use crate::error::{GeocodingError, Result};
use serde::Deserialize;

/// Coordinates returned by a geocoding provider.
///
/// Altitude is optional; most providers do not report one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodedPlace {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
}

/// A provider that resolves a free-text query to coordinates.
///
/// Implementations must surface every transport failure or empty result as
/// a [`GeocodingError`]; a partial or null result is never returned.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> std::result::Result<GeocodedPlace, GeocodingError>;
}

/// Response body of the geocoding endpoint.
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLatLng,
}

#[derive(Debug, Deserialize)]
struct GeocodeLatLng {
    lat: f64,
    lng: f64,
}

/// HTTP geocoding client.
///
/// The request is a single blocking call with no internal timeout or retry;
/// callers needing either must impose it externally. The client is immutable
/// after construction and safe to share read-only.
#[derive(Debug)]
pub struct HttpGeocoder {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpGeocoder {
    /// Build a client from the given configuration.
    ///
    /// An `api_key` in the config selects the authenticated provider mode;
    /// without one the default unauthenticated mode is used.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let http = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(GeocodingError::from)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn decode(body: GeocodeResponse) -> std::result::Result<GeocodedPlace, GeocodingError> {
        match body.status.as_str() {
            "OK" => {
                let result = body.results.into_iter().next().ok_or(GeocodingError::NoMatch)?;
                Ok(GeocodedPlace {
                    latitude: result.geometry.location.lat,
                    longitude: result.geometry.location.lng,
                    altitude: None,
                })
            }
            "ZERO_RESULTS" => Err(GeocodingError::NoMatch),
            other => {
                log::warn!("geocoding provider returned status {}", other);
                Err(GeocodingError::Status(other.to_string()))
            }
        }
    }
}

impl Geocoder for HttpGeocoder {
    fn geocode(&self, query: &str) -> std::result::Result<GeocodedPlace, GeocodingError> {
        let mut request = self.http.get(&self.endpoint).query(&[("address", query)]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Status(format!("HTTP {}", status.as_u16())));
        }

        let body: GeocodeResponse = response
            .json()
            .map_err(|e| GeocodingError::Malformed(e.to_string()))?;

        Self::decode(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(json: &str) -> std::result::Result<GeocodedPlace, GeocodingError> {
        let body: GeocodeResponse =
            serde_json::from_str(json).map_err(|e| GeocodingError::Malformed(e.to_string()))?;
        HttpGeocoder::decode(body)
    }

    #[test]
    fn test_decode_ok_response() {
        let place = decode_str(
            r#"{
                "status": "OK",
                "results": [
                    { "geometry": { "location": { "lat": 40.7128, "lng": -74.0060 } } },
                    { "geometry": { "location": { "lat": 0.0, "lng": 0.0 } } }
                ]
            }"#,
        )
        .unwrap();

        // First result wins
        assert_eq!(place.latitude, 40.7128);
        assert_eq!(place.longitude, -74.0060);
        assert!(place.altitude.is_none());
    }

    #[test]
    fn test_decode_zero_results() {
        let err = decode_str(r#"{ "status": "ZERO_RESULTS", "results": [] }"#).unwrap_err();
        assert!(matches!(err, GeocodingError::NoMatch));
    }

    #[test]
    fn test_decode_ok_with_empty_results() {
        let err = decode_str(r#"{ "status": "OK", "results": [] }"#).unwrap_err();
        assert!(matches!(err, GeocodingError::NoMatch));
    }

    #[test]
    fn test_decode_error_status() {
        let err = decode_str(r#"{ "status": "REQUEST_DENIED" }"#).unwrap_err();
        match err {
            GeocodingError::Status(status) => assert_eq!(status, "REQUEST_DENIED"),
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_str("not json").unwrap_err();
        assert!(matches!(err, GeocodingError::Malformed(_)));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = Config::default().with_endpoint("not-a-url");
        assert!(HttpGeocoder::new(&config).is_err());
    }

    #[test]
    fn test_new_with_default_and_keyed_config() {
        assert!(HttpGeocoder::new(&Config::default()).is_ok());

        let keyed = HttpGeocoder::new(&Config::with_api_key("secret")).unwrap();
        assert_eq!(keyed.api_key.as_deref(), Some("secret"));
    }
}
