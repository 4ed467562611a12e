//! GeoIP data structures.
//!
//! `ProviderResponse` mirrors the provider's JSON body; `LookupRecord` is the
//! immutable result handed to the rest of the application.

use serde::{Deserialize, Serialize};

use super::hosting::detect_hosting;

/// Resolved geolocation and network metadata for one IP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupRecord {
    /// Address the provider resolved (the caller's own for a self lookup)
    pub ip: String,
    /// Country name
    pub country: String,
    /// Region or state
    pub region: String,
    /// City
    pub city: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// IANA timezone name
    pub timezone: String,
    /// Network owner as reported by the provider's `org`
    pub isp: String,
    /// Postal code
    pub postal: String,
    /// Autonomous system, e.g. `AS15169`
    pub asn: String,
    /// Mobile carrier network
    pub is_mobile: bool,
    /// Known proxy or VPN exit
    pub is_proxy: bool,
    /// Derived from `isp`, never read from the provider.
    pub is_hosting: bool,
    /// Organization, same source as `isp`
    pub org: String,
    /// Two-letter continent code
    pub continent: String,
}

/// Raw provider body. Every field is optional; `null` and absent both map to
/// the type's default when converted.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProviderResponse {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default, alias = "organization")]
    pub org: Option<String>,
    #[serde(default)]
    pub postal: Option<String>,
    #[serde(default)]
    pub asn: Option<String>,
    #[serde(default)]
    pub device_is_mobile: Option<bool>,
    #[serde(default)]
    pub proxy: Option<bool>,
    #[serde(default)]
    pub continent_code: Option<String>,

    // Provider-side failure reported with a 200 status
    #[serde(default)]
    pub error: Option<bool>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl From<ProviderResponse> for LookupRecord {
    fn from(raw: ProviderResponse) -> Self {
        let org = raw.org.unwrap_or_default();
        LookupRecord {
            ip: raw.ip.unwrap_or_default(),
            country: raw.country_name.unwrap_or_default(),
            region: raw.region.unwrap_or_default(),
            city: raw.city.unwrap_or_default(),
            latitude: raw.latitude.unwrap_or_default(),
            longitude: raw.longitude.unwrap_or_default(),
            timezone: raw.timezone.unwrap_or_default(),
            is_hosting: detect_hosting(&org),
            isp: org.clone(),
            postal: raw.postal.unwrap_or_default(),
            asn: raw.asn.unwrap_or_default(),
            is_mobile: raw.device_is_mobile.unwrap_or_default(),
            is_proxy: raw.proxy.unwrap_or_default(),
            org,
            continent: raw.continent_code.unwrap_or_default(),
        }
    }
}
