//! IP validation and filtering.

use std::net::IpAddr;

use ipnetwork::IpNetwork;
use log::warn;

use crate::error_handling::LookupError;

/// Ranges the provider cannot geolocate.
const PRIVATE_RANGES: &[&str] = &[
    "0.0.0.0/8",
    "10.0.0.0/8",
    "172.16.0.0/12",
    "192.168.0.0/16",
    "100.64.0.0/10",
    "::1/128",
    "fc00::/7",
];

/// Parses an IPv4 or IPv6 literal.
pub fn validate_ip(input: &str) -> Result<IpAddr, LookupError> {
    input
        .trim()
        .parse::<IpAddr>()
        .map_err(|_| LookupError::InvalidInput(input.to_string()))
}

/// True for loopback, private, carrier-grade NAT and unique-local addresses.
pub fn is_private_ip(ip: IpAddr) -> bool {
    PRIVATE_RANGES
        .iter()
        .filter_map(|cidr| cidr.parse::<IpNetwork>().ok())
        .any(|network| network.contains(ip))
}

/// Keeps the valid IPs from `inputs`, in order.
///
/// Invalid entries are dropped with a warning. Private addresses are kept but
/// flagged, since the provider returns no location for them.
pub fn filter_valid_ips(inputs: &[String]) -> Vec<String> {
    let mut valid = Vec::with_capacity(inputs.len());
    for input in inputs {
        match validate_ip(input) {
            Ok(ip) => {
                if is_private_ip(ip) {
                    warn!(
                        "{} is a private or reserved address; the provider will not geolocate it",
                        ip
                    );
                }
                valid.push(input.trim().to_string());
            }
            Err(_) => warn!("Skipping invalid IP: {}", input),
        }
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ip_accepts_v4_and_v6() {
        assert!(validate_ip("8.8.8.8").is_ok());
        assert!(validate_ip(" 1.1.1.1 ").is_ok());
        assert!(validate_ip("2001:4860:4860::8888").is_ok());
    }

    #[test]
    fn test_validate_ip_rejects_garbage() {
        assert_eq!(
            validate_ip("999.999.999.999"),
            Err(LookupError::InvalidInput("999.999.999.999".to_string()))
        );
        assert!(validate_ip("example.com").is_err());
        assert!(validate_ip("").is_err());
    }

    #[test]
    fn test_is_private_ip() {
        for private in ["10.1.2.3", "172.16.0.1", "172.31.255.255", "192.168.1.1", "100.64.0.1", "0.1.2.3", "::1", "fd00::1"] {
            assert!(is_private_ip(private.parse().unwrap()), "{}", private);
        }
        for public in ["8.8.8.8", "172.32.0.1", "1.1.1.1", "2001:4860:4860::8888"] {
            assert!(!is_private_ip(public.parse().unwrap()), "{}", public);
        }
    }

    #[test]
    fn test_filter_valid_ips_preserves_order() {
        let inputs: Vec<String> = ["8.8.8.8", "999.999.999.999", " 10.0.0.1", "not-an-ip", "::1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            filter_valid_ips(&inputs),
            vec!["8.8.8.8".to_string(), "10.0.0.1".to_string(), "::1".to_string()]
        );
    }
}
