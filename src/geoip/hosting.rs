//! Hosting-provider detection from the ISP/organization name.

/// Name fragments of well-known hosting and cloud providers.
const HOSTING_KEYWORDS: &[&str] = &[
    "amazon",
    "aws",
    "azure",
    "digitalocean",
    "linode",
    "google",
    "cloudflare",
    "cloud",
    "vultr",
    "scaleway",
    "ovh",
    "hetzner",
    "namecheap",
    "fastly",
];

/// Returns true if `isp` contains any hosting keyword (case-insensitive substring).
pub fn detect_hosting(isp: &str) -> bool {
    let isp = isp.to_lowercase();
    HOSTING_KEYWORDS.iter().any(|keyword| isp.contains(keyword))
}
