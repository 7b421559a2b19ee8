//! Network identifiers, IDs, digests and contact handles.

use crate::data::it::{TOP_LEVEL_DOMAINS, USERNAMES, WEBSITES};
use crate::data::person::EMAIL_DOMAINS;
use crate::data::strings::{ALNUM_LOWERCASE, LOWERCASE};
use crate::generators::{pick, strings};
use rand::Rng;
use std::net::{Ipv4Addr, Ipv6Addr};
use uuid::Uuid;

pub fn random_ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    Ipv4Addr::from(rng.random_range(1..=u32::MAX)).to_string()
}

pub fn random_private_ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "10.{}.{}.{}",
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8)
    )
}

/// Addresses from the TEST-NET-3 block, safe to embed in test datasets.
pub fn random_public_ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("203.0.113.{}", rng.random_range(0..=255u8))
}

pub fn random_ipv6<R: Rng + ?Sized>(rng: &mut R) -> String {
    Ipv6Addr::from(rng.random::<u128>()).to_string()
}

pub fn random_mac_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 6];
    rng.fill(&mut bytes[..]);
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

pub fn random_domain<R: Rng + ?Sized>(rng: &mut R) -> String {
    let length = rng.random_range(5..=10);
    let label = strings::random_chars(rng, LOWERCASE, length);
    format!("{label}.{}", pick(rng, TOP_LEVEL_DOMAINS))
}

pub fn random_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let protocol = *pick(rng, &["http", "https"]);
    let domain_len = rng.random_range(5..=10);
    let domain = strings::random_chars(rng, LOWERCASE, domain_len);

    let segments = rng.random_range(1..=3);
    let path = (0..segments)
        .map(|_| {
            let len = rng.random_range(2..=5);
            strings::random_chars(rng, ALNUM_LOWERCASE, len)
        })
        .collect::<Vec<_>>()
        .join("/");

    let param_count = rng.random_range(0..=3);
    let query = (0..param_count)
        .map(|_| {
            let key_len = rng.random_range(2..=5);
            let value_len = rng.random_range(2..=5);
            format!(
                "{}={}",
                strings::random_chars(rng, LOWERCASE, key_len),
                strings::random_chars(rng, ALNUM_LOWERCASE, value_len)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    let fragment_len = rng.random_range(2..=5);
    let fragment = strings::random_chars(rng, ALNUM_LOWERCASE, fragment_len);

    format!("{protocol}://{domain}/{path}?{query}#{fragment}")
}

pub fn random_known_url<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, WEBSITES)
}

/// Random v4 UUID built from RNG bytes, so seeded runs reproduce.
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);

    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes)
}

/// ULID stamped with the current time; the random half comes from the RNG.
pub fn random_ulid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    ulid::Ulid::from_parts(millis, rng.random::<u128>()).to_string()
}

/// Uniformly random lowercase hex of `bytes` bytes, the shape of a digest.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R, bytes: usize) -> String {
    let mut buffer = vec![0u8; bytes];
    rng.fill(&mut buffer[..]);
    hex::encode(buffer)
}

/// MongoDB-style ObjectId: 4-byte unix timestamp plus 8 random bytes.
pub fn random_object_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 12];
    let timestamp = (chrono::Utc::now().timestamp().max(0) as u32).to_be_bytes();
    bytes[..4].copy_from_slice(&timestamp);
    rng.fill(&mut bytes[4..]);
    hex::encode(bytes)
}

pub fn random_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}@{}",
        pick(rng, USERNAMES),
        pick(rng, USERNAMES),
        pick(rng, EMAIL_DOMAINS)
    )
}

pub fn random_username<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}.{}", pick(rng, USERNAMES), pick(rng, USERNAMES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ipv4_shapes() {
        let mut rng = StdRng::seed_from_u64(42);

        let ip: Ipv4Addr = random_ipv4(&mut rng).parse().unwrap();
        assert_ne!(ip, Ipv4Addr::UNSPECIFIED);

        assert!(random_private_ipv4(&mut rng).starts_with("10."));
        assert!(random_public_ipv4(&mut rng).starts_with("203.0.113."));
    }

    #[test]
    fn test_ipv6_parses() {
        let mut rng = StdRng::seed_from_u64(42);
        let ip: Ipv6Addr = random_ipv6(&mut rng).parse().unwrap();
        let _ = ip;
    }

    #[test]
    fn test_mac_address_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let mac = random_mac_address(&mut rng);
        assert_eq!(mac.len(), 17);
        assert_eq!(mac.matches(':').count(), 5);
    }

    #[test]
    fn test_uuid_is_v4_and_seeded() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let a = random_uuid(&mut rng1);
        let b = random_uuid(&mut rng2);
        assert_eq!(a, b);
        assert_eq!(a.get_version_num(), 4);
    }

    #[test]
    fn test_hex_digest_widths() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_hex(&mut rng, 16).len(), 32); // MD5 shape
        assert_eq!(random_hex(&mut rng, 20).len(), 40); // SHA-1 shape
        assert_eq!(random_hex(&mut rng, 32).len(), 64); // SHA-256 shape
        assert_eq!(random_hex(&mut rng, 64).len(), 128); // SHA-512 shape
    }

    #[test]
    fn test_object_id_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let id = random_object_id(&mut rng);
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_email_and_domain_shapes() {
        let mut rng = StdRng::seed_from_u64(42);

        let email = random_email(&mut rng);
        assert!(email.contains('@'));
        assert!(email.contains('.'));

        let domain = random_domain(&mut rng);
        let (label, tld) = domain.split_once('.').unwrap();
        assert!((5..=10).contains(&label.len()));
        assert!(TOP_LEVEL_DOMAINS.contains(&tld));
    }

    #[test]
    fn test_url_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let url = random_url(&mut rng);
        assert!(url.starts_with("http"));
        assert!(url.contains("://"));
        assert!(url.contains('#'));
    }
}
