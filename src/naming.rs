// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deterministic resource name derivation.
//!
//! Names are derived from semantic content so that repeated invocations with
//! the same inputs produce the same resources: SHA-224 over a seed, base36
//! encoded, lowercased and truncated to 8 characters.

use crate::constants::MAX_RESOURCE_NAME_LEN;
use sha2::{Digest, Sha224};

/// Number of hash characters appended to derived names
pub const HASH_SUFFIX_LEN: usize = 8;

/// Maximum length of the export-name prefix of a binding name, leaving room
/// for the separator and the hash suffix.
const MAX_BINDING_NAME_PREFIX_LEN: usize = MAX_RESOURCE_NAME_LEN - 1 - HASH_SUFFIX_LEN;

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hash a seed into a compact 8-character lowercase base36 string.
pub fn hash_name(seed: &[u8]) -> String {
    let digest = Sha224::digest(seed);
    let mut encoded = base36_encode(&digest);
    encoded.truncate(HASH_SUFFIX_LEN);
    encoded
}

/// Encode bytes as a big-endian base36 integer.
fn base36_encode(bytes: &[u8]) -> String {
    let mut digits = bytes.to_vec();
    let mut out = Vec::new();

    while digits.iter().any(|&b| b != 0) {
        let mut rem: u32 = 0;
        for digit in digits.iter_mut() {
            let acc = (rem << 8) | u32::from(*digit);
            *digit = (acc / 36) as u8;
            rem = acc % 36;
        }
        out.push(BASE36_ALPHABET[rem as usize]);
    }

    if out.is_empty() {
        out.push(b'0');
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Derive the name of an APIBinding from the source workspace of the export.
///
/// The export name alone is not unique across workspaces, so the hash is
/// computed over the source workspace path. The prefix is truncated so the
/// full name never exceeds the DNS-1123 subdomain limit.
pub fn api_binding_name(source_workspace_path: &str, export_name: &str) -> String {
    let prefix: String = export_name.chars().take(MAX_BINDING_NAME_PREFIX_LEN).collect();
    format!("{}-{}", prefix, hash_name(source_workspace_path.as_bytes()))
}

/// Derive a placement name from the raw selector strings and the location
/// workspace path. A pure function of its inputs, so repeated invocations
/// with identical arguments target the same placement.
pub fn placement_name(
    namespace_selector: &str,
    location_selectors: &[String],
    location_workspace: &str,
) -> String {
    let seed = format!(
        "{}{}{}",
        namespace_selector,
        location_selectors.join(","),
        location_workspace
    );
    format!("placement-{}", hash_name(seed.as_bytes()))
}
