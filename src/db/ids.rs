// src/db/ids.rs
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt::Write;

/// Generate an opaque record id: 4 bytes of creation seconds (big-endian)
/// followed by 8 random bytes, rendered as 24 lowercase hex chars.
pub fn new_id(now: DateTime<Utc>) -> String {
    let mut rng = OsRng;
    new_id_with(&mut rng, now)
}

pub fn new_id_with<R: RngCore>(rng: &mut R, now: DateTime<Utc>) -> String {
    let mut raw = [0u8; 12];
    let secs = now.timestamp().clamp(0, u32::MAX as i64) as u32;
    raw[..4].copy_from_slice(&secs.to_be_bytes());
    rng.fill_bytes(&mut raw[4..]);

    raw.iter().fold(String::with_capacity(24), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}
