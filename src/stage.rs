//! The three hash stages of the derivation chain.
//!
//! Each stage owns a stack-local hasher context that is consumed by
//! `finalize()` before `compute` returns; only the output bytes escape.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Sha256,
    Ripemd160,
    Crc32,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 3] = [Stage::Sha256, Stage::Ripemd160, Stage::Crc32];

    /// Label used in verbose output
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Sha256 => "SHA256",
            Stage::Ripemd160 => "RIPEMD 160",
            Stage::Crc32 => "CRC32",
        }
    }

    /// Output length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            Stage::Sha256 => 32,
            Stage::Ripemd160 => 20,
            Stage::Crc32 => 4,
        }
    }

    pub fn compute(&self, data: &[u8]) -> StageResult {
        let bytes = match self {
            Stage::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(data);
                hasher.finalize().to_vec()
            }
            Stage::Ripemd160 => {
                let mut hasher = Ripemd160::new();
                hasher.update(data);
                hasher.finalize().to_vec()
            }
            Stage::Crc32 => {
                let mut hasher = crc32fast::Hasher::new();
                hasher.update(data);
                // network order, so the hex reads like the checksum value
                hasher.finalize().to_be_bytes().to_vec()
            }
        };

        StageResult::new(*self, bytes)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of a single stage. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageResult {
    stage: Stage,
    bytes: Vec<u8>,
    hex: String,
}

impl StageResult {
    fn new(stage: Stage, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), stage.digest_len());
        let hex = to_hex(&bytes);
        Self { stage, bytes, hex }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }
}

/// Lowercase hex, two digits per byte, no separators or prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
