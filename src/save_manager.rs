//! Session persistence: bankroll and round history survive across runs.

use crate::big_small::RoundSummary;
use crate::constants::{SAVE_VERSION_MAGIC, STARTING_BALANCE};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Everything worth keeping between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSession {
    pub balance: f64,
    pub history: Vec<RoundSummary>,
}

impl Default for TableSession {
    fn default() -> Self {
        Self {
            balance: STARTING_BALANCE,
            history: Vec::new(),
        }
    }
}

/// Saves and loads the table session in a checksummed binary format.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Use the platform config directory for the save file.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "parlour").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("session.dat"),
        })
    }

    /// Use an explicit save path (tests).
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized session (variable length)
    /// - SHA256 checksum over everything above (32 bytes)
    pub fn save(&self, session: &TableSession) -> io::Result<()> {
        let payload = bincode::serialize(session)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut buffer = Vec::with_capacity(12 + payload.len() + 32);
        buffer.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
        buffer.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        buffer.extend_from_slice(&payload);

        let checksum = Sha256::digest(&buffer);
        buffer.extend_from_slice(&checksum);

        fs::write(&self.save_path, buffer)
    }

    /// Load the session, failing on a missing file, wrong version magic,
    /// checksum mismatch, or undecodable payload.
    pub fn load(&self) -> io::Result<TableSession> {
        let bytes = fs::read(&self.save_path)?;
        let corrupt = |msg: &str| io::Error::new(io::ErrorKind::InvalidData, msg.to_string());

        if bytes.len() < 12 + 32 {
            return Err(corrupt("save file truncated"));
        }

        let version = u64::from_le_bytes(bytes[0..8].try_into().unwrap());
        if version != SAVE_VERSION_MAGIC {
            return Err(corrupt(&format!(
                "unrecognized save version 0x{:016X}",
                version
            )));
        }

        let payload_len = u32::from_le_bytes(bytes[8..12].try_into().unwrap()) as usize;
        let checksum_start = bytes
            .len()
            .checked_sub(32)
            .filter(|&end| end == 12 + payload_len)
            .ok_or_else(|| corrupt("save file length mismatch"))?;

        let computed = Sha256::digest(&bytes[..checksum_start]);
        if bytes[checksum_start..] != computed[..] {
            return Err(corrupt("save file checksum mismatch"));
        }

        bincode::deserialize(&bytes[12..checksum_start])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Load the session, or start fresh if the file is missing or corrupt.
    pub fn load_or_default(&self) -> TableSession {
        self.load().unwrap_or_default()
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}
