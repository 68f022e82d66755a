//! Commit data model

use std::fmt;

use thiserror::Error;

/// Number of hex characters shown for an abbreviated commit id
pub const SHORT_ID_LEN: usize = 7;

/// Errors that can occur when parsing a hex commit id
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommitIdError {
    #[error("commit id is empty")]
    Empty,

    #[error("invalid commit id: {0}")]
    Invalid(#[from] hex::FromHexError),
}

/// Content hash identifying a commit
///
/// Stored as raw bytes. Git repositories use either SHA-1 (20 bytes) or
/// SHA-256 (32 bytes) object ids, so the length is not fixed by the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(Box<[u8]>);

impl CommitId {
    /// Wrap raw hash bytes
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a hex string (upper or lower case)
    pub fn from_hex(digits: &str) -> Result<Self, CommitIdError> {
        if digits.is_empty() {
            return Err(CommitIdError::Empty);
        }
        Ok(Self(hex::decode(digits)?.into_boxed_slice()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Full lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Abbreviated id: the first [`SHORT_ID_LEN`] hex characters
    ///
    /// Ids shorter than that are returned whole.
    pub fn short(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(SHORT_ID_LEN);
        hex
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A commit as seen by the log view: its id and full message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: CommitId,
    pub message: String,
}

impl Commit {
    pub fn new(id: CommitId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }

    /// First line of the message, without the newline
    pub fn summary(&self) -> &str {
        self.message
            .split_once('\n')
            .map_or(self.message.as_str(), |(first, _)| first)
    }
}
