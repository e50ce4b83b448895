//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Request records built by callers
//! - `wire.rs` — Serde structs matching service responses
//! - `client.rs` — Sub-client with one method per operation
//!
//! Every request record embeds a single [`header::Header`]; operation fields
//! sit flat beside it.

pub mod account;
pub mod business;
pub mod entity;
pub mod header;
pub mod transaction;
pub mod wallet;

use serde::{Deserialize, Serialize};

// ─── BaseResponse ────────────────────────────────────────────────────────────

/// The plain `{reference, message, status, success}` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse {
    #[serde(default)]
    pub reference: Option<String>,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub success: Option<bool>,
}

impl BaseResponse {
    /// `status == "SUCCESS"` (or `success == true` when the status is absent).
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("SUCCESS") || self.success == Some(true)
    }
}
