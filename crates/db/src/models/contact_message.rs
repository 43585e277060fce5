//! Contact message entity model and request DTO.

use reelfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_messages` table.
///
/// Created exactly once per accepted submission; never updated, never
/// deleted. `created_at` is assigned by the database at insert time.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for the `POST /contact` request body.
///
/// Absent fields deserialize to empty strings so the handler's input gate
/// owns the rejection (400 with the literal error body) instead of a
/// serde-level decode error. Unknown keys, including a client-supplied
/// `createdAt`, are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub message: String,
}
