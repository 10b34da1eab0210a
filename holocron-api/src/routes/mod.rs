/// API route handlers
///
/// One module per resource:
///
/// - `health`: Health check endpoint
/// - `users`: User list/get/create/delete
/// - `people`: Catalog people reads
/// - `planets`: Catalog planet reads
/// - `favorites`: Favorite add/remove and favorite listings

use serde::{Deserialize, Serialize};

pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod users;

/// Plain message body used by delete endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome message
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
