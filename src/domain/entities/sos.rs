//! SOS dispatch entities.

use serde::Deserialize;

use crate::domain::serde_utils::scalar_text;

/// Backend answer to an SOS dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SosDispatch {
    /// Name of the assigned responder.
    #[serde(with = "scalar_text")]
    pub responder_name: String,
    /// Map view URL for the responder.
    pub link: String,
}

/// Fixed body of the emergency contact message.
pub const EMERGENCY_MESSAGE_BODY: &str = "This is an emergency message.";
