//! DTOs for the greetings_sea adapter.

/// Payload for inserting a greeting.
#[derive(Debug, Clone)]
pub struct GreetingCreate {
    pub sender: String,
    pub recipient: String,
    pub message: String,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct GreetingPatch {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub message: Option<String>,
}

impl GreetingPatch {
    pub fn is_empty(&self) -> bool {
        self.sender.is_none() && self.recipient.is_none() && self.message.is_none()
    }
}
