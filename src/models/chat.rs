//! Chat models
//!
//! One stateless turn: no history is retained or threaded through, so the
//! reply cannot reference earlier turns. That is intentional for this demo.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub name: String,
    pub message: String,
}

impl ChatRequest {
    /// Trimmed (name, message), or an error when either is blank -
    /// the form-level "enter your name and a message" check.
    pub fn validated(&self) -> Result<(&str, &str), String> {
        let name = self.name.trim();
        let message = self.message.trim();

        if name.is_empty() || message.is_empty() {
            return Err("Please enter your name and a message to start the conversation".to_string());
        }

        Ok((name, message))
    }
}

#[derive(Debug, Serialize)]
pub struct ChatTurn {
    pub name: String,
    pub message: String,
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_or_message_rejected() {
        let req = ChatRequest {
            name: "   ".to_string(),
            message: "hello".to_string(),
        };
        assert!(req.validated().is_err());

        let req = ChatRequest {
            name: "Asha".to_string(),
            message: "".to_string(),
        };
        assert!(req.validated().is_err());
    }

    #[test]
    fn test_valid_turn_is_trimmed() {
        let req = ChatRequest {
            name: " Asha ".to_string(),
            message: " feeling low today ".to_string(),
        };
        let (name, message) = req.validated().unwrap();
        assert_eq!(name, "Asha");
        assert_eq!(message, "feeling low today");
    }
}
