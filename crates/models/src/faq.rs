use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{require, Validate};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
}

impl Validate for FaqInput {
    fn validate(&self) -> Result<(), ModelError> {
        require("question", &self.question)?;
        require("answer", &self.answer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let input = FaqInput { question: "How early should we book?".into(), answer: "".into() };
        assert!(input.validate().is_err());
        let input = FaqInput { question: "".into(), answer: "Six months out.".into() };
        assert!(input.validate().is_err());
        let input = FaqInput {
            question: "How early should we book?".into(),
            answer: "Six months out.".into(),
        };
        assert!(input.validate().is_ok());
    }
}
