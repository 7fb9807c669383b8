use crate::error::AppError;
use std::collections::HashMap;

/// Decoded `application/x-www-form-urlencoded` body.
#[derive(Debug, Default, Clone)]
pub struct Form {
    fields: HashMap<String, String>,
}

impl Form {
    pub fn parse(body: &str) -> Self {
        let fields = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Value of a field that must be present in the submission.
    pub fn required(&self, field: &'static str) -> Result<&str, AppError> {
        self.get(field).ok_or_else(|| AppError::InvalidInput {
            field,
            reason: "is required".into(),
        })
    }
}
