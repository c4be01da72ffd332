use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ZkappError;

/// A field element, kept as its canonical decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Field(String);

impl Field {
    /// Decodes the JSON text the worker produces for a field, e.g. `"\"42\""`.
    pub fn from_json(json: &str) -> Result<Field, ZkappError> {
        let decimal: String = serde_json::from_str(json)
            .map_err(|_| ZkappError::InvalidField(json.to_string()))?;
        return Field::try_from(decimal);
    }

    pub fn to_json(&self) -> String {
        return format!("\"{}\"", self.0);
    }

    pub fn as_decimal(&self) -> &str {
        return &self.0;
    }
}

impl TryFrom<String> for Field {
    type Error = ZkappError;

    fn try_from(decimal: String) -> Result<Self, Self::Error> {
        if decimal.is_empty() || !decimal.chars().all(|character| character.is_ascii_digit()) {
            return Err(ZkappError::InvalidField(decimal));
        }
        let trimmed = decimal.trim_start_matches('0');
        if trimmed.is_empty() {
            return Ok(Field("0".to_string()));
        }
        return Ok(Field(trimmed.to_string()));
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        return field.0;
    }
}

impl From<u64> for Field {
    fn from(value: u64) -> Self {
        return Field(value.to_string());
    }
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
