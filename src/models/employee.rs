use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "timestamp_format")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp_format")]
    pub updated_at: NaiveDateTime,
}

/// Request body for create and update. Unknown members such as `id` or
/// `created_at` are dropped by serde, so clients cannot set them. Missing and
/// `null` members both decode as empty strings and fail validation.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
pub struct EmployeePayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "must be required"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "must be required"))]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "must be required"))]
    pub phone: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `YYYY-MM-DD HH:MM:SS` on the wire.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
