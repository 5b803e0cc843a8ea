use serde::{Deserialize, Deserializer, Serialize};

/// List endpoints wrap their rows as `{ "results": [...] }`.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub results: Vec<T>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileLink {
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "loose_text")]
    pub id: String,
    #[serde(deserialize_with = "loose_text")]
    pub employee_number: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default, deserialize_with = "loose_text_opt")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, deserialize_with = "loose_text_opt")]
    pub remuneration_type: Option<String>,
    #[serde(default, deserialize_with = "loose_text_opt")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "loose_text_opt")]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "loose_text_opt")]
    pub work_shift: Option<String>,
    #[serde(default, deserialize_with = "loose_text_opt")]
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "loose_text_opt")]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(deserialize_with = "loose_text")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub employee_full_name: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub employee_number: String,
    #[serde(deserialize_with = "loose_text")]
    pub month: String,
    #[serde(deserialize_with = "loose_text")]
    pub year: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub is_sended: bool,
    #[serde(default)]
    pub sended_date: Option<String>,
    #[serde(default)]
    pub is_readed: bool,
    #[serde(default)]
    pub readed_date: Option<String>,
    #[serde(default)]
    pub is_signed: bool,
}

/// Scalars the API is inconsistent about (numbers sent as strings or vice versa).
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

fn loose_text_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}
