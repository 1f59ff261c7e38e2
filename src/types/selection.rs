use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Enhanced,
    Reduced,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub pets_id: String,
    #[serde(default)]
    pub pets_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub uv_l2_names: Vec<String>,
}

impl Selection {
    pub fn new<I, S>(pets_id: impl Into<String>, uv_l2_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pets_id: pets_id.into(),
            pets_name: None,
            uv_l2_names: uv_l2_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_name(mut self, pets_name: impl Into<String>) -> Self {
        self.pets_name = Some(pets_name.into());
        self
    }

    pub fn display_name(&self) -> String {
        match self.pets_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("PETS-{}", self.pets_id),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
