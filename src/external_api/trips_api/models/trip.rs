use std::fmt;

/// Trip identity, the backend sends it either as a number or as a string
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TripId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripId::Number(value) => write!(f, "{value}"),
            TripId::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Tourist attraction
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Trip {
    pub eid: TripId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: String,
}

impl Trip {

    #[cfg(test)]
    pub fn new_test(eid: i64, title: &str, tags: &[&str]) -> Self {
        Self {
            eid: TripId::Number(eid),
            title: title.to_string(),
            description: format!("Description of {title}"),
            photos: vec![format!("https://img.example.com/{eid}/0.jpg")],
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            url: format!("https://www.example.com/trips/{eid}"),
        }
    }
}
