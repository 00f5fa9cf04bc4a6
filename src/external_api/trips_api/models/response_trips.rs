use super::trip::Trip;

/// Envelope of `GET /trips`
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct ResponseTrips {
    #[serde(default)]
    pub data: Option<Vec<Trip>>,
}

impl ResponseTrips {
    /// Trips from the envelope, a missing or null `data` is no trips
    pub fn into_trips(self) -> Vec<Trip> {
        self.data.unwrap_or_default()
    }
}
