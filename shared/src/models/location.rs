//! Location types for live tracking and geocoding

use serde::{Deserialize, Serialize};

/// A geographic coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Live location of the pickup person assigned to a request
///
/// Coordinates are absent until the agent reports a first position, which is
/// distinct from a fetch failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl PickupLocation {
    /// Coordinates, when the agent has reported a position.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_location_awaiting_first_fix() {
        let location: PickupLocation =
            serde_json::from_str(r#"{"name": "Ravi", "latitude": null, "longitude": null}"#)
                .unwrap();
        assert!(location.coordinates().is_none());

        let location: PickupLocation =
            serde_json::from_str(r#"{"name": "Ravi", "latitude": 19.07, "longitude": 72.87}"#)
                .unwrap();
        let coords = location.coordinates().unwrap();
        assert_eq!(coords.latitude, 19.07);
        assert_eq!(coords.longitude, 72.87);
    }
}
