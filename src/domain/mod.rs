/// Domain models for the Mars rover API
use crate::utils::{api_date, api_date_opt};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rover photo manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarsRover {
    pub name: String,
    #[serde(with = "api_date")]
    pub launch_date: DateTime<Utc>,
    #[serde(with = "api_date")]
    pub landing_date: DateTime<Utc>,
    pub status: RoverStatus,
    pub max_sol: u32,
    #[serde(with = "api_date")]
    pub max_date: DateTime<Utc>,
    #[serde(rename = "total_photos")]
    pub number_of_photos: u64,
    #[serde(rename = "photos", default)]
    pub sol_descriptions: Vec<SolDescription>,
}

impl MarsRover {
    /// Summary for a given sol, if the rover photographed on it
    pub fn sol_description(&self, sol: u32) -> Option<&SolDescription> {
        self.sol_descriptions.iter().find(|d| d.sol == sol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoverStatus {
    Active,
    #[serde(alias = "complete")]
    Inactive,
}

/// Per-sol summary from the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolDescription {
    pub sol: u32,
    #[serde(with = "api_date")]
    pub earth_date: DateTime<Utc>,
    pub total_photos: u64,
    #[serde(default)]
    pub cameras: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rover_id: u64,
    #[serde(default)]
    pub full_name: String,
}

/// A single photo as listed for a rover and sol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarsPhotoReference {
    pub id: u64,
    pub sol: u32,
    pub camera: Camera,
    #[serde(default, with = "api_date_opt")]
    pub earth_date: Option<DateTime<Utc>>,
    #[serde(rename = "img_src", default)]
    pub image_url: String,
}

/// `GET /manifests/{rover}` response body
#[derive(Debug, Deserialize)]
pub(crate) struct ManifestEnvelope {
    pub photo_manifest: MarsRover,
}

/// `GET /rovers/{rover}/photos` response body
#[derive(Debug, Deserialize)]
pub(crate) struct PhotosEnvelope {
    pub photos: Vec<MarsPhotoReference>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format_api_date;
    use serde_json::json;

    fn manifest_json(status: &str) -> serde_json::Value {
        json!({
            "name": "Opportunity",
            "landing_date": "2004-01-25",
            "launch_date": "2003-07-07",
            "status": status,
            "max_sol": 5111,
            "max_date": "2018-06-11",
            "total_photos": 198439,
            "photos": [
                {"sol": 1, "earth_date": "2004-01-26", "total_photos": 95, "cameras": ["ENTRY", "FHAZ"]},
                {"sol": 3, "earth_date": "2004-01-28", "total_photos": 12, "cameras": ["PANCAM"]}
            ]
        })
    }

    #[test]
    fn test_decode_manifest() {
        let rover: MarsRover = serde_json::from_value(manifest_json("active")).unwrap();
        assert_eq!(rover.name, "Opportunity");
        assert_eq!(rover.status, RoverStatus::Active);
        assert_eq!(rover.max_sol, 5111);
        assert_eq!(rover.number_of_photos, 198439);
        assert_eq!(format_api_date(&rover.launch_date), "2003-07-07");
        assert_eq!(format_api_date(&rover.max_date), "2018-06-11");
        assert_eq!(rover.sol_descriptions.len(), 2);
        assert_eq!(rover.sol_descriptions[0].cameras, vec!["ENTRY", "FHAZ"]);
    }

    #[test]
    fn test_complete_status_maps_to_inactive() {
        let rover: MarsRover = serde_json::from_value(manifest_json("complete")).unwrap();
        assert_eq!(rover.status, RoverStatus::Inactive);

        let rover: MarsRover = serde_json::from_value(manifest_json("inactive")).unwrap();
        assert_eq!(rover.status, RoverStatus::Inactive);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(serde_json::from_value::<MarsRover>(manifest_json("sleeping")).is_err());
    }

    #[test]
    fn test_sol_description_lookup() {
        let rover: MarsRover = serde_json::from_value(manifest_json("active")).unwrap();
        assert_eq!(rover.sol_description(3).map(|d| d.total_photos), Some(12));
        assert!(rover.sol_description(2).is_none());
    }

    #[test]
    fn test_manifest_serializes_back_to_wire_names() {
        let rover: MarsRover = serde_json::from_value(manifest_json("active")).unwrap();
        let value = serde_json::to_value(&rover).unwrap();
        assert_eq!(value["total_photos"], 198439);
        assert_eq!(value["landing_date"], "2004-01-25");
        assert_eq!(value["photos"][1]["sol"], 3);
    }

    #[test]
    fn test_decode_photo_ignores_extra_fields() {
        let photo: MarsPhotoReference = serde_json::from_value(json!({
            "id": 102693,
            "sol": 1000,
            "camera": {"id": 20, "name": "FHAZ", "rover_id": 5, "full_name": "Front Hazard Avoidance Camera"},
            "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/fcam/FLB_486265257EDR_F0481570FHAZ00323M_.JPG",
            "earth_date": "2015-05-30",
            "rover": {"id": 5, "name": "Curiosity"}
        }))
        .unwrap();
        assert_eq!(photo.camera.name, "FHAZ");
        assert_eq!(
            photo.earth_date.map(|d| format_api_date(&d)).as_deref(),
            Some("2015-05-30")
        );
        assert!(photo.image_url.ends_with("FHAZ00323M_.JPG"));
    }

    #[test]
    fn test_decode_photo_with_only_id_sol_and_camera_id() {
        let photos: PhotosEnvelope = serde_json::from_value(json!({
            "photos": [{"id": 4477, "sol": 1, "camera": {"id": 22}}]
        }))
        .unwrap();

        let photo = &photos.photos[0];
        assert_eq!(photo.id, 4477);
        assert_eq!(photo.sol, 1);
        assert_eq!(photo.camera.id, 22);
        assert!(photo.camera.name.is_empty());
        assert!(photo.earth_date.is_none());
        assert!(photo.image_url.is_empty());
    }
}
