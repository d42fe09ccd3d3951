use serde::{Deserialize, Serialize};

/// Kilometers spanned by one degree of latitude.
const KM_PER_DEGREE_LATITUDE: f64 = 110.574;
/// Kilometers spanned by one degree of longitude at the equator.
const KM_PER_DEGREE_LONGITUDE: f64 = 111.320;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
	pub latitude: f64,
	pub longitude: f64,
}

/// A named area, centred on a point with a radius in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTag {
	pub name: String,
	pub centre: Location,
	pub radius_km: f64,
}

impl LocationTag {
	/// Whether `location` falls inside the tag's area.
	///
	/// The circle is projected to an ellipse in degrees, since a degree of
	/// longitude shrinks towards the poles.
	#[must_use]
	pub fn contains(&self, location: &Location) -> bool {
		let lat_axis = self.radius_km / KM_PER_DEGREE_LATITUDE;
		let lng_axis = self.radius_km
			/ (KM_PER_DEGREE_LONGITUDE * self.centre.latitude.to_radians().cos()).max(f64::EPSILON);

		let lat = (location.latitude - self.centre.latitude) / lat_axis;
		let lng = (location.longitude - self.centre.longitude) / lng_axis;

		lat.mul_add(lat, lng * lng) <= 1.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn paris() -> LocationTag {
		LocationTag {
			name: "Paris".to_string(),
			centre: Location {
				latitude: 48.8566,
				longitude: 2.3522,
			},
			radius_km: 10.0,
		}
	}

	#[test]
	fn containment() {
		let tag = paris();

		assert!(tag.contains(&tag.centre));
		// Louvre, ~1km away
		assert!(tag.contains(&Location {
			latitude: 48.8606,
			longitude: 2.3376,
		}));
		// Versailles, ~17km away
		assert!(!tag.contains(&Location {
			latitude: 48.8049,
			longitude: 2.1204,
		}));
	}
}
