//! Approximate coordinates for a parsed address

use crate::reference::ReferenceData;
use address_types::Coordinates;

/// Resolves coordinates from the city table, then region centroids, then the
/// country center. Always yields a pair.
pub struct CoordinateResolver<'a> {
    reference: &'a ReferenceData,
}

impl<'a> CoordinateResolver<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    pub fn resolve(&self, city: Option<&str>, region: Option<&str>) -> Coordinates {
        if let Some(point) = city.and_then(|c| self.reference.city_coordinates.get(c)) {
            return *point;
        }

        if let Some(point) = region.and_then(|r| self.reference.region_coordinates.get(r)) {
            return *point;
        }

        log::debug!(
            "No coordinates for city {:?} / region {:?}, using country center",
            city,
            region
        );
        self.reference.country_center
    }
}
