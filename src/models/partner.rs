//! Partner, accommodation and rental unit records.

use serde::{Deserialize, Serialize};

/// A partner (landlord or park operator) with its accommodations.
///
/// # Example
///
/// ```rust
/// use travelbase_api::models::Partner;
///
/// let partner: Partner = serde_json::from_str(
///     r#"{"id": "12", "enabled": true, "companyName": "Dune Parks", "accommodations": []}"#,
/// ).unwrap();
///
/// assert_eq!(partner.id, "12");
/// assert!(partner.accommodations.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    /// The partner ID.
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,

    /// Whether the partner is active.
    pub enabled: bool,

    /// The registered company name.
    pub company_name: String,

    /// The partner's accommodations, in API order.
    pub accommodations: Vec<Accommodation>,
}

/// An accommodation (a park or building) grouping rental units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    /// The accommodation ID.
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,

    /// Whether the accommodation is bookable.
    pub enabled: bool,

    /// The display name.
    pub name: String,

    /// The rental units in this accommodation, in API order.
    pub rental_units: Vec<RentalUnit>,
}

/// A single bookable unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RentalUnit {
    /// The rental unit ID.
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,

    /// The display name.
    pub name: String,

    /// The partner's internal code for the unit.
    pub code: String,

    /// Whether the unit is bookable.
    pub enabled: bool,

    /// The unit type as reported by the API (e.g. `HOME`, `CAMPING_PITCH`).
    #[serde(rename = "type")]
    pub unit_type: String,

    /// Number of identical units that can be booked for the same date.
    pub max_allotment: u32,

    /// Number of guests included in the base price.
    pub included_occupancy: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rental_unit_maps_type_field() {
        let unit: RentalUnit = serde_json::from_value(json!({
            "id": 301,
            "name": "Beach house",
            "code": "BH-1",
            "enabled": true,
            "type": "HOME",
            "maxAllotment": 2,
            "includedOccupancy": 4
        }))
        .unwrap();

        assert_eq!(unit.id, "301");
        assert_eq!(unit.unit_type, "HOME");
        assert_eq!(unit.max_allotment, 2);
        assert_eq!(unit.included_occupancy, 4);
    }

    #[test]
    fn test_partner_nests_accommodations_in_order() {
        let partner: Partner = serde_json::from_value(json!({
            "id": "1",
            "enabled": true,
            "companyName": "Dune Parks",
            "accommodations": [
                {"id": "10", "enabled": true, "name": "North", "rentalUnits": []},
                {"id": "11", "enabled": false, "name": "South", "rentalUnits": [{
                    "id": "20", "name": "Chalet", "code": "C", "enabled": true,
                    "type": "HOME", "maxAllotment": 1, "includedOccupancy": 2
                }]}
            ]
        }))
        .unwrap();

        let names: Vec<&str> = partner
            .accommodations
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["North", "South"]);
        assert_eq!(partner.accommodations[1].rental_units[0].code, "C");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let accommodation: Accommodation = serde_json::from_value(json!({
            "id": "10",
            "enabled": true,
            "name": "North",
            "rentalUnits": [],
            "somethingNew": {"nested": true}
        }))
        .unwrap();

        assert_eq!(accommodation.name, "North");
    }

    #[test]
    fn test_missing_required_field_fails() {
        let result: Result<RentalUnit, _> = serde_json::from_value(json!({
            "id": "1",
            "name": "Chalet",
            "enabled": true
        }));

        assert!(result.is_err());
    }
}
