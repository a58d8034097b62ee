use crate::value_objects::period::DatePeriod;
use serde::{Deserialize, Serialize};

/// Logistics facet of a shipment. `vakt_id` links it to the trade
/// submitted in the same iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoRecord {
    pub source: String,
    pub vakt_id: String,
    pub cargo_id: String,
    pub grade: String,
    pub parcels: Vec<Parcel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub id: String,
    pub laycan_period: DatePeriod,
    pub mode_of_transport: String,
    // The platform keeps the acronym capitalized on the wire.
    #[serde(rename = "vesselIMO")]
    pub vessel_imo: u64,
    pub vessel_name: String,
    pub loading_port: String,
    pub discharge_area: String,
    pub inspector: String,
    #[serde(rename = "deemedBLDate")]
    pub deemed_bl_date: String,
    pub quantity: u64,
}

#[cfg(test)]
mod tests {
    use crate::services::generator::base_cargo;

    #[test]
    fn cargo_serializes_with_platform_field_names() {
        let cargo = base_cargo();
        let json = serde_json::to_value(&cargo).expect("serialize cargo");

        for key in ["source", "vaktId", "cargoId", "grade", "parcels"] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }

        let parcel = &json["parcels"][0];
        for key in [
            "id",
            "laycanPeriod",
            "modeOfTransport",
            "vesselIMO",
            "vesselName",
            "loadingPort",
            "dischargeArea",
            "inspector",
            "deemedBLDate",
            "quantity",
        ] {
            assert!(parcel.get(key).is_some(), "missing parcel field {key}");
        }
    }
}
