//! Mock Parse Response
//!
//! The fixed payload returned for every upload. A real deployment would swap
//! this for the structured output of a vision-language model; the shape of
//! `ParseResponse` is the contract the pharmacy frontend codes against.

use serde::{Deserialize, Serialize};

/// One medication line extracted from a prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub strength: String,
    pub quantity: u32,
    pub frequency: String,
    pub timing: String,
    pub duration: String,
}

/// Result of parsing a prescription image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResponse {
    pub status: String,
    pub medications: Vec<Medication>,
    pub extracted_text: String,
    pub confidence_score: f64,
}

impl ParseResponse {
    /// The canned parse result, identical for every request.
    pub fn mock() -> Self {
        Self {
            status: "success".to_string(),
            medications: vec![
                Medication {
                    name: "Amoxicillin".to_string(),
                    strength: "500mg".to_string(),
                    quantity: 15,
                    frequency: "Twice daily".to_string(),
                    timing: "After meals".to_string(),
                    duration: "7 days".to_string(),
                },
                Medication {
                    name: "Paracetamol".to_string(),
                    strength: "500mg".to_string(),
                    quantity: 10,
                    frequency: "As needed".to_string(),
                    timing: "After meals".to_string(),
                    duration: "3 days".to_string(),
                },
                Medication {
                    name: "Vitamin C".to_string(),
                    strength: "100mg".to_string(),
                    quantity: 30,
                    frequency: "Once daily".to_string(),
                    timing: "Morning".to_string(),
                    duration: "30 days".to_string(),
                },
            ],
            extracted_text: "Amoxicillin 500mg BD x 7 days\nParacetamol 500mg PRN for fever\nVit C 100mg OD".to_string(),
            confidence_score: 0.92,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_has_three_medications() {
        let response = ParseResponse::mock();
        assert_eq!(response.status, "success");
        assert_eq!(response.medications.len(), 3);
        assert!(!response.extracted_text.is_empty());
        assert_eq!(response.confidence_score, 0.92);
    }

    #[test]
    fn mock_is_stable_across_calls() {
        assert_eq!(ParseResponse::mock(), ParseResponse::mock());
    }

    #[test]
    fn serializes_with_expected_field_names() {
        let json = serde_json::to_value(ParseResponse::mock()).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["medications"][0]["name"], "Amoxicillin");
        assert_eq!(json["medications"][0]["quantity"], 15);
        assert_eq!(json["medications"][2]["strength"], "100mg");
        assert_eq!(json["confidence_score"], 0.92);
    }
}
