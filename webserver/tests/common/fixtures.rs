//! Test fixtures for webserver tests

use shared::LogicModelDataset;

pub struct TestFixtures;

impl TestFixtures {
    pub const ECONOMIC: &'static str = "Economic Vitality";
    pub const HEALTH: &'static str = "Health";

    /// Three strategies; tutoring belongs to education and economic vitality
    pub fn dataset_json() -> &'static str {
        r#"{
            "headerTooltips": ["Resources", "Pillars", "Activities", "Products", "Short", "Medium", "Impact"],
            "inputs": ["Funding", "Staff"],
            "inputTooltips": ["Grants and donations"],
            "pbcComponents": ["Economic Vitality", "Health", "Education"],
            "strategies": {
                "Job Training": {
                    "label": "Job Training",
                    "details": "Workforce programs",
                    "pbcComponents": [0],
                    "partners": [0],
                    "outputs": [0],
                    "longTermOutputs": [0]
                },
                "Mobile Clinics": {
                    "label": "Mobile Clinics",
                    "details": "Care where people live",
                    "pbcComponents": [1],
                    "partners": [1, 0],
                    "outputs": [1],
                    "longTermOutputs": [0]
                },
                "After-School Tutoring": {
                    "label": "After-School Tutoring",
                    "details": "",
                    "pbcComponents": [2, 0],
                    "partners": [2],
                    "outputs": [2],
                    "longTermOutputs": [0]
                }
            },
            "partners": ["City", "Hospital", "School District"],
            "outputs": ["Graduates", "Clinic visits", "Tutoring hours"],
            "immediateOutputs": [],
            "intermediateOutputs": [],
            "longTermOutputs": ["Thriving community"]
        }"#
    }

    pub fn dataset() -> LogicModelDataset {
        LogicModelDataset::from_json_str(Self::dataset_json()).expect("fixture dataset is valid")
    }

    pub fn index_html() -> &'static str {
        "<!DOCTYPE html><html><body>dashboard</body></html>"
    }
}
