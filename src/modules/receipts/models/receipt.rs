use serde::{Deserialize, Serialize};

/// One utility line on the printed receipt, every field display-formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub name: String,
    pub previous: String,
    pub current: String,
    pub units: String,
    pub price: String,
    pub amount: String,
}

/// Printable receipt document.
///
/// Field names follow the PDF template's camelCase contract; the template
/// itself carries the fixed Thai layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub house_number: String,
    pub month: String,
    pub year: String,
    pub items: Vec<ReceiptItem>,
    pub internet: String,
    pub house_rent: String,
    pub total: String,
}

impl Receipt {
    /// Download filename for the rendered PDF; spaces in the house number
    /// become underscores
    pub fn filename(&self) -> String {
        format!(
            "receipt_{}_{}_{}.pdf",
            self.house_number.replace(' ', "_"),
            self.month,
            self.year
        )
    }
}
