use serde::Serialize;

/// One store location scraped from a record page
///
/// Fields missing on the source page are empty strings, never absent. The
/// field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub street: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub latitude: String,
    pub longitude: String,
}

impl Record {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 7] = [
        "name",
        "street",
        "suburb",
        "state",
        "postcode",
        "latitude",
        "longitude",
    ];

    /// Returns true when no field carried a value
    ///
    /// This is what a listing page misclassified as a record page produces.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.street.is_empty()
            && self.suburb.is_empty()
            && self.state.is_empty()
            && self.postcode.is_empty()
            && self.latitude.is_empty()
            && self.longitude.is_empty()
    }
}
