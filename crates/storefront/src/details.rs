/// Product detail bullet points, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsList {
    details: Vec<String>,
}

impl DetailsList {
    pub fn new(details: impl Into<Vec<String>>) -> Self {
        Self {
            details: details.into(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.details
    }

    /// One bullet line per detail.
    pub fn lines(&self) -> Vec<String> {
        self.details.iter().map(|d| format!("- {d}")).collect()
    }
}
