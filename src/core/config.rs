use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Due date offset applied to invoices when nothing else is configured.
pub const DEFAULT_DUE_DATE_OFFSET_DAYS: u64 = 30;

/// UNTDID 4461 payment means code written to `PaymentMeans`.
pub const DEFAULT_PAYMENT_MEANS_CODE: &str = "1";

/// Inputs that are not part of the business document itself.
///
/// The generator never reads the clock; the issue date comes from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// BT-2: Issue date of the generated document.
    pub issue_date: NaiveDate,
    /// Days between issue date and due date (invoices only).
    pub due_date_offset_days: u64,
    /// UNTDID 4461 payment means code.
    pub payment_means_code: String,
}

impl GeneratorConfig {
    /// Configuration issuing on the given date with default offsets.
    pub fn for_date(issue_date: NaiveDate) -> Self {
        Self {
            issue_date,
            due_date_offset_days: DEFAULT_DUE_DATE_OFFSET_DAYS,
            payment_means_code: DEFAULT_PAYMENT_MEANS_CODE.to_string(),
        }
    }

    /// Configuration issuing on the local current date.
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub fn due_date_offset_days(mut self, days: u64) -> Self {
        self.due_date_offset_days = days;
        self
    }

    pub fn payment_means_code(mut self, code: impl Into<String>) -> Self {
        self.payment_means_code = code.into();
        self
    }

    /// BT-9: Issue date plus the configured offset.
    ///
    /// Saturates at the issue date if the offset leaves the calendar range.
    pub fn due_date(&self) -> NaiveDate {
        self.issue_date
            .checked_add_days(Days::new(self.due_date_offset_days))
            .unwrap_or(self.issue_date)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::today()
    }
}
