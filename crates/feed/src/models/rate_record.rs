use serde::Serialize;
use std::fmt;

use crate::constants::BASE_CURRENCY;
use crate::extract::TitleFields;

/// One exchange-rate quote recovered from a feed `<item>`.
///
/// Records are read-only once built. The rate is expressed as units of the
/// target currency per one unit of [`BASE_CURRENCY`].
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    target_code: Option<String>,
    currency_name: Option<String>,
    rate: Option<f64>,
    pub_date: Option<String>,
    raw_title: Option<String>,
    raw_description: Option<String>,
}

impl RateRecord {
    pub fn builder() -> RateRecordBuilder {
        RateRecordBuilder::default()
    }

    /// The feed's implicit base currency.
    pub fn base_code(&self) -> &'static str {
        BASE_CURRENCY
    }

    pub fn target_code(&self) -> Option<&str> {
        self.target_code.as_deref()
    }

    pub fn currency_name(&self) -> Option<&str> {
        self.currency_name.as_deref()
    }

    /// The quoted rate, or `0.0` when the description held no usable number.
    pub fn rate(&self) -> f64 {
        self.rate.unwrap_or(0.0)
    }

    /// Whether the description yielded a rate at all.
    pub fn has_rate(&self) -> bool {
        self.rate.is_some()
    }

    pub fn pub_date(&self) -> Option<&str> {
        self.pub_date.as_deref()
    }

    pub fn raw_title(&self) -> Option<&str> {
        self.raw_title.as_deref()
    }

    pub fn raw_description(&self) -> Option<&str> {
        self.raw_description.as_deref()
    }

    /// Row label, e.g. `"Rate: 4.8074 per 1 GBP"`.
    pub fn rate_label(&self) -> String {
        format!("Rate: {:.4} per 1 {}", self.rate(), BASE_CURRENCY)
    }
}

impl fmt::Display for RateRecord {
    /// Formats as `"AED : 4.8074 (United Arab Emirates Dirham)"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {:.4} ({})",
            self.target_code.as_deref().unwrap_or("-"),
            self.rate(),
            self.currency_name.as_deref().unwrap_or("-")
        )
    }
}

/// Accumulates fields while an `<item>` is open.
#[derive(Debug, Default)]
pub struct RateRecordBuilder {
    record: RateRecord,
}

impl RateRecordBuilder {
    pub fn target_code(mut self, code: impl Into<String>) -> Self {
        self.record.target_code = Some(code.into());
        self
    }

    pub fn currency_name(mut self, name: impl Into<String>) -> Self {
        self.record.currency_name = Some(name.into());
        self
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.record.rate = Some(rate);
        self
    }

    pub fn pub_date(mut self, pub_date: impl Into<String>) -> Self {
        self.record.pub_date = Some(pub_date.into());
        self
    }

    pub fn raw_title(mut self, title: impl Into<String>) -> Self {
        self.record.raw_title = Some(title.into());
        self
    }

    pub fn raw_description(mut self, description: impl Into<String>) -> Self {
        self.record.raw_description = Some(description.into());
        self
    }

    /// Applies whatever the title extractor recovered; absent fields are left as they are.
    pub(crate) fn title_fields(mut self, fields: TitleFields) -> Self {
        if let Some(code) = fields.target_code {
            self.record.target_code = Some(code);
        }
        if let Some(name) = fields.currency_name {
            self.record.currency_name = Some(name);
        }
        self
    }

    pub fn build(self) -> RateRecord {
        self.record
    }
}
