//! Settings shared by the table, the analytics views and the command line.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, pagination::PaginationConfig, range::DateRange, table::TableConfig,
    timezone::today_in_timezone,
};

/// The application settings.
///
/// Every field has a default, so a config file only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The canonical timezone used to work out "today", e.g. "Pacific/Auckland".
    pub timezone: String,
    /// The ISO 4217 code amounts are shown in.
    pub currency_code: String,
    /// The log level used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Page size defaults and the page indicator width.
    pub pagination: PaginationConfig,
    /// Cell rendering limits.
    pub table: TableConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "Etc/UTC".to_owned(),
            currency_code: "USD".to_owned(),
            log_level: "info".to_owned(),
            pagination: PaginationConfig::default(),
            table: TableConfig::default(),
        }
    }
}

impl Config {
    /// Parse a config from JSON text and validate it.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidConfig] if the text is not valid JSON for a
    /// config or if [Config::validate] fails.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: Config =
            serde_json::from_str(text).map_err(|error| Error::InvalidConfig(error.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    /// Read a config from the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [Error::Io] if the file cannot be read, otherwise see [Config::from_json].
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        tracing::debug!("Loaded config from {}", path.display());

        Self::from_json(&text)
    }

    /// Check that the values make sense together.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidConfig] for an empty currency code, a zero page
    /// size or a default page size that is not one of the page size options,
    /// and [Error::InvalidTimezoneError] for an unknown timezone.
    pub fn validate(&self) -> Result<(), Error> {
        if self.currency_code.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "the currency code cannot be empty".to_owned(),
            ));
        }

        let pagination = &self.pagination;
        if pagination.default_page_size == 0 || pagination.page_size_options.contains(&0) {
            return Err(Error::InvalidConfig(
                "page sizes must be greater than zero".to_owned(),
            ));
        }

        if !pagination.page_size_options.is_empty()
            && !pagination
                .page_size_options
                .contains(&pagination.default_page_size)
        {
            return Err(Error::InvalidConfig(format!(
                "the default page size {} is not one of the page size options {:?}",
                pagination.default_page_size, pagination.page_size_options
            )));
        }

        if self.table.max_text_length == 0 {
            return Err(Error::InvalidConfig(
                "the maximum text length must be greater than zero".to_owned(),
            ));
        }

        today_in_timezone(&self.timezone)?;

        Ok(())
    }

    /// The calendar month containing today in the configured timezone.
    ///
    /// Used as the date range when the caller does not pick one.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidTimezoneError] if the timezone is not known.
    pub fn default_date_range(&self) -> Result<DateRange, Error> {
        let today = today_in_timezone(&self.timezone)?;

        Ok(DateRange::month_of(today))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, config::Config};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"currency_code": "EUR"}"#).unwrap();

        assert_eq!(config.currency_code, "EUR");
        assert_eq!(config.timezone, "Etc/UTC");
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.table.max_text_length, 60);
    }

    #[test]
    fn nested_sections_can_be_overridden() {
        let config = Config::from_json(
            r#"{"pagination": {"default_page_size": 20}, "table": {"max_text_length": 32}}"#,
        )
        .unwrap();

        assert_eq!(config.pagination.default_page_size, 20);
        assert_eq!(config.pagination.page_size_options, vec![10, 20, 30, 40, 50]);
        assert_eq!(config.table.max_text_length, 32);
    }

    #[test]
    fn rejects_malformed_json() {
        let got = Config::from_json("{currency_code: EUR}");

        assert!(matches!(got, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_page_size() {
        let got = Config::from_json(r#"{"pagination": {"default_page_size": 0}}"#);

        assert!(matches!(got, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_default_page_size_outside_options() {
        let got = Config::from_json(r#"{"pagination": {"default_page_size": 15}}"#);

        assert!(matches!(got, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_currency_code() {
        let got = Config::from_json(r#"{"currency_code": " "}"#);

        assert!(matches!(got, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_unknown_timezone() {
        let got = Config::from_json(r#"{"timezone": "Nowhere/Special"}"#);

        assert_eq!(
            got,
            Err(Error::InvalidTimezoneError("Nowhere/Special".to_owned()))
        );
    }

    #[test]
    fn default_date_range_contains_today() {
        let config = Config::default();
        let today = time::OffsetDateTime::now_utc().date();

        let range = config.default_date_range().unwrap();

        assert!(range.contains(today));
        assert_eq!(range.start().day(), 1);
    }
}
