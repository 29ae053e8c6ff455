//! Parsing of raw `GET /customers` query-string values.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::types::{Industry, Size};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Rejection produced when the request's query parameters are unusable.
///
/// The display string is returned to clients verbatim in the `error` field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("query string could not be decoded: {0}")]
    Malformed(String),

    #[error("parameter `{0}` must not be supplied more than once")]
    Repeated(&'static str),

    #[error("invalid `page` value {0:?}: expected an integer greater than or equal to 1")]
    InvalidPage(String),

    #[error("invalid `limit` value {0:?}: expected an integer greater than or equal to 1")]
    InvalidLimit(String),

    #[error(
        "invalid `size` value {0:?}: expected one of Small, Medium, Enterprise, \
         Large Enterprise, Very Large Enterprise"
    )]
    InvalidSize(String),

    #[error(
        "invalid `industry` value {0:?}: expected one of Logistics, Retail, Technology, HR, Finance"
    )]
    InvalidIndustry(String),
}

/// Query string decoded into ordered key/value pairs.
///
/// Keys may repeat; validation decides what a repeated key means.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawQuery {
    pairs: Vec<(String, String)>,
}

impl RawQuery {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Returns every value supplied for `key`, in order of appearance.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the single value for `key`, `None` when absent.
    fn single(&self, key: &'static str) -> Result<Option<&str>, ValidationError> {
        let mut values = self.values(key);
        let first = values.next();
        if values.next().is_some() {
            return Err(ValidationError::Repeated(key));
        }
        Ok(first)
    }
}

impl<K, V> FromIterator<(K, V)> for RawQuery
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Validated parameters of a customer listing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryParams {
    pub page: usize,
    pub limit: usize,
    pub size: Option<Size>,
    pub industry: Option<Industry>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_ITEMS_PER_PAGE,
            size: None,
            industry: None,
        }
    }
}

/// Parses a strictly positive base-10 integer with no surrounding characters.
fn parse_positive(value: &str) -> Option<usize> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<usize>().ok().filter(|n| *n >= 1)
}

fn parse_member<T: FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

impl QueryParams {
    /// Validates `page`, `limit`, `size` and `industry` in that order.
    ///
    /// The first failing parameter decides the error. Unknown keys are ignored.
    pub fn validate(raw: &RawQuery) -> Result<Self, ValidationError> {
        let defaults = Self::default();

        let page = match raw.single("page")? {
            Some(value) => parse_positive(value)
                .ok_or_else(|| ValidationError::InvalidPage(value.to_string()))?,
            None => defaults.page,
        };

        let limit = match raw.single("limit")? {
            Some(value) => parse_positive(value)
                .ok_or_else(|| ValidationError::InvalidLimit(value.to_string()))?,
            None => defaults.limit,
        };

        let size = raw
            .single("size")?
            .map(|value| {
                parse_member::<Size>(value)
                    .ok_or_else(|| ValidationError::InvalidSize(value.to_string()))
            })
            .transpose()?;

        let industry = raw
            .single("industry")?
            .map(|value| {
                parse_member::<Industry>(value)
                    .ok_or_else(|| ValidationError::InvalidIndustry(value.to_string()))
            })
            .transpose()?;

        Ok(Self {
            page,
            limit,
            size,
            industry,
        })
    }
}
