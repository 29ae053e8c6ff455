//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, closed categorical sets) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Employee headcount below zero.
    #[error("employees must not be negative")]
    NegativeEmployees,
    /// Value is not a member of the closed size set.
    #[error("unknown size: {0}")]
    UnknownSize(String),
    /// Value is not a member of the closed industry set.
    #[error("unknown industry: {0}")]
    UnknownIndustry(String),
    /// Only some fields of an optional group were supplied.
    #[error("{0} must be either fully populated or absent")]
    PartialGroup(&'static str),
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Unique identifier for a customer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(i32);

impl CustomerId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for CustomerId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerId> for i32 {
    fn from(value: CustomerId) -> Self {
        value.0
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    CustomerName,
    "Customer display name enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    ContactName,
    "Contact person name enforcing trimmed, non-empty values."
);

/// Lower-cased and validated contact email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ContactEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ContactEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Headcount of a customer organisation. Never negative.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Employees(u32);

impl Employees {
    /// Wraps an already non-negative headcount.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw headcount.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Size category derived from this headcount.
    pub const fn size(self) -> Size {
        classify(self.0)
    }
}

impl TryFrom<i32> for Employees {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| TypeConstraintError::NegativeEmployees)
    }
}

impl From<Employees> for i32 {
    fn from(value: Employees) -> Self {
        i32::try_from(value.0).unwrap_or(i32::MAX)
    }
}

/// Company size category derived from the employee headcount.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    Small,
    Medium,
    Enterprise,
    #[serde(rename = "Large Enterprise")]
    LargeEnterprise,
    #[serde(rename = "Very Large Enterprise")]
    VeryLargeEnterprise,
}

impl Size {
    /// Every size category, smallest first.
    pub const ALL: [Size; 5] = [
        Size::Small,
        Size::Medium,
        Size::Enterprise,
        Size::LargeEnterprise,
        Size::VeryLargeEnterprise,
    ];

    /// Wire name, also accepted by the `size` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Enterprise => "Enterprise",
            Size::LargeEnterprise => "Large Enterprise",
            Size::VeryLargeEnterprise => "Very Large Enterprise",
        }
    }

    /// Inclusive lower bound of the headcount interval for this category.
    pub const fn min_employees(self) -> u32 {
        match self {
            Size::Small => 0,
            Size::Medium => 100,
            Size::Enterprise => 1_000,
            Size::LargeEnterprise => 10_000,
            Size::VeryLargeEnterprise => 50_000,
        }
    }
}

/// Maps an employee headcount to its size category.
///
/// Intervals are half-open with an inclusive lower bound, so `100` is
/// `Medium` and `99` is `Small`.
pub const fn classify(employees: u32) -> Size {
    match employees {
        0..100 => Size::Small,
        100..1_000 => Size::Medium,
        1_000..10_000 => Size::Enterprise,
        10_000..50_000 => Size::LargeEnterprise,
        _ => Size::VeryLargeEnterprise,
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| TypeConstraintError::UnknownSize(s.to_string()))
    }
}

/// Industry a customer operates in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Industry {
    Logistics,
    Retail,
    Technology,
    #[serde(rename = "HR")]
    Hr,
    Finance,
}

impl Industry {
    /// Every industry in declaration order.
    pub const ALL: [Industry; 5] = [
        Industry::Logistics,
        Industry::Retail,
        Industry::Technology,
        Industry::Hr,
        Industry::Finance,
    ];

    /// Wire name, also accepted by the `industry` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Industry::Logistics => "Logistics",
            Industry::Retail => "Retail",
            Industry::Technology => "Technology",
            Industry::Hr => "HR",
            Industry::Finance => "Finance",
        }
    }
}

impl Display for Industry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .into_iter()
            .find(|industry| industry.as_str() == s)
            .ok_or_else(|| TypeConstraintError::UnknownIndustry(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_respects_interval_boundaries() {
        assert_eq!(classify(0), Size::Small);
        assert_eq!(classify(99), Size::Small);
        assert_eq!(classify(100), Size::Medium);
        assert_eq!(classify(999), Size::Medium);
        assert_eq!(classify(1_000), Size::Enterprise);
        assert_eq!(classify(9_999), Size::Enterprise);
        assert_eq!(classify(10_000), Size::LargeEnterprise);
        assert_eq!(classify(49_999), Size::LargeEnterprise);
        assert_eq!(classify(50_000), Size::VeryLargeEnterprise);
        assert_eq!(classify(u32::MAX), Size::VeryLargeEnterprise);
    }

    #[test]
    fn classify_agrees_with_lower_bounds() {
        for size in Size::ALL {
            assert_eq!(classify(size.min_employees()), size);
        }
    }

    #[test]
    fn size_parsing_is_exact_and_case_sensitive() {
        assert_eq!("Large Enterprise".parse::<Size>(), Ok(Size::LargeEnterprise));
        assert_eq!(
            "small".parse::<Size>(),
            Err(TypeConstraintError::UnknownSize("small".to_string()))
        );
        assert!("Tiny".parse::<Size>().is_err());
        assert!(" Small".parse::<Size>().is_err());
    }

    #[test]
    fn industry_parsing_is_exact_and_case_sensitive() {
        assert_eq!("HR".parse::<Industry>(), Ok(Industry::Hr));
        assert!("technology".parse::<Industry>().is_err());
        assert!("Agriculture".parse::<Industry>().is_err());
    }

    #[test]
    fn enums_serialize_to_display_labels() {
        assert_eq!(
            serde_json::to_string(&Size::VeryLargeEnterprise).unwrap(),
            "\"Very Large Enterprise\""
        );
        assert_eq!(serde_json::to_string(&Industry::Hr).unwrap(), "\"HR\"");
        for industry in Industry::ALL {
            let json = serde_json::to_string(&industry).unwrap();
            assert_eq!(json, format!("\"{industry}\""));
        }
    }

    #[test]
    fn employees_reject_negative_values() {
        assert_eq!(
            Employees::try_from(-1),
            Err(TypeConstraintError::NegativeEmployees)
        );
        assert_eq!(Employees::try_from(250).unwrap().size(), Size::Medium);
    }

    #[test]
    fn contact_email_is_normalized() {
        let email = ContactEmail::new("  Jane.Doe@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "jane.doe@example.com");
        assert_eq!(
            ContactEmail::new("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn customer_id_must_be_positive() {
        assert!(CustomerId::new(0).is_err());
        assert_eq!(CustomerId::new(7).unwrap().get(), 7);
    }
}
