use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ContactEmail, ContactName, CustomerId, CustomerName, Employees, Industry, NonEmptyString,
    Size, TypeConstraintError,
};

/// Contact person attached to a customer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: ContactName,
    pub email: ContactEmail,
}

/// Postal address of a customer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Read-only customer record.
///
/// The size category is not a field: it is derived from `employees` on every
/// read through [`Customer::size`], so it cannot drift from the headcount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: CustomerName,
    pub employees: Employees,
    pub industry: Industry,
    pub contact_info: Option<ContactInfo>,
    pub address: Option<Address>,
}

impl Customer {
    /// Size category of the customer, always `classify(employees)`.
    pub const fn size(&self) -> Size {
        self.employees.size()
    }
}

/// Flat, unvalidated optional groups as they come from storage or CSV.
///
/// Every member is optional at this level; [`ContactInfo::from_parts`] and
/// [`Address::from_parts`] enforce the all-or-nothing rule.
#[derive(Clone, Debug, Default)]
pub struct RawContact {
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct RawAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl ContactInfo {
    /// Builds the contact group, returning `None` when every part is empty.
    pub fn from_parts(raw: RawContact) -> Result<Option<Self>, TypeConstraintError> {
        match (present(raw.contact_name), present(raw.contact_email)) {
            (None, None) => Ok(None),
            (Some(name), Some(email)) => Ok(Some(Self {
                name: ContactName::new(name)?,
                email: ContactEmail::new(email)?,
            })),
            _ => Err(TypeConstraintError::PartialGroup("contactInfo")),
        }
    }
}

impl Address {
    /// Builds the address group, returning `None` when every part is empty.
    pub fn from_parts(raw: RawAddress) -> Result<Option<Self>, TypeConstraintError> {
        let parts = [
            present(raw.street),
            present(raw.city),
            present(raw.state),
            present(raw.zip_code),
            present(raw.country),
        ];

        if parts.iter().all(Option::is_none) {
            return Ok(None);
        }

        let [Some(street), Some(city), Some(state), Some(zip_code), Some(country)] = parts else {
            return Err(TypeConstraintError::PartialGroup("address"));
        };

        Ok(Some(Self {
            street,
            city,
            state,
            zip_code,
            country,
        }))
    }
}

/// Validated customer awaiting insertion by the seeding tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub employees: Employees,
    pub industry: Industry,
    pub contact_info: Option<ContactInfo>,
    pub address: Option<Address>,
}

impl NewCustomer {
    /// Validates raw values applying the same rules used when loading rows.
    pub fn try_new(
        name: impl Into<String>,
        employees: i32,
        industry: &str,
        contact: RawContact,
        address: RawAddress,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: CustomerName::new(name)?,
            employees: Employees::try_from(employees)?,
            industry: NonEmptyString::new(industry)?.as_str().parse()?,
            contact_info: ContactInfo::from_parts(contact)?,
            address: Address::from_parts(address)?,
        })
    }

    /// Attaches a storage identifier producing a full [`Customer`].
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            employees: self.employees,
            industry: self.industry,
            contact_info: self.contact_info,
            address: self.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_address() -> RawAddress {
        RawAddress {
            street: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            zip_code: Some("62701".to_string()),
            country: Some("USA".to_string()),
        }
    }

    #[test]
    fn empty_groups_are_absent() {
        assert_eq!(ContactInfo::from_parts(RawContact::default()), Ok(None));
        assert_eq!(Address::from_parts(RawAddress::default()), Ok(None));

        let blanks = RawContact {
            contact_name: Some("  ".to_string()),
            contact_email: Some(String::new()),
        };
        assert_eq!(ContactInfo::from_parts(blanks), Ok(None));
    }

    #[test]
    fn partial_groups_are_rejected() {
        let contact = RawContact {
            contact_name: Some("Jane".to_string()),
            contact_email: None,
        };
        assert_eq!(
            ContactInfo::from_parts(contact),
            Err(TypeConstraintError::PartialGroup("contactInfo"))
        );

        let mut address = full_address();
        address.country = None;
        assert_eq!(
            Address::from_parts(address),
            Err(TypeConstraintError::PartialGroup("address"))
        );
    }

    #[test]
    fn full_groups_are_built() {
        let address = Address::from_parts(full_address()).unwrap().unwrap();
        assert_eq!(address.zip_code, "62701");

        let contact = ContactInfo::from_parts(RawContact {
            contact_name: Some("Jane".to_string()),
            contact_email: Some("Jane@Acme.io".to_string()),
        })
        .unwrap()
        .unwrap();
        assert_eq!(contact.email.as_str(), "jane@acme.io");
    }

    #[test]
    fn new_customer_validates_every_field() {
        let ok = NewCustomer::try_new(
            "Acme",
            120,
            "Retail",
            RawContact::default(),
            full_address(),
        )
        .unwrap();
        let customer = ok.with_id(CustomerId::new(1).unwrap());
        assert_eq!(customer.size(), Size::Medium);

        assert_eq!(
            NewCustomer::try_new("Acme", -3, "Retail", RawContact::default(), RawAddress::default()),
            Err(TypeConstraintError::NegativeEmployees)
        );
        assert_eq!(
            NewCustomer::try_new("Acme", 3, "Mining", RawContact::default(), RawAddress::default()),
            Err(TypeConstraintError::UnknownIndustry("Mining".to_string()))
        );
        assert_eq!(
            NewCustomer::try_new(" ", 3, "HR", RawContact::default(), RawAddress::default()),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
