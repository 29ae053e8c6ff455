use diesel::prelude::*;

use crate::domain::customer::{
    Address, ContactInfo, Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    RawAddress, RawContact,
};
use crate::domain::types::{CustomerId, CustomerName, Employees, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub employees: i32,
    pub industry: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub employees: i32,
    pub industry: &'a str,
    pub contact_name: Option<&'a str>,
    pub contact_email: Option<&'a str>,
    pub street: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub zip_code: Option<&'a str>,
    pub country: Option<&'a str>,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(row: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::new(row.id)?,
            name: CustomerName::new(row.name)?,
            employees: Employees::try_from(row.employees)?,
            industry: row.industry.parse()?,
            contact_info: ContactInfo::from_parts(RawContact {
                contact_name: row.contact_name,
                contact_email: row.contact_email,
            })?,
            address: Address::from_parts(RawAddress {
                street: row.street,
                city: row.city,
                state: row.state,
                zip_code: row.zip_code,
                country: row.country,
            })?,
        })
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        let contact = customer.contact_info.as_ref();
        let address = customer.address.as_ref();
        Self {
            name: customer.name.as_str(),
            employees: customer.employees.into(),
            industry: customer.industry.as_str(),
            contact_name: contact.map(|c| c.name.as_str()),
            contact_email: contact.map(|c| c.email.as_str()),
            street: address.map(|a| a.street.as_str()),
            city: address.map(|a| a.city.as_str()),
            state: address.map(|a| a.state.as_str()),
            zip_code: address.map(|a| a.zip_code.as_str()),
            country: address.map(|a| a.country.as_str()),
        }
    }
}
