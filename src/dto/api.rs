//! DTOs exposed by the `/customers` endpoint.

use serde::Serialize;

use crate::domain::customer::{Address, Customer};
use crate::domain::types::{Industry, Size};
use crate::pagination::PageInfo;
use crate::query::CustomerPage;

/// Contact person as rendered in JSON.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactInfoDto {
    pub name: String,
    pub email: String,
}

/// Customer as rendered in JSON, with the derived `size` filled in.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i32,
    pub name: String,
    pub employees: u32,
    pub size: Size,
    pub industry: Industry,
    pub contact_info: Option<ContactInfoDto>,
    pub address: Option<Address>,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.get(),
            size: customer.size(),
            name: customer.name.into_inner(),
            employees: customer.employees.get(),
            industry: customer.industry,
            contact_info: customer.contact_info.map(|contact| ContactInfoDto {
                name: contact.name.into_inner(),
                email: contact.email.into_inner(),
            }),
            address: customer.address,
        }
    }
}

/// Body of a successful `GET /customers` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersResponse {
    pub customers: Vec<CustomerDto>,
    pub page_info: PageInfo,
}

impl From<CustomerPage> for CustomersResponse {
    fn from(page: CustomerPage) -> Self {
        Self {
            customers: page.customers.into_iter().map(Into::into).collect(),
            page_info: page.page_info,
        }
    }
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
