//! Customer listing query: parameter validation, filtering and page assembly.

use crate::domain::customer::Customer;
use crate::pagination::{PageInfo, paginate};

pub mod filter;
pub mod params;

pub use filter::CustomerFilter;
pub use params::{QueryParams, RawQuery, ValidationError};

/// One page of customers together with its pagination metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerPage {
    pub customers: Vec<Customer>,
    pub page_info: PageInfo,
}

/// Filters `snapshot` by the validated parameters and cuts out the requested page.
///
/// The relative order of `snapshot` is preserved. Counting and slicing run over
/// the same filtered sequence so `page_info` always describes `customers`.
pub fn select_page(params: &QueryParams, snapshot: &[Customer]) -> CustomerPage {
    let predicate = CustomerFilter::from(params).into_predicate();

    let matching: Vec<&Customer> = snapshot
        .iter()
        .filter(|&customer| predicate(customer))
        .collect();
    let window = paginate(matching.len(), params.page, params.limit);

    let customers = matching
        .get(window.range())
        .unwrap_or_default()
        .iter()
        .map(|customer| (*customer).clone())
        .collect();

    CustomerPage {
        customers,
        page_info: window.info,
    }
}
