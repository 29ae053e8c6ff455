use crate::domain::customer::Customer;
use crate::domain::types::{Industry, Size};
use crate::query::params::QueryParams;

/// Conjunction of the optional categorical filters of a listing request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    pub size: Option<Size>,
    pub industry: Option<Industry>,
}

impl CustomerFilter {
    /// Returns `true` when the customer satisfies every supplied filter.
    pub fn matches(&self, customer: &Customer) -> bool {
        self.size.is_none_or(|size| customer.size() == size)
            && self.industry.is_none_or(|industry| customer.industry == industry)
    }

    /// Consumes the filter into a reusable predicate closure.
    pub fn into_predicate(self) -> impl Fn(&Customer) -> bool + Copy {
        move |customer| self.matches(customer)
    }
}

impl From<&QueryParams> for CustomerFilter {
    fn from(params: &QueryParams) -> Self {
        Self {
            size: params.size,
            industry: params.industry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{NewCustomer, RawAddress, RawContact};
    use crate::domain::types::CustomerId;

    fn customer(id: i32, employees: i32, industry: &str) -> Customer {
        NewCustomer::try_new(
            format!("Customer {id}"),
            employees,
            industry,
            RawContact::default(),
            RawAddress::default(),
        )
        .unwrap()
        .with_id(CustomerId::new(id).unwrap())
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = CustomerFilter::default();
        assert!(filter.matches(&customer(1, 5, "Retail")));
        assert!(filter.matches(&customer(2, 60_000, "Finance")));
    }

    #[test]
    fn size_filter_uses_derived_size() {
        let filter = CustomerFilter {
            size: Some(Size::Medium),
            industry: None,
        };
        assert!(filter.matches(&customer(1, 100, "Retail")));
        assert!(filter.matches(&customer(2, 999, "HR")));
        assert!(!filter.matches(&customer(3, 99, "Retail")));
        assert!(!filter.matches(&customer(4, 1_000, "Retail")));
    }

    #[test]
    fn filters_are_conjunctive() {
        let params = QueryParams {
            size: Some(Size::Enterprise),
            industry: Some(Industry::Retail),
            ..QueryParams::default()
        };
        let predicate = CustomerFilter::from(&params).into_predicate();

        assert!(predicate(&customer(1, 5_000, "Retail")));
        assert!(!predicate(&customer(2, 5_000, "Finance")));
        assert!(!predicate(&customer(3, 50, "Retail")));
    }
}
