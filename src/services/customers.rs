use crate::query::{CustomerPage, QueryParams, RawQuery, select_page};
use crate::repository::CustomerReader;
use crate::services::{ServiceError, ServiceResult};

/// Validates the raw query and returns the requested page of customers.
///
/// Validation runs before the repository is touched; a rejected request never
/// reads the dataset. The snapshot is read exactly once per call.
pub fn list_customers<R>(repo: &R, raw: &RawQuery) -> ServiceResult<CustomerPage>
where
    R: CustomerReader + ?Sized,
{
    let params = QueryParams::validate(raw).inspect_err(|err| {
        log::debug!("Rejected customer listing query: {err}");
    })?;

    let snapshot = repo.list_all_customers().map_err(|err| {
        log::error!("Failed to load customers: {err}");
        ServiceError::from(err)
    })?;

    Ok(select_page(&params, &snapshot))
}
