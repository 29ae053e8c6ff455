use diesel::prelude::*;

use crate::db::get_connection;
use crate::domain::customer::{Customer, NewCustomer};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, CustomerWriter, DieselRepository};

impl CustomerReader for DieselRepository {
    fn list_all_customers(&self) -> RepositoryResult<Vec<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = get_connection(&self.pool)?;

        let rows = customers::table
            .order(customers::id.asc())
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?;

        rows.into_iter()
            .map(|row| {
                let id = row.id;
                Customer::try_from(row).map_err(|err| {
                    log::error!("Customer #{id} failed integrity check: {err}");
                    RepositoryError::from(err)
                })
            })
            .collect()
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize> {
        use crate::models::customer::NewCustomer as DbNewCustomer;
        use crate::schema::customers;

        let mut conn = get_connection(&self.pool)?;
        let insertables: Vec<DbNewCustomer> = new_customers.iter().map(Into::into).collect();

        conn.transaction(|conn| {
            diesel::insert_into(customers::table)
                .values(&insertables)
                .execute(conn)
        })
        .map_err(RepositoryError::from)
    }

    fn delete_all_customers(&self) -> RepositoryResult<usize> {
        use crate::schema::customers;

        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::delete(customers::table).execute(&mut conn)?;
        Ok(affected)
    }
}
