use sea_orm::{DbErr, QueryResult};

use crate::domain::company::entities::CompanyRecord;

impl TryFrom<&QueryResult> for CompanyRecord {
    type Error = DbErr;

    fn try_from(row: &QueryResult) -> Result<Self, Self::Error> {
        // `company.id` may be declared as either integer or bigint.
        let id = row
            .try_get::<i64>("", "id")
            .or_else(|_| row.try_get::<i32>("", "id").map(i64::from))?;

        Ok(Self {
            id,
            table_name: row.try_get("", "table_name")?,
            name: row.try_get("", "name")?,
            city: row.try_get("", "city")?,
            country: row.try_get("", "country")?,
        })
    }
}
