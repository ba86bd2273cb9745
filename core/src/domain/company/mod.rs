pub mod entities;
pub mod ports;
pub mod query;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::{CompanyRecord, CountryTable};
pub use ports::{CompanyRepository, CompanyService};
pub use query::{QueryComposer, QueryPlan};
pub use schema::{SchemaResolver, TableSelection};
