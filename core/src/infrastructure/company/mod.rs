pub mod mappers;
pub mod repositories;

pub use repositories::company_repository::PostgresCompanyRepository;
