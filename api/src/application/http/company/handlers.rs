pub mod get_companies;
pub mod get_countries;
