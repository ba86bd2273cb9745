pub mod repositories;

pub use repositories::PostgresHealthCheckRepository;
