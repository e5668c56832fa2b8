pub mod well_repo;

pub use well_repo::WellRepo;
