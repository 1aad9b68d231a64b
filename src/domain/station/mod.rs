pub mod model;
pub mod repository;

pub use model::{ConnectorType, DeletedStation, NewStation, Station, StationPatch};
pub use repository::StationRepository;
