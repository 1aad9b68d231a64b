pub mod model;
pub mod repository;

pub use model::{DeletedVehicle, NewVehicle, Vehicle, VehiclePatch};
pub use repository::VehicleRepository;
