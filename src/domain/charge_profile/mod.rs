pub mod model;
pub mod repository;

pub use model::{
    ChargeDifficulty, ChargeProfile, ChargeProfilePatch, DeletedChargeProfile, NewChargeProfile,
    RangeStandard,
};
pub use repository::ChargeProfileRepository;
