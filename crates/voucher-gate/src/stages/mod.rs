pub mod ownership;
pub mod pause;

pub use ownership::OwnershipStage;
pub use pause::PauseStage;
