//! Actor system: long-lived tasks reached through cloneable handles.

pub mod messages;
pub mod trainer;
pub mod traits;

pub use messages::{ActorError, TrainerMessage};
pub use trainer::TrainerActorHandle;
pub use traits::TrainingActor;
