pub mod in_memory_profile_store;
pub mod settings_service;
pub mod simulated_persistence;

pub use crate::in_memory_profile_store::InMemoryProfileStore;
pub use crate::settings_service::SettingsService;
pub use crate::simulated_persistence::SimulatedPersistence;
