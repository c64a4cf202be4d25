//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: Profile, Gender, field names and partial updates
//! - `store`: Store and persistence traits
//!
//! # Usage
//!
//! ```ignore
//! use profile_core::profile::{Profile, ProfileStore, ProfileUpdate};
//! ```

mod model;
mod store;

pub use model::{Gender, Profile, ProfileField, ProfileUpdate};
pub use store::{PersistenceGateway, ProfileStore};
