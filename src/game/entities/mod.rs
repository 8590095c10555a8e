//! Game entities module.
//!
//! This module organizes player, policy, community and hazard entity logic.

pub mod player;
pub mod policy;
pub mod community;
pub mod hazard;

pub use player::*;
pub use policy::*;
pub use community::*;
pub use hazard::*;
