//! Controller layer: worker events and command orchestration for the map
//! screen.

pub mod events;
pub mod orchestration;
