//! Controller layer: UI events, form state, sync policy and command orchestration.

pub mod events;
pub mod form;
pub mod orchestration;
pub mod sync;
pub mod user_list;
