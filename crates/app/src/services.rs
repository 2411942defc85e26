//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod form_binder;
pub mod keyboard_navigator;
pub mod overlay_controller;
pub mod response_interpreter;
pub mod trigger_registry;
