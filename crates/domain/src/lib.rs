//! # gallery-domain
//!
//! Pure domain model for the gallery client-side interaction layer.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the tagged **fragment response** protocol (`display` / `redirect`)
//! - Define the **modal session** state machine (`Closed` → `Unbound` → `Bound`)
//! - Define **triggers** (page affordances that start a modal or fire-once flow)
//! - Define the ordered **navigation index** used for arrow-key navigation
//! - Define **form submissions** and transport **requests**
//! - Cache-busting of refreshed photo sources
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod form;
pub mod markup;
pub mod navigation;
pub mod photo;
pub mod response;
pub mod session;
pub mod trigger;
