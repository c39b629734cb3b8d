//! Registry containers.
//!
//! Two configurations, chosen once per deployment:
//!
//! | Configuration | Type | Access | Locking |
//! |---------------|------|--------|---------|
//! | Single-owner | [`Registry`] | `&mut self` mutators | none |
//! | Shared | [`SharedRegistry`] | `&self` everywhere | internal `RwLock` |
//!
//! Both hand out the same lookup contract: [`get`](Registry::get) returns a
//! cloned [`Arc`](std::sync::Arc) handle that keeps the resource alive
//! independently of later removals, and absence is a first-class `None` —
//! never a sentinel resource.

mod owned;
mod shared;

pub use owned::Registry;
pub use shared::SharedRegistry;
