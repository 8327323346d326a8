//! Shared test support for the backend crate.

pub mod logging;
