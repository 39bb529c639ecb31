//! Shared Kernel - Domain-crossing minimal core
//!
//! The vocabulary every backend crate agrees on:
//! - [`error::app_error::AppError`], the problem body every crate renders
//! - [`error::kind::ErrorKind`], the HTTP-facing error classification
//!
//! Crates keep their own `thiserror` enums and convert into [`AppError`]
//! at the HTTP boundary so every failure renders the same problem body.
//!
//! [`AppError`]: error::app_error::AppError

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
