//! HTTP request handlers.
//!
//! Each handler authenticates through [`AuthGuard`](crate::server::middleware::auth::AuthGuard)
//! where required, converts the request DTO into operation parameters, calls the
//! matching service and converts the result back into a response DTO.

pub mod cart;
pub mod category;
pub mod food;
pub mod user;

#[cfg(test)]
mod test;
