pub mod endpoints;
pub mod router;
