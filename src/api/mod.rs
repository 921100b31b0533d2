pub mod handlers;
pub mod params;
pub mod router;
