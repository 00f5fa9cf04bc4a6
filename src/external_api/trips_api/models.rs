pub mod trip;
pub mod response_trips;
