// Adapters layer: concrete implementations of the monitoring collaborator.

pub mod vivid_seats;
