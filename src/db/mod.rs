pub mod history_repository;
pub mod venue_repository;
