pub mod controller;
pub mod event;
