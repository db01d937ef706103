pub mod vehicle_controller;
