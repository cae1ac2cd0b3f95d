pub mod rest;
pub mod service;
