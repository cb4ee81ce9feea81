pub mod controller;

pub use controller::{App, Screen};
