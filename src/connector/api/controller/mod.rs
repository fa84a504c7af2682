pub mod generate_controller;
pub mod history_controller;

pub use generate_controller::GenerateController;
pub use history_controller::HistoryController;
