mod delete_generation;
mod generate_content;
mod list_history;

pub use delete_generation::*;
pub use generate_content::*;
pub use list_history::*;
