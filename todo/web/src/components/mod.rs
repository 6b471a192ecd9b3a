mod error_message;
mod header;
mod loading_spinner;
mod task_card;
mod task_form;
mod task_list;

pub use error_message::ErrorMessage;
pub use header::Header;
pub use loading_spinner::LoadingSpinner;
pub use task_card::TaskCard;
pub use task_form::TaskForm;
pub use task_list::TaskList;
