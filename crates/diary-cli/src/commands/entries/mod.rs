pub mod add;
pub mod date;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod search;
pub mod show;

pub use add::handle_add;
pub use date::handle_date;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use export::handle_export;
pub use list::handle_list;
pub use search::handle_search;
pub use show::handle_show;

use uuid::Uuid;

use crate::errors::CliError;

/// Not-found error for an entry id, with a hint to find valid ids.
pub(crate) fn entry_not_found(id: &Uuid) -> CliError {
    CliError::not_found(
        format!("Entry not found: {}", id),
        "Hint: Run `diary list` to find entry IDs.",
    )
}
