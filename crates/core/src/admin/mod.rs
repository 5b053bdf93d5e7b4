mod command;
mod error;
mod guard;
mod reply;
mod types;

pub use command::{command_name, parse_user_id_argument, AdminCommand};
pub use error::ParseError;
pub use guard::{Guard, OwnerGuard};
pub use reply::{
    format_added, format_admin_list, format_removed, ACCESS_DENIED, NO_ADMINS, STORAGE_BUSY,
    STORAGE_FAILURE,
};
pub use types::UserId;
