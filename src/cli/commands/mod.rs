mod list;
mod openapi;

pub use list::cmd_list_series;
pub use openapi::cmd_openapi;
