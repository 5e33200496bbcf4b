pub mod document_options;
pub mod server_options;
pub mod view_options;
