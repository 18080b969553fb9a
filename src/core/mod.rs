pub mod components;
pub mod context;
pub mod layout;
pub mod query;
