pub mod add;
pub mod config;
pub mod count;
pub mod delete;
pub mod edit;
pub mod search;
pub mod view;
