//! UI components

pub mod header;
pub mod location_select;
pub mod login_form;
pub mod register_agrovet;
pub mod register_extension;
pub mod results_table;
pub mod signup_form;
pub mod upload_form;
