//! UI Components
//!
//! Leptos components rendering the application state.

mod alert_banner;
mod grocery_form;
mod grocery_list;

pub use alert_banner::AlertBanner;
pub use grocery_form::GroceryForm;
pub use grocery_list::GroceryList;
