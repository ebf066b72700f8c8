//! Savings goals: the savings tab, the new goal modal and its endpoint.

mod create;
mod page;

pub use create::{NewGoalForm, create_goal_endpoint, new_goal_form};
pub use page::{get_savings_page, savings_content};
