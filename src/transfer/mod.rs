//! Sending money: the transfers tab, the transfer modal and its endpoint.

mod create;
mod page;

pub use create::{TransferForm, transfer_endpoint, transfer_form};
pub use page::{get_transfers_page, transfers_content};
