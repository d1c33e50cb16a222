//! Client and service address models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A customer of the business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    /// Service addresses, primary first
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// A property where work is done.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub id: u64,
    pub client_id: u64,
    pub label: Option<String>,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub gate_code: Option<String>,
    pub is_primary: bool,
}
