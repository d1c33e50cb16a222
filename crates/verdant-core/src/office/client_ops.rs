//! Client operations for the Office.

use super::Office;
use crate::{
    error::Result,
    models::{Address, Client},
    params::{AddAddress, CreateClient, Id},
};

impl Office {
    /// Adds a client.
    pub async fn add_client(&self, params: &CreateClient) -> Result<Client> {
        let params = params.clone();
        self.with_database(move |db| db.create_client(&params)).await
    }

    /// Retrieves a client with its addresses.
    pub async fn show_client(&self, params: &Id) -> Result<Option<Client>> {
        let id = params.id;
        self.with_database(move |db| db.get_client(id)).await
    }

    /// Lists every client.
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        self.with_database(|db| db.list_clients()).await
    }

    /// Adds a service address to a client.
    pub async fn add_address(&self, params: &AddAddress) -> Result<Address> {
        let params = params.clone();
        self.with_database(move |db| db.add_address(&params)).await
    }
}
