//! Client and service address queries.

use rusqlite::{params, OptionalExtension, Row};

use super::utils::{id_column, now, optional_id_column, timestamp_column, to_sql_timestamp};
use crate::{
    error::{DatabaseResultExt, OfficeError, Result},
    models::{Address, Client},
    params::{AddAddress, CreateClient},
};

const INSERT_CLIENT_SQL: &str =
    "INSERT INTO clients (name, email, phone, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_CLIENT_SQL: &str =
    "SELECT id, name, email, phone, created_at, updated_at FROM clients WHERE id = ?1";
const SELECT_CLIENTS_SQL: &str =
    "SELECT id, name, email, phone, created_at, updated_at FROM clients ORDER BY name COLLATE NOCASE, id";
pub(super) const CHECK_CLIENT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM clients WHERE id = ?1)";
const CLEAR_PRIMARY_ADDRESS_SQL: &str =
    "UPDATE client_addresses SET is_primary = 0 WHERE client_id = ?1";
const INSERT_ADDRESS_SQL: &str = "INSERT INTO client_addresses (client_id, label, address, city, state, zip, gate_code, is_primary) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_ADDRESSES_SQL: &str = "SELECT id, client_id, label, address, city, state, zip, gate_code, is_primary FROM client_addresses WHERE client_id = ?1 ORDER BY is_primary DESC, id";
const TOUCH_CLIENT_SQL: &str = "UPDATE clients SET updated_at = ?1 WHERE id = ?2";
pub(super) const ADDRESS_OWNER_SQL: &str = "SELECT client_id FROM client_addresses WHERE id = ?1";

impl super::Database {
    fn build_client_from_row(row: &Row) -> rusqlite::Result<Client> {
        Ok(Client {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            created_at: timestamp_column(row, 4)?,
            updated_at: timestamp_column(row, 5)?,
            addresses: Vec::new(),
        })
    }

    fn build_address_from_row(row: &Row) -> rusqlite::Result<Address> {
        Ok(Address {
            id: id_column(row, 0)?,
            client_id: id_column(row, 1)?,
            label: row.get(2)?,
            address: row.get(3)?,
            city: row.get(4)?,
            state: row.get(5)?,
            zip: row.get(6)?,
            gate_code: row.get(7)?,
            is_primary: row.get(8)?,
        })
    }

    /// Adds a client record.
    pub fn create_client(&mut self, params: &CreateClient) -> Result<Client> {
        params.validate()?;

        let now = now();
        let now_str = to_sql_timestamp(now);
        let name = params.name.trim();

        self.connection
            .execute(
                INSERT_CLIENT_SQL,
                params![name, params.email, params.phone, &now_str, &now_str],
            )
            .db_context("Failed to insert client")?;

        Ok(Client {
            id: self.connection.last_insert_rowid() as u64,
            name: name.to_string(),
            email: params.email.clone(),
            phone: params.phone.clone(),
            created_at: now,
            updated_at: now,
            addresses: Vec::new(),
        })
    }

    /// Retrieves a client with its addresses.
    pub fn get_client(&self, id: u64) -> Result<Option<Client>> {
        let mut client = self
            .connection
            .query_row(SELECT_CLIENT_SQL, params![id as i64], Self::build_client_from_row)
            .optional()
            .db_context("Failed to query client")?;

        if let Some(ref mut client) = client {
            client.addresses = self.get_addresses(client.id)?;
        }

        Ok(client)
    }

    /// Lists every client by name, with addresses loaded.
    pub fn list_clients(&self) -> Result<Vec<Client>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CLIENTS_SQL)
            .db_context("Failed to prepare query")?;

        let mut clients = stmt
            .query_map([], Self::build_client_from_row)
            .db_context("Failed to query clients")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch clients")?;

        for client in &mut clients {
            client.addresses = self.get_addresses(client.id)?;
        }

        Ok(clients)
    }

    /// Returns the addresses of a client, primary first.
    pub fn get_addresses(&self, client_id: u64) -> Result<Vec<Address>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ADDRESSES_SQL)
            .db_context("Failed to prepare query")?;

        let addresses = stmt
            .query_map(params![client_id as i64], Self::build_address_from_row)
            .db_context("Failed to query addresses")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch addresses")?;

        Ok(addresses)
    }

    /// Adds a service address to a client. A primary address demotes the
    /// client's other addresses in the same transaction.
    pub fn add_address(&mut self, params: &AddAddress) -> Result<Address> {
        params.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_CLIENT_EXISTS_SQL, params![params.client_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check client existence")?;
        if !exists {
            return Err(OfficeError::ClientNotFound {
                id: params.client_id,
            });
        }

        if params.is_primary {
            tx.execute(CLEAR_PRIMARY_ADDRESS_SQL, params![params.client_id as i64])
                .db_context("Failed to clear primary address")?;
        }

        let address = params.address.trim();
        tx.execute(
            INSERT_ADDRESS_SQL,
            params![
                params.client_id as i64,
                params.label,
                address,
                params.city,
                params.state,
                params.zip,
                params.gate_code,
                params.is_primary
            ],
        )
        .db_context("Failed to insert address")?;
        let id = tx.last_insert_rowid() as u64;

        tx.execute(
            TOUCH_CLIENT_SQL,
            params![to_sql_timestamp(now()), params.client_id as i64],
        )
        .db_context("Failed to update client timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Address {
            id,
            client_id: params.client_id,
            label: params.label.clone(),
            address: address.to_string(),
            city: params.city.clone(),
            state: params.state.clone(),
            zip: params.zip.clone(),
            gate_code: params.gate_code.clone(),
            is_primary: params.is_primary,
        })
    }
}

/// Checks that an optional address belongs to the given client.
pub(super) fn check_address_owner(
    conn: &rusqlite::Connection,
    client_id: u64,
    address_id: Option<u64>,
) -> Result<()> {
    let Some(address_id) = address_id else {
        return Ok(());
    };

    let owner: Option<u64> = conn
        .query_row(ADDRESS_OWNER_SQL, params![address_id as i64], |row| {
            optional_id_column(row, 0)
        })
        .optional()
        .db_context("Failed to look up address")?
        .flatten();

    if owner == Some(client_id) {
        Ok(())
    } else {
        Err(OfficeError::invalid_input("address_id").with_reason(format!(
            "Address {address_id} does not belong to client {client_id}"
        )))
    }
}
