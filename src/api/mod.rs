//! HTTP API for claiming payment-address names.
//!
//! # API Endpoints
//!
//! ## `/healthcheck` (GET)
//!
//!   Returns HTTP 200 (OK) and the JSON body `{"ok":"healthy"}` when the
//!   service is operational.
//!
//! ## `/register` (POST)
//!
//!   Requires an `Authorization: Bearer <token>` header matching the
//!   configured [`Config::auth_token`][crate::config::Config::auth_token].
//!   Expects a JSON request body of the form:
//!
//!   ```json
//!   { "name": "conor", "uri": "bitcoin:bc1qexample" }
//!   ```
//!
//!   `name` must be 1 to 64 lowercase alphanumeric characters. `uri` must be
//!   a `bitcoin:` URI; an embedded `lno` query parameter must carry a BOLT 12
//!   offer (`lno1...`).
//!
//!   The name is published as a TXT record at
//!   `<name>.user.<record_prefix>.<zone>.`:
//!
//!   ```bash
//!   ❯ curl -H "Authorization: Bearer $TOKEN" --json \
//!     '{"name":"conor","uri":"bitcoin:bc1qexample"}' \
//!      http://localhost:3000/register
//!   {"message":"Name registered successfully","fqdn":"conor.user._bitcoin-payment.easybitcoinaddress.me.","uri":"bitcoin:bc1qexample"}
//!   ```
//!
//!   Registering a name that already has a record returns HTTP 409 (Conflict)
//!   with the existing record's FQDN, and nothing is written. The existence
//!   check and the zone write are two separate provider calls: two
//!   registrations of the same name racing each other can both pass the
//!   check, and the later write wins.
//!
//! ## `/record/:name` (GET)
//!
//!   Unauthenticated, so wallets can resolve a name to its payment
//!   instruction without a credential. Returns the published record:
//!
//!   ```bash
//!   ❯ curl http://localhost:3000/record/conor
//!   {"fqdn":"conor.user._bitcoin-payment.easybitcoinaddress.me.","uri":"bitcoin:bc1qexample"}
//!   ```
//!
//!   Unknown names return HTTP 404 (Not Found).
//!
//! ## `/record/:name` (DELETE)
//!
//!   Requires the same bearer token as `/register`. Removes the name's TXT
//!   record and returns `{"success":true}`, whether or not a record existed.

mod api_error;
mod model;
mod routes;
pub mod server;

pub use server::new;
