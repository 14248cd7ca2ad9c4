//! HTTP client construction for talking to the CMS.

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;

/// User agent string identifying this front end to the CMS.
const USER_AGENT: &str = concat!("campus-content/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::Client` with the given timeout and our user agent. The
/// client pools connections and is meant to be shared across requests.
pub fn create_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}
