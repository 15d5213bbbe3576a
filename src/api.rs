//! NASA Exoplanet Archive client.
//!
//! The archive has been queried through three different API contracts over
//! time. Each one is modelled as an [`ArchiveApi`] variant with its own
//! endpoint and its own wire record; they are never reconciled, only mapped
//! onto the shared [`PlanetRecord`].
//!
//! # Examples
//!
//! ```no_run
//! use exoscan::{ArchiveApi, ArchiveClient, Config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArchiveClient::new(Config::from_env()?)?;
//!     let planets = client.fetch_planets(ArchiveApi::Transiting).await?;
//!     println!("Loaded {} exoplanets", planets.len());
//!     Ok(())
//! }
//! ```

use crate::config::Config;
use crate::error::{ExoError, Result};
use crate::planet::PlanetRecord;
use serde::{Deserialize, Deserializer};

/// Versioned archive API contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ArchiveApi {
    /// Retired nstedAPI `exoplanets` table
    Legacy,
    /// TAP query over the Planetary Systems Composite table
    Composite,
    /// TAP query over transiting planets with a fixed column selection
    #[default]
    Transiting,
}

impl ArchiveApi {
    /// Path and query up to (and including) the `api_key=` parameter.
    fn endpoint(self) -> &'static str {
        match self {
            ArchiveApi::Legacy => {
                "/cgi-bin/nstedAPI/nph-nstedAPI?table=exoplanets&format=json&api_key="
            }
            ArchiveApi::Composite => {
                "/TAP/sync?query=select+*+from+pscomppars&format=json&api_key="
            }
            ArchiveApi::Transiting => {
                "/TAP/sync?query=select+pl_name,hostname,disc_year,pl_bmasse,pl_rade,sy_dist+from+ps+where+tran_flag=1&format=json&api_key="
            }
        }
    }

    pub fn url(self, base_url: &str, api_key: &str) -> String {
        format!("{}{}{}", base_url, self.endpoint(), api_key)
    }

    pub fn name(self) -> &'static str {
        match self {
            ArchiveApi::Legacy => "legacy",
            ArchiveApi::Composite => "composite",
            ArchiveApi::Transiting => "transiting",
        }
    }

    /// Decode a response body produced by this contract.
    pub fn decode(self, body: &[u8]) -> Result<Vec<PlanetRecord>> {
        let records = match self {
            ArchiveApi::Legacy => decode_rows::<LegacyRow>(body)?,
            ArchiveApi::Composite | ArchiveApi::Transiting => decode_rows::<TapRow>(body)?,
        };
        tracing::debug!(contract = self.name(), count = records.len(), "decoded records");
        Ok(records)
    }
}

fn decode_rows<T>(body: &[u8]) -> Result<Vec<PlanetRecord>>
where
    T: for<'de> Deserialize<'de> + Into<PlanetRecord>,
{
    let rows: Vec<T> = serde_json::from_slice(body)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// The archive sends `null` for unmeasured values; treat it like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Row of the legacy `exoplanets` table
#[derive(Debug, Deserialize)]
struct LegacyRow {
    #[serde(default, deserialize_with = "null_as_default")]
    pl_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pl_hostname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pl_disc: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pl_bmasse: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pl_rade: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    st_dist: f64,
}

impl From<LegacyRow> for PlanetRecord {
    fn from(row: LegacyRow) -> Self {
        PlanetRecord {
            name: row.pl_name,
            host: row.pl_hostname,
            disc_year: row.pl_disc,
            mass: row.pl_bmasse,
            radius: row.pl_rade,
            distance: row.st_dist,
        }
    }
}

/// Row of the TAP `ps` / `pscomppars` tables
#[derive(Debug, Deserialize)]
struct TapRow {
    #[serde(default, deserialize_with = "null_as_default")]
    pl_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    hostname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    disc_year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pl_bmasse: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pl_rade: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    sy_dist: f64,
}

impl From<TapRow> for PlanetRecord {
    fn from(row: TapRow) -> Self {
        PlanetRecord {
            name: row.pl_name,
            host: row.hostname,
            disc_year: row.disc_year,
            mass: row.pl_bmasse,
            radius: row.pl_rade,
            distance: row.sy_dist,
        }
    }
}

/// Exoplanet Archive client. One GET per call, no timeout, no retry.
#[derive(Clone)]
pub struct ArchiveClient {
    client: reqwest::Client,
    config: Config,
}

impl ArchiveClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("exo/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ExoError::Fetch)?;

        Ok(Self { client, config })
    }

    /// Fetch the raw response body for a contract.
    ///
    /// # Errors
    ///
    /// [`ExoError::Fetch`] for transport failures and non-success statuses,
    /// [`ExoError::BodyRead`] if the body cannot be read to the end.
    pub async fn fetch_body(&self, api: ArchiveApi) -> Result<Vec<u8>> {
        let url = api.url(&self.config.base_url, &self.config.api_key);
        tracing::debug!(contract = api.name(), "GET {}", self.redact(&url));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ExoError::Fetch(e.without_url()))?;

        let status = response.status();
        tracing::debug!(%status, "archive responded");
        // reqwest errors carry the request URL, which holds the API key
        let response = response
            .error_for_status()
            .map_err(|e| ExoError::Fetch(e.without_url()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ExoError::BodyRead(e.without_url()))?;
        tracing::debug!(bytes = body.len(), "read response body");

        Ok(body.to_vec())
    }

    /// Fetch and decode in one step.
    pub async fn fetch_planets(&self, api: ArchiveApi) -> Result<Vec<PlanetRecord>> {
        let body = self.fetch_body(api).await?;
        api.decode(&body)
    }

    fn redact(&self, url: &str) -> String {
        if self.config.api_key.is_empty() {
            return url.to_string();
        }
        url.replace(&self.config.api_key, "***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transiting_url_selects_columns() {
        let url = ArchiveApi::Transiting.url("https://archive.test", "KEY");
        assert_eq!(
            url,
            "https://archive.test/TAP/sync?query=select+pl_name,hostname,disc_year,pl_bmasse,pl_rade,sy_dist+from+ps+where+tran_flag=1&format=json&api_key=KEY"
        );
    }

    #[test]
    fn test_every_contract_ends_with_key() {
        for api in [ArchiveApi::Legacy, ArchiveApi::Composite, ArchiveApi::Transiting] {
            let url = api.url("https://archive.test", "secret");
            assert!(url.starts_with("https://archive.test/"));
            assert!(url.ends_with("format=json&api_key=secret"), "{}", url);
        }
    }

    #[test]
    fn test_decode_tap_rows() {
        let body = br#"[
            {"pl_name":"Kepler-1b","hostname":"Kepler-1","disc_year":2010,"pl_bmasse":3.5,"pl_rade":1.2,"sy_dist":120.5},
            {"pl_name":"Kepler-2b","disc_year":2015,"pl_rade":12.0}
        ]"#;
        let planets = ArchiveApi::Transiting.decode(body).unwrap();

        assert_eq!(planets.len(), 2);
        assert_eq!(
            planets[0],
            PlanetRecord {
                name: "Kepler-1b".to_string(),
                host: "Kepler-1".to_string(),
                disc_year: 2010,
                mass: 3.5,
                radius: 1.2,
                distance: 120.5,
            }
        );
        assert_eq!(planets[1].host, "");
        assert_eq!(planets[1].mass, 0.0);
        assert_eq!(planets[1].distance, 0.0);
    }

    #[test]
    fn test_decode_nulls_become_zero_values() {
        let body = br#"[{"pl_name":"HD 1 b","hostname":null,"disc_year":null,"pl_rade":null,"sy_dist":4.2}]"#;
        let planets = ArchiveApi::Composite.decode(body).unwrap();
        assert_eq!(planets[0].host, "");
        assert_eq!(planets[0].disc_year, 0);
        assert_eq!(planets[0].radius, 0.0);
        assert_eq!(planets[0].distance, 4.2);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = br#"[{"pl_name":"TOI-700 d","tran_flag":1,"pl_orbper":37.4}]"#;
        let planets = ArchiveApi::Composite.decode(body).unwrap();
        assert_eq!(planets[0].name, "TOI-700 d");
    }

    #[test]
    fn test_decode_legacy_field_names() {
        let body = br#"[{"pl_name":"51 Peg b","pl_hostname":"51 Peg","pl_disc":1995,"pl_rade":13.9,"st_dist":15.47}]"#;
        let planets = ArchiveApi::Legacy.decode(body).unwrap();
        assert_eq!(planets[0].host, "51 Peg");
        assert_eq!(planets[0].disc_year, 1995);
        assert_eq!(planets[0].distance, 15.47);

        // TAP field names mean nothing to the legacy contract
        let tap_body = br#"[{"pl_name":"51 Peg b","hostname":"51 Peg","disc_year":1995}]"#;
        let planets = ArchiveApi::Legacy.decode(tap_body).unwrap();
        assert_eq!(planets[0].host, "");
        assert_eq!(planets[0].disc_year, 0);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(ArchiveApi::Transiting.decode(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_malformed_json_fails() {
        let err = ArchiveApi::Transiting.decode(b"[{\"pl_name\":").unwrap_err();
        assert!(matches!(err, ExoError::Decode(_)));

        let err = ArchiveApi::Transiting
            .decode(b"<html>Service Unavailable</html>")
            .unwrap_err();
        assert!(err.to_string().starts_with("Error parsing:"));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = ArchiveApi::Transiting.decode(br#"{"pl_name":"x"}"#).unwrap_err();
        assert!(matches!(err, ExoError::Decode(_)));
    }

    #[test]
    fn test_redact_hides_key() {
        let client = ArchiveClient::new(Config::with_base_url("hunter2", "http://x")).unwrap();
        let url = ArchiveApi::Composite.url("http://x", "hunter2");
        assert!(!client.redact(&url).contains("hunter2"));
    }
}
