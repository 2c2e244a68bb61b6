//! Wikipedia search + Wikidata entity lookup.
//!
//! Flow: search Wikipedia for the title, take the top hit, read its
//! `wikibase_item` page property, then read the `P569` (birth) and `P570`
//! (death) claims of that Wikidata entity.

use super::{LifeDates, LookupError, LookupResult, PersonLookup};
use crate::model::person::PRESENT_SENTINEL;
use log::{info, warn};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::{Duration, Instant};

pub const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const WIKIDATA_ENTITY_URL: &str = "https://www.wikidata.org/wiki/Special:EntityData";

const BIRTH_CLAIM: &str = "P569";
const DEATH_CLAIM: &str = "P570";

/// Blocking HTTP client for the Wikipedia/Wikidata APIs.
#[derive(Debug, Clone)]
pub struct WikidataLookup {
    client: Client,
    wikipedia_api_url: String,
    entity_url: String,
}

impl WikidataLookup {
    /// Builds a client with the given `User-Agent` and request timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> LookupResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            wikipedia_api_url: WIKIPEDIA_API_URL.to_string(),
            entity_url: WIKIDATA_ENTITY_URL.to_string(),
        })
    }

    /// Points the client at alternative endpoints (mirrors, local fixtures).
    pub fn with_endpoints(
        mut self,
        wikipedia_api_url: impl Into<String>,
        entity_url: impl Into<String>,
    ) -> Self {
        self.wikipedia_api_url = wikipedia_api_url.into();
        self.entity_url = entity_url.into();
        self
    }

    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> LookupResult<Value> {
        let response = self.client.get(url).query(query).send()?.error_for_status()?;
        Ok(response.json::<Value>()?)
    }

    fn wikidata_id(&self, title: &str) -> LookupResult<Option<String>> {
        let search = self.get_json(
            &self.wikipedia_api_url,
            &[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", title),
                ("format", "json"),
            ],
        )?;
        let Some(best_match) = top_search_title(&search) else {
            return Ok(None);
        };

        let details = self.get_json(
            &self.wikipedia_api_url,
            &[
                ("action", "query"),
                ("format", "json"),
                ("prop", "pageprops"),
                ("titles", best_match.as_str()),
            ],
        )?;
        wikibase_item(&details)
    }

    fn entity_claims(&self, wikidata_id: &str) -> LookupResult<(Option<String>, Option<String>)> {
        let url = format!("{}/{wikidata_id}.json", self.entity_url.trim_end_matches('/'));
        let entity = self.get_json(&url, &[])?;
        life_claims(&entity, wikidata_id)
    }
}

impl PersonLookup for WikidataLookup {
    fn lookup(&self, title: &str) -> LookupResult<LifeDates> {
        let started_at = Instant::now();
        let Some(wikidata_id) = self.wikidata_id(title)? else {
            warn!(
                "event=person_lookup module=lookup status=not_found duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Err(LookupError::NotFound(title.to_string()));
        };

        let (birth, death) = self.entity_claims(&wikidata_id).map_err(|err| {
            warn!(
                "event=person_lookup module=lookup status=error entity={} duration_ms={} error={}",
                wikidata_id,
                started_at.elapsed().as_millis(),
                err
            );
            err
        })?;
        let Some(birth) = birth else {
            warn!(
                "event=person_lookup module=lookup status=missing_birth entity={} duration_ms={}",
                wikidata_id,
                started_at.elapsed().as_millis()
            );
            return Err(LookupError::MissingBirth(title.to_string()));
        };

        info!(
            "event=person_lookup module=lookup status=ok entity={} living={} duration_ms={}",
            wikidata_id,
            death.is_none(),
            started_at.elapsed().as_millis()
        );
        Ok(LifeDates {
            birth,
            death: death.unwrap_or_else(|| PRESENT_SENTINEL.to_string()),
        })
    }
}

/// Title of the first hit in a `list=search` response.
pub fn top_search_title(search: &Value) -> Option<String> {
    search
        .pointer("/query/search/0/title")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `wikibase_item` of the first page in a `prop=pageprops` response.
pub fn wikibase_item(details: &Value) -> LookupResult<Option<String>> {
    let pages = details
        .pointer("/query/pages")
        .and_then(Value::as_object)
        .ok_or_else(|| LookupError::InvalidResponse("missing query.pages".to_string()))?;

    Ok(pages.values().next().and_then(|page| {
        page.pointer("/pageprops/wikibase_item")
            .and_then(Value::as_str)
            .map(str::to_string)
    }))
}

/// Birth and death tokens from a Wikidata entity document.
pub fn life_claims(
    entity: &Value,
    wikidata_id: &str,
) -> LookupResult<(Option<String>, Option<String>)> {
    let claims = entity
        .get("entities")
        .and_then(|entities| entities.get(wikidata_id))
        .and_then(|item| item.get("claims"))
        .ok_or_else(|| {
            LookupError::InvalidResponse(format!("entity `{wikidata_id}` has no claims"))
        })?;

    Ok((
        claim_date_token(claims, wikidata_id, BIRTH_CLAIM)?,
        claim_date_token(claims, wikidata_id, DEATH_CLAIM)?,
    ))
}

/// `None` only when `property` has no claims at all.
fn claim_date_token(
    claims: &Value,
    wikidata_id: &str,
    property: &'static str,
) -> LookupResult<Option<String>> {
    let entries = match claims.get(property).and_then(Value::as_array) {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Ok(None),
    };

    entries
        .iter()
        .find_map(|claim| {
            claim
                .pointer("/mainsnak/datavalue/value/time")
                .and_then(Value::as_str)
        })
        .map(|time| Some(time_value_to_token(time)))
        .ok_or_else(|| LookupError::UndatedClaim {
            entity: wikidata_id.to_string(),
            property,
        })
}

/// Reduces a Wikidata time value (`+1879-03-14T00:00:00Z`) to `1879-03-14`.
pub fn time_value_to_token(time: &str) -> String {
    let unsigned = time.trim_matches('+');
    unsigned
        .split('T')
        .next()
        .unwrap_or(unsigned)
        .to_string()
}
