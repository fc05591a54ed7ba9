use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::client::{check_status, EntClient};
use crate::dates::parse_iso_date;
use crate::error::EntError;

const LIST_PATH: &str = "/homeworks/list";
const GET_PATH: &str = "/homeworks/get";

/// One entry of `/homeworks/list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomeworkSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Author display name
    #[serde(rename = "name")]
    pub author: String,
    pub modified: MongoDate,
}

/// Extended-JSON date wrapper: `{"$date": <epoch millis>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MongoDate {
    #[serde(rename = "$date")]
    pub millis: i64,
}

impl HomeworkSummary {
    /// Last modification time, `None` if the timestamp is out of range.
    #[must_use]
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.modified.millis)
    }
}

/// Body of `/homeworks/get/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Homeworks {
    pub data: Vec<HomeworkDay>,
}

/// All entries assigned for one date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomeworkDay {
    #[serde(deserialize_with = "iso_date")]
    pub date: NaiveDate,
    pub entries: Vec<HomeworkEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomeworkEntry {
    pub title: String,
    /// Raw description, may contain HTML markup
    pub value: String,
}

fn iso_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 date '{raw}'")))
}

impl EntClient {
    /// List the homework sets visible to the logged-in user.
    pub async fn list_homeworks(&self) -> Result<Vec<HomeworkSummary>, EntError> {
        let url = self.url(LIST_PATH);
        let list: Vec<HomeworkSummary> = self.get_json(LIST_PATH, url).await?;
        debug!(count = list.len(), "fetched homework list");
        Ok(list)
    }

    /// Fetch the day-by-day content of one homework set.
    pub async fn get_homeworks(&self, id: &str) -> Result<Homeworks, EntError> {
        let url = self.url_with_segment(GET_PATH, id);
        let homeworks: Homeworks = self.get_json(GET_PATH, url).await?;
        debug!(id, days = homeworks.data.len(), "fetched homeworks");
        Ok(homeworks)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: String,
    ) -> Result<T, EntError> {
        debug!(%url, "GET");
        let response = self.client().get(&url).send().await?;
        let text = check_status(response, false)?.text().await?;

        serde_json::from_str(&text).map_err(|source| EntError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
