mod models;
mod response;

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{
    Client, Url,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::Serialize;

pub use self::models::{ChartPoint, DayData, Snapshot};
use self::response::Envelope;
use crate::{prelude::*, quantity::minutes::Minutes};

pub struct Api {
    client: Client,
    host: Url,
}

impl Api {
    pub fn try_new(host: Url, token: &str) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("the token is not a valid header value")?;
        authorization.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        let client = Client::builder()
            .user_agent("solwatt")
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, host })
    }

    /// Fetch the stored series for the given calendar day.
    #[instrument(skip_all, fields(site = site, date = %date))]
    pub async fn get_day(&self, site: &str, date: NaiveDate) -> Result<DayData> {
        #[derive(Serialize)]
        struct DayRequest<'a> {
            #[serde(rename = "selectedItem")]
            site: &'a str,

            date: String,
        }

        info!("Fetching…");
        self.call("admin/date", &DayRequest { site, date: date.format("%Y-%m-%d").to_string() })
            .await
            .context("failed to fetch the day history")
    }

    /// Fetch today's live series and snapshot.
    #[instrument(skip_all, fields(site = site))]
    pub async fn get_live(&self, site: &str, interval: Minutes) -> Result<DayData> {
        #[derive(Serialize)]
        struct LiveRequest<'a> {
            #[serde(rename = "selectedItem")]
            site: &'a str,

            #[serde(rename = "timeInterval")]
            interval: Minutes,
        }

        info!("Fetching…");
        self.call("admin/db", &LiveRequest { site, interval })
            .await
            .context("failed to fetch the live data")
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(path = path))]
    async fn call<B: Serialize>(&self, path: &str, body: &B) -> Result<DayData> {
        let url = self.host.join(path).with_context(|| format!("bad path `{path}`"))?;
        let data = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("failed to call `{path}`"))?
            .error_for_status()
            .with_context(|| format!("`{path}` failed"))?
            .json::<Envelope<DayData>>()
            .await
            .with_context(|| format!("failed to deserialize the `{path}` response"))?
            .data;
        debug!(n_points = data.charts.len(), "Fetched");
        Ok(data)
    }
}
