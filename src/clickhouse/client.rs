use crate::error::Result;

/// Runs the aggregate active-parts query, one row per partition:
/// `database table partition bytes parts rows`.
pub const PARTS_QUERY: &str = "select database, table, partition, \
    sum(bytes) as bytes, count() as parts, sum(rows) as rows \
    from system.parts where active = 1 \
    group by database, table, partition";

/// Lists replica status columns in the replica schema's declared order.
pub const REPLICAS_QUERY: &str = "select database, table, \
    is_readonly, is_session_expired, future_parts, parts_to_check, \
    queue_size, inserts_in_queue, log_max_index, log_pointer, \
    active_replicas, total_replicas \
    from system.replicas";

/// Thin client for the ClickHouse HTTP interface. Issues one GET per query
/// and returns the tab-separated body; retries are left to the scraper.
#[derive(Debug, Clone)]
pub struct ClickhouseClient {
    http: reqwest::Client,
    endpoint: String,
    user: Option<String>,
    password: Option<String>,
}

impl ClickhouseClient {
    pub fn new(endpoint: String, user: Option<String>, password: Option<String>) -> Self {
        ClickhouseClient {
            http: reqwest::Client::new(),
            endpoint,
            user,
            password,
        }
    }

    pub async fn fetch(&self, query: &str) -> Result<String> {
        let mut request = self.http.get(&self.endpoint).query(&[("query", query)]);
        if let Some(user) = &self.user {
            request = request.basic_auth(user, self.password.as_deref());
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
