//! Walks parsed records and their schemas, emitting one labeled gauge
//! sample per metric per record onto a sink.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use prometheus::{GaugeVec, Opts, Registry};

use crate::clickhouse::client::{ClickhouseClient, PARTS_QUERY, REPLICAS_QUERY};
use crate::clickhouse::model::{
    partition_schema, replica_schema, MetricSample, PartitionRecord, ReplicaRecord, Schema,
    NAMESPACE,
};
use crate::clickhouse::parser::{parse_partitions, parse_replicas};
use crate::error::Result;

/// Append-only consumer of emitted samples. Writes arrive in input row
/// order and, within a row, in schema declaration order.
pub trait SampleSink {
    fn write(&mut self, sample: MetricSample) -> Result<()>;
}

/// Emits the three numeric partition columns, labeled by database and table.
/// The partition id is descriptive context on the record and is not exposed.
pub fn expose_partition(
    record: &PartitionRecord,
    schema: &Schema,
    sink: &mut dyn SampleSink,
) -> Result<()> {
    for (def, value) in schema.defs().iter().zip(record.values()) {
        sink.write(MetricSample {
            namespace: NAMESPACE,
            name: def.name,
            help: def.help,
            database: record.database.clone(),
            table: record.table.clone(),
            value: value as f64,
        })?;
    }
    Ok(())
}

/// Emits one sample per replica schema entry, named and help-texted from
/// the schema and labeled by database and table.
pub fn expose_replica(
    record: &ReplicaRecord,
    schema: &Schema,
    sink: &mut dyn SampleSink,
) -> Result<()> {
    for (def, value) in schema.defs().iter().zip(&record.values) {
        sink.write(MetricSample {
            namespace: NAMESPACE,
            name: def.name,
            help: def.help,
            database: record.database.clone(),
            table: record.table.clone(),
            value: *value,
        })?;
    }
    Ok(())
}

/// Sink backed by a prometheus `Registry`: one `GaugeVec` per metric name,
/// registered on first write, one labeled child per record.
pub struct PrometheusSink {
    registry: Registry,
    gauges: HashMap<&'static str, GaugeVec>,
}

impl PrometheusSink {
    pub fn new() -> Self {
        PrometheusSink {
            registry: Registry::new(),
            gauges: HashMap::new(),
        }
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }
}

impl Default for PrometheusSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSink for PrometheusSink {
    fn write(&mut self, sample: MetricSample) -> Result<()> {
        let gauge = match self.gauges.entry(sample.name) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let opts = Opts::new(sample.name, sample.help).namespace(sample.namespace);
                let gauge = GaugeVec::new(opts, &["database", "table"])?;
                self.registry.register(Box::new(gauge.clone()))?;
                entry.insert(gauge)
            }
        };
        gauge
            .with_label_values(&[sample.database.as_str(), sample.table.as_str()])
            .set(sample.value);
        Ok(())
    }
}

/// One exporter per ClickHouse target. Every scrape fetches, parses and
/// exposes from scratch; nothing is carried over between scrapes, so
/// concurrent scrapes of different targets are independent.
pub struct Exporter {
    client: ClickhouseClient,
}

impl Exporter {
    pub fn new(client: ClickhouseClient) -> Exporter {
        Exporter { client }
    }

    /// Runs both queries and returns a freshly populated registry, or the
    /// first fetch/format/parse error encountered.
    pub async fn scrape(&self) -> Result<Registry> {
        let mut sink = PrometheusSink::new();

        let schema = partition_schema();
        let body = self.client.fetch(PARTS_QUERY).await?;
        for record in parse_partitions(&body, schema)? {
            expose_partition(&record, schema, &mut sink)?;
        }

        let schema = replica_schema();
        log::debug!("scraping replica metrics: {}", schema.metric_names());
        let body = self.client.fetch(REPLICAS_QUERY).await?;
        for record in parse_replicas(&body, schema)? {
            expose_replica(&record, schema, &mut sink)?;
        }

        Ok(sink.into_registry())
    }
}
