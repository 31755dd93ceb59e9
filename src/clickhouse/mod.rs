mod model;
pub use self::model::partition_schema;
pub use self::model::replica_schema;
pub use self::model::MetricDef;
pub use self::model::MetricSample;
pub use self::model::PartitionRecord;
pub use self::model::ReplicaRecord;
pub use self::model::Schema;
pub use self::model::NAMESPACE;

mod parser;
pub use self::parser::parse_partitions;
pub use self::parser::parse_replicas;

mod client;
pub use self::client::ClickhouseClient;
pub use self::client::PARTS_QUERY;
pub use self::client::REPLICAS_QUERY;

mod exporter;
pub use self::exporter::expose_partition;
pub use self::exporter::expose_replica;
pub use self::exporter::Exporter;
pub use self::exporter::PrometheusSink;
pub use self::exporter::SampleSink;

#[cfg(test)]
pub(crate) mod test_data;
