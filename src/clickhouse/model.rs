/// Namespace prefix applied uniformly to every exposed sample.
pub const NAMESPACE: &str = "clickhouse";

/// One named numeric metric expected in a ClickHouse response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDef {
    pub name: &'static str,
    pub help: &'static str,
}

/// Fixed, ordered description of one response type: the identifying columns
/// that lead every row, followed by one numeric column per metric definition.
///
/// A schema is built once as a static and shared read-only by the parser
/// (to size-check rows) and the exposer (to name and help-text samples).
#[derive(Debug)]
pub struct Schema {
    leading: usize,
    defs: &'static [MetricDef],
}

impl Schema {
    pub fn defs(&self) -> &[MetricDef] {
        self.defs
    }

    pub fn metric_count(&self) -> usize {
        self.defs.len()
    }

    /// Total column count a row of this response type must have.
    pub fn width(&self) -> usize {
        self.leading + self.defs.len()
    }

    /// The metric names joined in declared order.
    pub fn metric_names(&self) -> String {
        self.defs
            .iter()
            .map(|def| def.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

static PARTITION_METRICS: [MetricDef; 3] = [
    MetricDef {
        name: "bytes",
        help: "Total bytes of all active parts in the partition.",
    },
    MetricDef {
        name: "parts",
        help: "Number of active parts in the partition.",
    },
    MetricDef {
        name: "rows",
        help: "Total rows of all active parts in the partition.",
    },
];

static PARTITION_SCHEMA: Schema = Schema {
    // database, table, partition
    leading: 3,
    defs: &PARTITION_METRICS,
};

static REPLICA_METRICS: [MetricDef; 10] = [
    MetricDef {
        name: "is_readonly",
        help: "Whether the replica is in read-only mode.",
    },
    MetricDef {
        name: "is_session_expired",
        help: "Whether the ZK session expired.",
    },
    MetricDef {
        name: "future_parts",
        help: "The number of data parts that will appear as the result of INSERTs or merges that haven't been done yet.",
    },
    MetricDef {
        name: "parts_to_check",
        help: "The number of data parts in the queue for verification.",
    },
    MetricDef {
        name: "queue_size",
        help: "Size of the queue for operations waiting to be performed.",
    },
    MetricDef {
        name: "inserts_in_queue",
        help: "Number of inserts of blocks of data that need to be made.",
    },
    MetricDef {
        name: "log_max_index",
        help: "Maximum entry number in the log of general activity.",
    },
    MetricDef {
        name: "log_pointer",
        help: "Maximum entry number in the log of general activity that the replica copied to its execution queue, plus one.",
    },
    MetricDef {
        name: "active_replicas",
        help: "Number of active replicas.",
    },
    MetricDef {
        name: "total_replicas",
        help: "Total number of replicas.",
    },
];

static REPLICA_SCHEMA: Schema = Schema {
    // database, table
    leading: 2,
    defs: &REPLICA_METRICS,
};

pub fn partition_schema() -> &'static Schema {
    &PARTITION_SCHEMA
}

pub fn replica_schema() -> &'static Schema {
    &REPLICA_SCHEMA
}

/// Per-partition stats from one `system.parts` response row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRecord {
    pub database: String,
    pub table: String,
    pub partition: String,
    pub bytes: i64,
    pub parts: i64,
    pub rows: i64,
}

impl PartitionRecord {
    /// The numeric columns, aligned with the partition schema.
    pub fn values(&self) -> [i64; 3] {
        [self.bytes, self.parts, self.rows]
    }
}

/// Per-table replica status from one `system.replicas` response row,
/// `values` aligned 1:1 with the replica schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicaRecord {
    pub database: String,
    pub table: String,
    pub values: Vec<f64>,
}

/// One labeled observation ready for a metrics registry. Transient, built
/// only during exposition and handed straight to the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub namespace: &'static str,
    pub name: &'static str,
    pub help: &'static str,
    pub database: String,
    pub table: String,
    pub value: f64,
}
