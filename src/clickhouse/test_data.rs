//! Canned ClickHouse response bodies shared by the unit tests.

pub const PARTS_BODY: &str = "\
db1 tbl1 202408 1024 3 500
db1 tbl2 202408 2048 1 100

db2 tbl1 202407 4096 7 9000
";

pub const REPLICAS_BODY: &str = "\
db1 tbl1 0 0 1 0 5 2 100 99 2 3
db2 tbl2 1 0 0 0 0 0 42 42 3 3
";
