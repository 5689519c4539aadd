use std::collections::BTreeMap;

/// One logical row of a dump file: a flat mapping of attribute name to raw
/// string value.
///
/// Records carry no schema. Keys are whatever attribute names the source
/// element declares, and values keep their raw string form; numeric-looking
/// attributes are not coerced. The sorted key order makes serialized output
/// deterministic across runs.
pub type Record = BTreeMap<String, String>;
