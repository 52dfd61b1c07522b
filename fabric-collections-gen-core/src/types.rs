//! Core data types for collections config generation.

use serde::Serialize;

/// One private-data collection entry in the generated configuration.
///
/// Field declaration order is the serialized key order; consumers of
/// `collections_config.json` expect the keys exactly as listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    pub name: String,
    pub policy: String,
    pub required_peer_count: i64,
    pub max_peer_count: i64,
    pub block_to_live: i64,
    pub member_only_read: bool,
    pub member_only_write: bool,
}

/// The numeric knobs collected from the prompts, before any range
/// filtering. Values are taken as-is; out-of-range role indices are
/// resolved later by [`crate::RolePartition::derive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorParams {
    pub total_orgs: i64,
    pub num_servers: i64,
    pub clients_from: i64,
    pub num_clients: i64,
    pub required_peer_count: i64,
    pub max_peer_count: i64,
    pub block_to_live: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_config_key_order_and_names() {
        let collection = CollectionConfig {
            name: "globalModelHashCollection".to_string(),
            policy: "OR()".to_string(),
            required_peer_count: 0,
            max_peer_count: 3,
            block_to_live: 1_000_000,
            member_only_read: true,
            member_only_write: true,
        };

        let json = serde_json::to_string(&collection).expect("serialize");
        let expected = concat!(
            r#"{"name":"globalModelHashCollection","policy":"OR()","#,
            r#""requiredPeerCount":0,"maxPeerCount":3,"blockToLive":1000000,"#,
            r#""memberOnlyRead":true,"memberOnlyWrite":true}"#
        );
        assert_eq!(json, expected);
    }
}
