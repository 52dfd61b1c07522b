//! Builds the ordered collection record sequence.

use crate::partition::RolePartition;
use crate::policy::{member_expr, msp_name};
use crate::types::{CollectionConfig, GeneratorParams};

/// Build the full record sequence: two records per client (model hash and
/// intermediate data hash, party set = that client plus all servers, the
/// client listed first), then exactly one global record covering
/// `[1, total_orgs]`.
pub fn build_collections(
    params: &GeneratorParams,
    partition: &RolePartition,
) -> Vec<CollectionConfig> {
    let mut collections = Vec::with_capacity(2 * partition.clients.len() + 1);

    for &client in &partition.clients {
        let mut parties = Vec::with_capacity(partition.servers.len() + 1);
        parties.push(client);
        parties.extend_from_slice(&partition.servers);
        let policy = member_expr(&parties);

        collections.push(collection(
            format!("clientModelHashCollection{}", msp_name(client)),
            policy.clone(),
            params,
        ));
        collections.push(collection(
            format!("intermediateDataHashCollection{}", msp_name(client)),
            policy,
            params,
        ));
    }

    let all_orgs: Vec<i64> = (1..=params.total_orgs).collect();
    collections.push(collection(
        "globalModelHashCollection".to_string(),
        member_expr(&all_orgs),
        params,
    ));

    collections
}

fn collection(name: String, policy: String, params: &GeneratorParams) -> CollectionConfig {
    CollectionConfig {
        name,
        policy,
        required_peer_count: params.required_peer_count,
        max_peer_count: params.max_peer_count,
        block_to_live: params.block_to_live,
        member_only_read: true,
        member_only_write: true,
    }
}
