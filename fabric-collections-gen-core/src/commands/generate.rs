//! End-to-end generation: prompts, partition, synthesis, file write.

use std::io::{BufRead, Write};
use std::path::Path;

use log::debug;

use crate::error::{CollectionsGenError, CollectionsGenResult};
use crate::partition::RolePartition;
use crate::prompt::ask_int;
use crate::synthesis::build_collections;
use crate::types::GeneratorParams;

/// Name of the generated file, created in the working directory.
pub const OUTPUT_FILE: &str = "collections_config.json";

const DEFAULT_TOTAL_ORGS: i64 = 10;
const DEFAULT_NUM_SERVERS: i64 = 1;
const DEFAULT_REQUIRED_PEER_COUNT: i64 = 0;
const DEFAULT_MAX_PEER_COUNT: i64 = 3;
const DEFAULT_BLOCK_TO_LIVE: i64 = 1_000_000;

/// Collect the seven generation knobs from the prompt streams, in a fixed
/// order. The client-range defaults are computed from earlier answers:
/// clients start right after the servers and fill the remaining range.
pub fn collect_params<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> CollectionsGenResult<GeneratorParams> {
    let total_orgs = ask_int(
        input,
        output,
        "Total organizations (servers plus clients)",
        DEFAULT_TOTAL_ORGS,
    )?;
    let num_servers = ask_int(
        input,
        output,
        "Number of server organizations (starting from Org1)",
        DEFAULT_NUM_SERVERS,
    )?;
    let clients_from = ask_int(
        input,
        output,
        "First client organization (usually servers + 1)",
        num_servers.saturating_add(1),
    )?;
    let num_clients = ask_int(
        input,
        output,
        "Number of clients",
        total_orgs.saturating_sub(num_servers).max(0),
    )?;
    let required_peer_count =
        ask_int(input, output, "requiredPeerCount", DEFAULT_REQUIRED_PEER_COUNT)?;
    let max_peer_count = ask_int(input, output, "maxPeerCount", DEFAULT_MAX_PEER_COUNT)?;
    let block_to_live = ask_int(input, output, "blockToLive", DEFAULT_BLOCK_TO_LIVE)?;

    Ok(GeneratorParams {
        total_orgs,
        num_servers,
        clients_from,
        num_clients,
        required_peer_count,
        max_peer_count,
        block_to_live,
    })
}

/// Run the whole generation flow: collect the knobs, derive the role
/// partition, build the record sequence, and write it as pretty JSON to
/// `path` in a single truncate-and-create write. On success, print the
/// record count and the resolved server and client index sets.
///
/// Any prompt parse failure surfaces before the file is touched, so a
/// failed run leaves prior output intact.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    path: &Path,
) -> CollectionsGenResult<()> {
    let params = collect_params(input, output)?;

    let partition = RolePartition::derive(&params);
    debug!(
        "resolved partition: servers={:?} clients={:?}",
        partition.servers, partition.clients
    );

    let collections = build_collections(&params, &partition);
    let json = serde_json::to_string_pretty(&collections)?;
    std::fs::write(path, json).map_err(|source| CollectionsGenError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    writeln!(
        output,
        "Wrote {} with {} collections.",
        path.display(),
        collections.len()
    )
    .map_err(CollectionsGenError::Prompt)?;
    writeln!(output, "Servers: {:?}", partition.servers).map_err(CollectionsGenError::Prompt)?;
    writeln!(output, "Clients: {:?}", partition.clients).map_err(CollectionsGenError::Prompt)?;

    Ok(())
}
