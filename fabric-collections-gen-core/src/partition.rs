//! Server/client role partitioning.

use crate::types::GeneratorParams;

/// Disjoint server and client index sets derived from the raw counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePartition {
    pub servers: Vec<i64>,
    pub clients: Vec<i64>,
}

impl RolePartition {
    /// Derive the partition from the prompted counts.
    ///
    /// Candidate servers are `1..=num_servers`; candidate clients are
    /// `clients_from..clients_from + num_clients`. Both are clipped to
    /// `[1, total_orgs]`, and indices outside that range are dropped
    /// silently. Servers win overlap: an index that falls in both
    /// candidate ranges stays a server and never appears as a client.
    pub fn derive(params: &GeneratorParams) -> Self {
        let servers: Vec<i64> = (1..=params.num_servers.min(params.total_orgs)).collect();

        let client_lo = params.clients_from.max(1);
        let client_hi = params
            .clients_from
            .saturating_add(params.num_clients)
            .min(params.total_orgs.saturating_add(1));
        let clients: Vec<i64> = (client_lo..client_hi)
            .filter(|c| !servers.contains(c))
            .collect();

        Self { servers, clients }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(total: i64, servers: i64, from: i64, clients: i64) -> GeneratorParams {
        GeneratorParams {
            total_orgs: total,
            num_servers: servers,
            clients_from: from,
            num_clients: clients,
            required_peer_count: 0,
            max_peer_count: 3,
            block_to_live: 1_000_000,
        }
    }

    #[test]
    fn test_basic_partition() {
        let partition = RolePartition::derive(&params(10, 1, 2, 9));
        assert_eq!(partition.servers, vec![1]);
        assert_eq!(partition.clients, (2..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_servers_win_overlap() {
        // Client range starts inside the server range; overlapping
        // indices stay servers.
        let partition = RolePartition::derive(&params(10, 3, 2, 4));
        assert_eq!(partition.servers, vec![1, 2, 3]);
        assert_eq!(partition.clients, vec![4, 5]);
    }

    #[test]
    fn test_out_of_bounds_indices_dropped() {
        let partition = RolePartition::derive(&params(3, 5, 2, 10));
        assert_eq!(partition.servers, vec![1, 2, 3]);
        assert!(partition.clients.is_empty());
    }

    #[test]
    fn test_negative_client_start_is_clipped() {
        let partition = RolePartition::derive(&params(4, 1, -2, 6));
        assert_eq!(partition.servers, vec![1]);
        assert_eq!(partition.clients, vec![2, 3]);
    }

    #[test]
    fn test_zero_servers() {
        let partition = RolePartition::derive(&params(3, 0, 1, 3));
        assert!(partition.servers.is_empty());
        assert_eq!(partition.clients, vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_total() {
        let partition = RolePartition::derive(&params(0, 1, 2, 9));
        assert!(partition.servers.is_empty());
        assert!(partition.clients.is_empty());
    }

    #[test]
    fn test_extreme_counts_do_not_overflow() {
        let partition = RolePartition::derive(&params(3, 1, i64::MAX - 1, i64::MAX));
        assert_eq!(partition.servers, vec![1]);
        assert!(partition.clients.is_empty());
    }
}
