//! MSP naming and endorsement policy expressions.

/// Canonical MSP name for an organization index.
pub fn msp_name(org: i64) -> String {
    format!("Org{org}MSP")
}

/// `OR(...)` expression over `.member` predicates, one per organization,
/// in the given order. An empty slice yields `OR()`.
pub fn member_expr(orgs: &[i64]) -> String {
    or_expr(orgs, "member")
}

/// `OR(...)` expression over `.peer` predicates.
///
/// Not referenced by the default collection shapes; available to callers
/// that want peer-scoped rather than member-scoped endorsement.
pub fn peer_expr(orgs: &[i64]) -> String {
    or_expr(orgs, "peer")
}

fn or_expr(orgs: &[i64], role: &str) -> String {
    let inner = orgs
        .iter()
        .map(|org| format!("'{}.{role}'", msp_name(*org)))
        .collect::<Vec<_>>()
        .join(",");
    format!("OR({inner})")
}
