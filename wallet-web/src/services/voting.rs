//! Vote submission flow (stub).
//!
//! On-chain vote submission ships with the governance contract; until
//! then the flow is stubbed so the page wiring is exercised end to end.

/// A proposal open for voting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proposal {
    pub id: u32,
    pub title: String,
    pub summary: String,
}

/// The proposals shown on the ballot.
pub fn open_proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: 1,
            title: "Fund the community grants round".to_string(),
            summary: "Allocate 10 ETH from the treasury to Q4 community grants.".to_string(),
        },
        Proposal {
            id: 2,
            title: "Adopt quadratic vote weighting".to_string(),
            summary: "Switch ballot tallying from one-address-one-vote to quadratic weighting."
                .to_string(),
        },
    ]
}

// TODO: replace with the real transaction flow once the governance
// contract is deployed on Sepolia.
pub async fn submit_vote(_account: &str, proposal_id: u32) -> Result<String, String> {
    log::info!("vote submission requested for proposal {proposal_id}");
    Err("Vote submission is not available yet.".to_string())
}

/// Whether `account` has already voted in the open round. Stubbed until
/// the contract exposes the ballot registry.
pub fn has_voted(_account: &str) -> bool {
    false
}
