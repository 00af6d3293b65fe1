multiversx_sc::imports!();

use crate::types::Proposal;

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration (written once in init) ──

    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("contributionEnd")]
    fn contribution_end(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("voteWindow")]
    fn vote_window(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("quorumPercent")]
    fn quorum_percent(&self) -> SingleValueMapper<u64>;

    // ── Membership & treasury ──

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("stakes")]
    fn stakes(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalStakes")]
    fn total_stakes(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("availableFunds")]
    fn available_funds(&self) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[storage_mapper("nextProposalId")]
    fn next_proposal_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
