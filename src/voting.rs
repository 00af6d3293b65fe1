multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_EXECUTED, ERR_ALREADY_VOTED, ERR_BEFORE_END_DATE, ERR_BELOW_QUORUM,
    ERR_INSUFFICIENT_FUNDS, ERR_ONLY_INVESTORS, ERR_VOTING_CLOSED,
};
use crate::types::ProposalStatus;
use crate::{events, phase, proposals, storage, treasury};

#[multiversx_sc::module]
pub trait VotingModule:
    storage::StorageModule
    + events::EventsModule
    + phase::PhaseModule
    + treasury::TreasuryModule
    + proposals::ProposalsModule
{
    // ========================================================
    // ENDPOINT: vote
    // Weight is the voter's stake at the moment of voting.
    // The already-voted check runs before the window check.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.is_member(&caller), ERR_ONLY_INVESTORS);

        let mut proposal = self.require_proposal(proposal_id);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );
        require!(self.now() < proposal.end, ERR_VOTING_CLOSED);

        let weight = self.stakes(&caller).get();
        proposal.votes += &weight;

        self.has_voted(proposal_id, &caller).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, &caller, &weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Open to anyone: quorum gates execution, not identity.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);
        require!(self.now() >= proposal.end, ERR_BEFORE_END_DATE);
        require!(self.meets_quorum(&proposal.votes), ERR_BELOW_QUORUM);

        // Other executions or withdrawals may have drained the pool
        // since this proposal was created.
        require!(
            proposal.amount <= self.available_funds().get(),
            ERR_INSUFFICIENT_FUNDS
        );

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);
        self.available_funds()
            .update(|funds| *funds -= &proposal.amount);

        self.send().direct_egld(&proposal.recipient, &proposal.amount);
        self.proposal_executed_event(proposal_id, &proposal.recipient, &proposal.amount);
    }

    // ========================================================
    // INTERNAL: quorum
    // votes * 100 >= totalStakes * quorumPercent, in integers,
    // against the live totalStakes.
    // ========================================================

    fn meets_quorum(&self, votes: &BigUint) -> bool {
        let tally = votes * 100u64;
        let threshold = &self.total_stakes().get() * self.quorum_percent().get();
        tally >= threshold
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasVoted)]
    fn has_member_voted(&self, member: &ManagedAddress, proposal_id: u64) -> bool {
        self.has_voted(proposal_id, member).get()
    }

    #[view(hasReachedQuorum)]
    fn has_reached_quorum(&self, proposal_id: u64) -> bool {
        let proposal = self.require_proposal(proposal_id);
        self.meets_quorum(&proposal.votes)
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> ProposalStatus {
        let proposal = self.require_proposal(proposal_id);
        if proposal.executed {
            ProposalStatus::Executed
        } else if self.now() < proposal.end {
            ProposalStatus::Voting
        } else if self.meets_quorum(&proposal.votes) {
            ProposalStatus::Approved
        } else {
            ProposalStatus::Rejected
        }
    }

    #[view(getQuorumPercent)]
    fn get_quorum_percent(&self) -> u64 {
        self.quorum_percent().get()
    }
}
