multiversx_sc::imports!();

use crate::errors::{ERR_AMOUNT_TOO_BIG, ERR_ONLY_INVESTORS, ERR_UNKNOWN_PROPOSAL};
use crate::types::Proposal;
use crate::{events, phase, storage, treasury};

#[multiversx_sc::module]
pub trait ProposalsModule:
    storage::StorageModule
    + events::EventsModule
    + phase::PhaseModule
    + treasury::TreasuryModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // Funds are checked here but only committed on execution,
    // so open proposals may jointly ask for more than the pool.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        name: ManagedBuffer,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(self.is_member(&caller), ERR_ONLY_INVESTORS);
        require!(
            amount <= self.available_funds().get(),
            ERR_AMOUNT_TOO_BIG
        );

        let proposal_id = self.next_proposal_id().get();
        let end = self.now().saturating_add(self.vote_window().get());

        let proposal = Proposal {
            id: proposal_id,
            name,
            amount,
            recipient,
            votes: BigUint::zero(),
            end,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.next_proposal_id().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, &caller, end, &proposal.amount);

        proposal_id
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), ERR_UNKNOWN_PROPOSAL);
        mapper.get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        self.require_proposal(id)
    }

    #[view(getNextProposalId)]
    fn get_next_proposal_id(&self) -> u64 {
        self.next_proposal_id().get()
    }

    /// Proposals with ids in `[from, from + count)`, clipped to existing ids.
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let end = core::cmp::min(from.saturating_add(count), self.next_proposal_id().get());

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    /// Same window as `getProposals`, keeping only proposals still
    /// open for voting.
    #[view(getOpenProposals)]
    fn get_open_proposals(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.now();
        let end = core::cmp::min(from.saturating_add(count), self.next_proposal_id().get());

        for id in from..end {
            let proposal = self.proposals(id).get();
            if !proposal.executed && now < proposal.end {
                result.push(proposal);
            }
        }
        result
    }
}
