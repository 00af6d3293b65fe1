multiversx_sc::imports!();

use crate::errors::ERR_UNKNOWN_PROPOSAL;
use crate::storage;
use crate::types::LedgerPhase;

/// Time gates derived from the block timestamp and the immutable windows.
/// Nothing is scheduled; every check reads the clock when it runs.
#[multiversx_sc::module]
pub trait PhaseModule: storage::StorageModule {
    fn now(&self) -> u64 {
        self.blockchain().get_block_timestamp()
    }

    #[view(isContributionOpen)]
    fn is_contribution_open(&self) -> bool {
        self.now() < self.contribution_end().get()
    }

    #[view(isVotingOpen)]
    fn is_voting_open(&self, proposal_id: u64) -> bool {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_UNKNOWN_PROPOSAL
        );
        self.now() < self.proposals(proposal_id).get().end
    }

    #[view(getLedgerPhase)]
    fn get_ledger_phase(&self) -> LedgerPhase {
        if self.is_contribution_open() {
            LedgerPhase::Contribution
        } else {
            LedgerPhase::Governance
        }
    }

    #[view(getContributionEnd)]
    fn get_contribution_end(&self) -> u64 {
        self.contribution_end().get()
    }

    #[view(getVoteWindow)]
    fn get_vote_window(&self) -> u64 {
        self.vote_window().get()
    }
}
