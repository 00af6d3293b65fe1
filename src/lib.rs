#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod governance_ledger_proxy;
pub mod phase;
pub mod proposals;
pub mod storage;
pub mod treasury;
pub mod types;
pub mod voting;

use errors::ERR_INVALID_QUORUM;
use types::LedgerPhase;

// ============================================================
// Constants
// ============================================================

/// Quorum is expressed in whole percent of total stake
const MAX_QUORUM_PERCENT: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait GovernanceLedger:
    storage::StorageModule
    + events::EventsModule
    + phase::PhaseModule
    + treasury::TreasuryModule
    + proposals::ProposalsModule
    + voting::VotingModule
{
    // ========================================================
    // Init / Upgrade
    // The deployer becomes admin. Windows are in seconds and
    // the contribution deadline is fixed at deploy time.
    // ========================================================

    #[init]
    fn init(&self, contribution_window: u64, vote_window: u64, quorum_percent: u64) {
        require!(quorum_percent <= MAX_QUORUM_PERCENT, ERR_INVALID_QUORUM);

        let deployed_at = self.now();
        self.admin().set(self.blockchain().get_caller());
        self.contribution_end()
            .set(deployed_at.saturating_add(contribution_window));
        self.vote_window().set(vote_window);
        self.quorum_percent().set(quorum_percent);

        self.total_stakes().set(BigUint::zero());
        self.available_funds().set(BigUint::zero());
        self.next_proposal_id().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS — ledger-wide snapshot
    // ========================================================

    /// (totalStakes, availableFunds, nextProposalId, memberCount, phase)
    #[view(getLedgerStatus)]
    fn get_ledger_status(&self) -> MultiValue5<BigUint, BigUint, u64, u64, LedgerPhase> {
        let total_stakes = self.total_stakes().get();
        let available_funds = self.available_funds().get();
        let next_proposal_id = self.next_proposal_id().get();
        let member_count = self.members().len() as u64;
        let phase = self.get_ledger_phase();
        (
            total_stakes,
            available_funds,
            next_proposal_id,
            member_count,
            phase,
        )
            .into()
    }
}
