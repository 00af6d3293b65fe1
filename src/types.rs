multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — a disbursement request from the shared pool
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub amount: BigUint<M>,
    pub recipient: ManagedAddress<M>,
    /// Sum of the live stake of every member that voted
    pub votes: BigUint<M>,
    /// Block timestamp at which voting closes and execution opens
    pub end: u64,
    pub executed: bool,
}

// ============================================================
// Proposal Status — derived, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window is open.
    Voting,
    /// Window closed and votes meet quorum. Anyone can execute.
    Approved,
    /// Window closed below quorum. Stays executable if stake shrinks
    /// enough for the tally to meet quorum later.
    Rejected,
    /// Funds sent. Terminal state.
    Executed,
}

// ============================================================
// Ledger Phase — contribution window vs. governance only
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum LedgerPhase {
    /// Contributions accepted. Proposals and votes are allowed too.
    Contribution,
    /// Contribution deadline passed. Only governance and exits remain.
    Governance,
}
