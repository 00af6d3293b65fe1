// ============================================================
// Error messages, grouped by failure category.
// Every failure aborts the transaction, so none of these leave
// partial state behind.
// ============================================================

// ── Auth: caller lacks the required role ──

pub const ERR_ONLY_INVESTORS: &str = "only investors";
pub const ERR_ONLY_ADMIN: &str = "only admin";

// ── Phase: outside the valid time window ──

pub const ERR_CONTRIBUTION_ENDED: &str = "contribution period has ended";
pub const ERR_VOTING_CLOSED: &str = "voting window closed";
pub const ERR_BEFORE_END_DATE: &str = "cannot execute proposal before end date";

// ── State: object already consumed ──

pub const ERR_ALREADY_VOTED: &str = "already voted";
pub const ERR_ALREADY_EXECUTED: &str = "proposal already executed";

// ── Validation: amount out of bounds ──

pub const ERR_ZERO_AMOUNT: &str = "amount must be greater than zero";
pub const ERR_AMOUNT_TOO_BIG: &str = "amount too big";
pub const ERR_INSUFFICIENT_STAKE: &str = "not enough stake";
pub const ERR_INSUFFICIENT_FUNDS: &str = "not enough available funds";
pub const ERR_INVALID_QUORUM: &str = "quorum must be between 0 and 100";

// ── Quorum ──

pub const ERR_BELOW_QUORUM: &str = "cannot execute proposal with votes below quorum";

// ── Lookup ──

pub const ERR_UNKNOWN_PROPOSAL: &str = "proposal does not exist";
