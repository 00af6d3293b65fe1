multiversx_sc::imports!();

use crate::errors::{
    ERR_CONTRIBUTION_ENDED, ERR_INSUFFICIENT_FUNDS, ERR_INSUFFICIENT_STAKE, ERR_ONLY_ADMIN,
    ERR_ZERO_AMOUNT,
};
use crate::{events, phase, storage};

// ============================================================
// Membership & Treasury
// totalStakes tracks the sum of member stakes; availableFunds
// tracks what the pool can still pay out.
// ============================================================

#[multiversx_sc::module]
pub trait TreasuryModule:
    storage::StorageModule + events::EventsModule + phase::PhaseModule
{
    // ========================================================
    // ENDPOINT: contribute
    // Only while the contribution window is open.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        require!(self.is_contribution_open(), ERR_CONTRIBUTION_ENDED);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.credit_stake(&caller, &amount);
        self.total_stakes().update(|total| *total += &amount);
        self.available_funds().update(|funds| *funds += &amount);

        let new_stake = self.stakes(&caller).get();
        self.contribute_event(&caller, &amount, &new_stake);
    }

    // ========================================================
    // ENDPOINT: redeemStake
    // Exit path: burns stake and pays the same amount back.
    // ========================================================

    #[endpoint(redeemStake)]
    fn redeem_stake(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let stake = self.stakes(&caller).get();
        require!(amount <= stake, ERR_INSUFFICIENT_STAKE);
        require!(
            amount <= self.available_funds().get(),
            ERR_INSUFFICIENT_FUNDS
        );

        let remaining = &stake - &amount;
        self.stakes(&caller).set(&remaining);
        self.total_stakes().update(|total| *total -= &amount);
        self.available_funds().update(|funds| *funds -= &amount);

        self.send().direct_egld(&caller, &amount);
        self.redeem_stake_event(&caller, &amount, &remaining);
    }

    // ========================================================
    // ENDPOINT: transferStake
    // Reassigns voting weight. No value leaves the pool.
    // ========================================================

    #[endpoint(transferStake)]
    fn transfer_stake(&self, amount: BigUint, recipient: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        require!(
            amount <= self.stakes(&caller).get(),
            ERR_INSUFFICIENT_STAKE
        );

        self.stakes(&caller).update(|stake| *stake -= &amount);
        self.credit_stake(&recipient, &amount);

        self.transfer_stake_event(&caller, &recipient, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawEther
    // Admin-only drain, independent of proposals.
    // ========================================================

    #[endpoint(withdrawEther)]
    fn withdraw_ether(&self, amount: BigUint, to: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_ONLY_ADMIN);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        require!(
            amount <= self.available_funds().get(),
            ERR_INSUFFICIENT_FUNDS
        );

        self.available_funds().update(|funds| *funds -= &amount);

        self.send().direct_egld(&to, &amount);
        self.withdraw_ether_event(&caller, &to, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Adds stake to `member`, enrolling them on first credit.
    /// Membership is never revoked, even when stake drops to zero.
    fn credit_stake(&self, member: &ManagedAddress, amount: &BigUint) {
        self.members().insert(member.clone());
        self.stakes(member).update(|stake| *stake += amount);
    }

    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getStake)]
    fn get_stake(&self, member: &ManagedAddress) -> BigUint {
        self.stakes(member).get()
    }

    #[view(isMember)]
    fn is_member_view(&self, address: &ManagedAddress) -> bool {
        self.is_member(address)
    }

    #[view(getTotalStakes)]
    fn get_total_stakes(&self) -> BigUint {
        self.total_stakes().get()
    }

    #[view(getAvailableFunds)]
    fn get_available_funds(&self) -> BigUint {
        self.available_funds().get()
    }

    #[view(getAdmin)]
    fn get_admin(&self) -> ManagedAddress {
        self.admin().get()
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.members().len();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), total);

        for (idx, member) in self.members().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(member);
            }
        }
        result
    }
}
