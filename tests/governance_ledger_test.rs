// Smoke test for the contract object under the debug API.
//
// Endpoint-level behaviour is covered by the blackbox scenario tests in
// governance_ledger_blackbox_test.rs, which drive the contract through
// its typed proxy.

use multiversx_sc_scenario::api::DebugApi;

type LedgerContract = governance_ledger::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> LedgerContract = governance_ledger::contract_obj;
}
