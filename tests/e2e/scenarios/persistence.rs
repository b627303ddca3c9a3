use crate::harness::Fixture;
use fundme_core::DeployContext;
use tempfile::TempDir;

/// The runner's load-execute-save path: a funded deployment persisted to
/// disk can be reloaded and withdrawn from, conserving value net of gas.
#[test]
fn test_withdrawal_survives_reload() {
    let Some(mut fx) = Fixture::deploy() else { return };
    let tmp = TempDir::new().unwrap();

    fx.fund_me
        .fund(&mut fx.ctx.chain, Fixture::send_value())
        .unwrap();
    fx.ctx.save(tmp.path()).unwrap();

    let mut loaded = DeployContext::load(tmp.path(), &fx.ctx.config).unwrap();
    let fund_me = loaded.fund_me("deployer").unwrap();

    let starting_contract_balance = loaded.chain.balance_of(fund_me.address());
    let starting_deployer_balance = loaded.chain.balance_of(fund_me.caller());
    assert_eq!(starting_contract_balance, Fixture::send_value());

    let receipt = fund_me.withdraw(&mut loaded.chain).unwrap();

    assert_eq!(loaded.chain.balance_of(fund_me.address()), 0);
    assert_eq!(
        loaded.chain.balance_of(fund_me.caller()) + receipt.gas_cost(),
        starting_deployer_balance + starting_contract_balance
    );
}
