use crate::harness::Fixture;

/// Deploys the fixture and funds it once from the deployer, mirroring the
/// withdrawal group's shared setup.
fn funded_fixture() -> Option<Fixture> {
    let mut fx = Fixture::deploy()?;
    fx.fund_me
        .fund(&mut fx.ctx.chain, Fixture::send_value())
        .unwrap();
    Some(fx)
}

#[test]
fn test_withdraw_eth_from_a_single_funder() {
    let Some(mut fx) = funded_fixture() else { return };

    let starting_contract_balance = fx.balance(fx.fund_me.address());
    let starting_deployer_balance = fx.balance(fx.deployer);

    let receipt = fx.fund_me.withdraw(&mut fx.ctx.chain).unwrap();
    let gas_cost = receipt.gas_cost();

    let ending_contract_balance = fx.balance(fx.fund_me.address());
    let ending_deployer_balance = fx.balance(fx.deployer);

    assert_eq!(ending_contract_balance, 0);
    assert_eq!(
        ending_deployer_balance + gas_cost,
        starting_deployer_balance + starting_contract_balance
    );
}

#[test]
fn test_allows_withdrawal_with_multiple_funders() {
    let Some(mut fx) = funded_fixture() else { return };
    let send_value = Fixture::send_value();

    let funders: Vec<_> = (1..6).map(|i| fx.account(i)).collect();
    for funder in &funders {
        let connected = fx.fund_me_as(*funder);
        connected.fund(&mut fx.ctx.chain, send_value).unwrap();
    }

    let starting_contract_balance = fx.balance(fx.fund_me.address());
    let starting_deployer_balance = fx.balance(fx.deployer);

    let receipt = fx.fund_me.withdraw(&mut fx.ctx.chain).unwrap();
    let gas_cost = receipt.gas_cost();

    assert_eq!(fx.balance(fx.fund_me.address()), 0);
    assert_eq!(
        fx.balance(fx.deployer) + gas_cost,
        starting_deployer_balance + starting_contract_balance
    );

    // The funder list is cleared; index 0 access reverts.
    let err = fx.fund_me.funder(&fx.ctx.chain, 0).unwrap_err();
    assert!(err.is_revert());

    // Every tracked contribution is reset.
    for funder in &funders {
        let funded = fx.fund_me.amount_funded(&fx.ctx.chain, *funder).unwrap();
        assert_eq!(funded, 0);
    }
}

#[test]
fn test_only_allows_the_owner_to_withdraw() {
    let Some(mut fx) = funded_fixture() else { return };

    let attacker = fx.account(1);
    let starting_contract_balance = fx.balance(fx.fund_me.address());

    let attacker_contract = fx.fund_me_as(attacker);
    let err = attacker_contract.withdraw(&mut fx.ctx.chain).unwrap_err();
    assert!(err.is_revert());

    // Contract balance untouched by the rejected attempt.
    assert_eq!(fx.balance(fx.fund_me.address()), starting_contract_balance);
}

#[test]
fn test_fund_then_withdraw_end_to_end() {
    let Some(mut fx) = Fixture::deploy() else { return };
    let send_value = Fixture::send_value();

    fx.fund_me.fund(&mut fx.ctx.chain, send_value).unwrap();
    assert_eq!(
        fx.fund_me
            .amount_funded(&fx.ctx.chain, fx.deployer)
            .unwrap(),
        send_value
    );
    assert_eq!(fx.fund_me.funder(&fx.ctx.chain, 0).unwrap(), fx.deployer);

    fx.fund_me.withdraw(&mut fx.ctx.chain).unwrap();
    assert_eq!(fx.balance(fx.fund_me.address()), 0);
    assert!(fx.fund_me.funder(&fx.ctx.chain, 0).unwrap_err().is_revert());
}
