use crate::harness::Fixture;
use fundme_core::fund_me;

#[test]
fn test_fails_if_you_dont_send_enough_eth() {
    let Some(mut fx) = Fixture::deploy() else { return };

    let err = fx.fund_me.fund(&mut fx.ctx.chain, 0).unwrap_err();
    assert_eq!(err.revert_reason(), Some(fund_me::NOT_ENOUGH_ETH));

    // Rejected call leaves no trace in the ledger.
    let funded = fx
        .fund_me
        .amount_funded(&fx.ctx.chain, fx.deployer)
        .unwrap();
    assert_eq!(funded, 0);
    assert_eq!(fx.balance(fx.fund_me.address()), 0);
}

#[test]
fn test_updates_the_amount_funded_data_structure() {
    let Some(mut fx) = Fixture::deploy() else { return };
    let send_value = Fixture::send_value();

    fx.fund_me.fund(&mut fx.ctx.chain, send_value).unwrap();

    let funded = fx
        .fund_me
        .amount_funded(&fx.ctx.chain, fx.deployer)
        .unwrap();
    assert_eq!(funded, send_value);
}

#[test]
fn test_tracked_amount_accumulates_across_calls() {
    let Some(mut fx) = Fixture::deploy() else { return };
    let send_value = Fixture::send_value();

    fx.fund_me.fund(&mut fx.ctx.chain, send_value).unwrap();
    fx.fund_me.fund(&mut fx.ctx.chain, send_value).unwrap();

    let funded = fx
        .fund_me
        .amount_funded(&fx.ctx.chain, fx.deployer)
        .unwrap();
    assert_eq!(funded, 2 * send_value);
}

#[test]
fn test_minimum_tracks_the_feed_answer() {
    let Some(mut fx) = Fixture::deploy() else { return };

    // 0.025 ETH is exactly 50 USD at the default 2000 USD/ETH answer.
    let exact_minimum = fundme_core::parse_ether(1) / 40;
    fx.fund_me
        .fund(&mut fx.ctx.chain, exact_minimum)
        .unwrap();

    // Halving the answer doubles the required value.
    let halved = fx.ctx.config.price_feed.initial_answer / 2;
    fx.ctx
        .chain
        .price_feed_mut(fx.mock_feed)
        .unwrap()
        .update_answer(halved);

    let err = fx
        .fund_me
        .fund(&mut fx.ctx.chain, exact_minimum)
        .unwrap_err();
    assert_eq!(err.revert_reason(), Some(fund_me::NOT_ENOUGH_ETH));
}

#[test]
fn test_adds_funder_to_array_of_funders() {
    let Some(mut fx) = Fixture::deploy() else { return };

    fx.fund_me
        .fund(&mut fx.ctx.chain, Fixture::send_value())
        .unwrap();

    let funder = fx.fund_me.funder(&fx.ctx.chain, 0).unwrap();
    assert_eq!(funder, fx.deployer);
}
