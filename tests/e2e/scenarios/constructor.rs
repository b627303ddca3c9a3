use crate::harness::Fixture;

#[test]
fn test_sets_the_price_feed_address() {
    let Some(fx) = Fixture::deploy() else { return };

    let registered = fx.fund_me.price_feed(&fx.ctx.chain).unwrap();
    assert_eq!(registered, fx.mock_feed);
}

#[test]
fn test_deployer_is_the_owner() {
    let Some(fx) = Fixture::deploy() else { return };

    let owner = fx.ctx.chain.fund_me(fx.fund_me.address()).unwrap().owner();
    assert_eq!(owner, fx.deployer);
}

#[test]
fn test_mock_feed_serves_configured_answer() {
    let Some(fx) = Fixture::deploy() else { return };

    let feed = fx.ctx.chain.price_feed_at(fx.mock_feed).unwrap();
    assert_eq!(feed.decimals(), fx.ctx.config.price_feed.decimals);
    assert_eq!(feed.latest_answer(), fx.ctx.config.price_feed.initial_answer);
}
