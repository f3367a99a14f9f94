use gauge_deployer::GaugeRecord;
use soroban_sdk::{Address, BytesN, Env, Vec};

pub trait ChildGaugeFactoryTrait {
    // Deploy a gauge for `lp_token` on this chain.
    // Without a salt the deployer's next nonce is used to derive one.
    fn deploy_gauge(
        e: Env,
        deployer: Address,
        lp_token: Address,
        salt: Option<BytesN<32>>,
        manager: Option<Address>,
    ) -> Address;

    // Deployment requested by the root factory through the messenger.
    // The gauge is deployed mirrored: it can request emissions from the root chain.
    fn deploy_gauge_from_root(
        e: Env,
        messenger: Address,
        origin_chain_id: u32,
        sender: Address,
        lp_token: Address,
        salt: BytesN<32>,
        deployer: Address,
        manager: Address,
    ) -> Address;

    // Ask the root chain to transmit emissions for `gauge`. At most once per week.
    // Returns false when nothing was sent.
    fn request_emissions(e: Env, gauge: Address) -> bool;

    // Pay out emissions accrued by `user` in `gauge`. Returns the amount paid.
    fn mint(e: Env, user: Address, gauge: Address) -> u128;
    fn mint_many(e: Env, user: Address, gauges: Vec<Address>) -> u128;

    fn minted(e: Env, user: Address, gauge: Address) -> u128;
    fn last_request(e: Env, gauge: Address) -> u64;
    fn is_mirrored(e: Env, gauge: Address) -> bool;
    fn is_valid_gauge(e: Env, gauge: Address) -> bool;
    fn get_gauge(e: Env, index: u32) -> Address;
    fn get_gauge_count(e: Env) -> u32;
    fn get_gauge_from_lp_token(e: Env, lp_token: Address) -> Option<Address>;
    fn gauge_record(e: Env, gauge: Address) -> Option<GaugeRecord>;
    fn nonces(e: Env, deployer: Address) -> u64;

    // Address `deploy_gauge` would produce for the pair.
    fn predict_gauge_address(e: Env, deployer: Address, salt: BytesN<32>) -> Address;

    fn token(e: Env) -> Address;
    fn chain_id(e: Env) -> u32;
    fn implementation(e: Env) -> BytesN<32>;
    fn messenger(e: Env) -> Option<Address>;
    fn voting_escrow(e: Env) -> Option<Address>;
    fn root_factory(e: Env) -> Option<Address>;
    fn root_chain_id(e: Env) -> Option<u32>;
}

pub trait AdminInterface {
    fn set_mirrored(e: Env, caller: Address, gauge: Address, mirrored: bool);
    fn set_messenger(e: Env, caller: Address, messenger: Option<Address>);
    fn set_voting_escrow(e: Env, caller: Address, voting_escrow: Option<Address>);
    fn set_implementation(e: Env, caller: Address, implementation: BytesN<32>);
    fn set_root_factory(e: Env, caller: Address, root_chain_id: u32, root_factory: Address);

    // Kill or revive a gauge. Killed gauges stop accruing and requesting emissions.
    fn set_killed(e: Env, caller: Address, gauge: Address, is_killed: bool);
}
