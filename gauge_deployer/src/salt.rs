use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env};

// Salt actually handed to the deployer: binds the caller-supplied salt to
// the destination chain and the account that requested the deployment.
pub fn effective_salt(e: &Env, chain_id: u32, deployer: &Address, salt: &BytesN<32>) -> BytesN<32> {
    let mut data = Bytes::new(e);
    data.append(&chain_id.to_xdr(e));
    data.append(&deployer.clone().to_xdr(e));
    data.append(&salt.clone().to_xdr(e));
    e.crypto().sha256(&data).to_bytes()
}

// Salt used when the caller does not provide one.
pub fn default_salt(e: &Env, deployer: &Address, nonce: u64) -> BytesN<32> {
    let mut data = Bytes::new(e);
    data.append(&deployer.clone().to_xdr(e));
    data.append(&nonce.to_xdr(e));
    e.crypto().sha256(&data).to_bytes()
}

// Address a `factory` will deploy to for the given triple. Pure derivation,
// works for foreign factories as well as for the current contract.
pub fn predict_address(
    e: &Env,
    factory: &Address,
    chain_id: u32,
    deployer: &Address,
    salt: &BytesN<32>,
) -> Address {
    e.deployer()
        .with_address(factory.clone(), effective_salt(e, chain_id, deployer, salt))
        .deployed_address()
}
