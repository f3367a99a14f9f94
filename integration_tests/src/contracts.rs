pub(crate) mod messenger {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_messenger_contract.wasm"
    );
}
pub(crate) mod root_gauge {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_root_gauge_contract.wasm"
    );
}
pub(crate) mod root_gauge_factory {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_root_gauge_factory_contract.wasm"
    );
}
pub(crate) mod child_gauge {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_child_gauge_contract.wasm"
    );
}
pub(crate) mod child_gauge_factory {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_child_gauge_factory_contract.wasm"
    );
}
pub(crate) mod root_ve_oracle {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_root_ve_oracle_contract.wasm"
    );
}
pub(crate) mod child_ve_oracle {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_child_ve_oracle_contract.wasm"
    );
}
pub(crate) mod gauge_factory_proxy {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_gauge_factory_proxy_contract.wasm"
    );
}
