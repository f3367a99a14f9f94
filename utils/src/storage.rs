// Instance storage keeps contract configuration, persistent storage keeps per-key maps.
// Every accessor bumps the TTL of the entry it touches.

#[macro_export]
macro_rules! generate_instance_storage_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub fn [<set_ $attr_name>](e: &Env, $attr_name: &$data_type) {
                bump_instance(e);
                e.storage()
                    .instance()
                    .set(&$key, $attr_name)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                let value_result = e.storage().instance().get(&$key);
                match value_result {
                    Some(value) => value,
                    None => {
                        panic_with_error!(e, StorageError::ValueNotInitialized)
                    }
                }
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> $data_type {
                bump_instance(e);
                e.storage().instance().get(&$key).unwrap_or($default)
            }
        }
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter {
    ($attr_name:ident, $key:expr, $data_type:ty) => {
        generate_instance_storage_getter!($attr_name, $key, $data_type);
        generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}

#[macro_export]
macro_rules! generate_instance_storage_getter_and_setter_with_default {
    ($attr_name:ident, $key:expr, $data_type:ty, $default:expr) => {
        generate_instance_storage_getter_with_default!($attr_name, $key, $data_type, $default);
        generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}

// Optional configuration: `get_x` returns `None` until `set_x` has been called once,
// `require_x` fails with the provided error instead.
#[macro_export]
macro_rules! generate_instance_storage_option_accessors {
    ($attr_name:ident, $key:expr, $data_type:ty, $missing_error:expr) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env) -> Option<$data_type> {
                bump_instance(e);
                e.storage().instance().get(&$key)
            }

            pub fn [<require_ $attr_name>](e: &Env) -> $data_type {
                match [<get_ $attr_name>](e) {
                    Some(value) => value,
                    None => panic_with_error!(e, $missing_error),
                }
            }
        }
        generate_instance_storage_setter!($attr_name, $key, $data_type);
    };
}

// Keyed map in persistent storage with a default for missing entries.
#[macro_export]
macro_rules! generate_persistent_map_accessors {
    ($attr_name:ident, $key_fn:expr, $key_type:ty, $data_type:ty, $default:expr) => {
        paste! {
            pub fn [<get_ $attr_name>](e: &Env, key: $key_type) -> $data_type {
                let key = $key_fn(key);
                match e.storage().persistent().get(&key) {
                    Some(value) => {
                        bump_persistent(e, &key);
                        value
                    }
                    None => $default,
                }
            }

            pub fn [<set_ $attr_name>](e: &Env, key: $key_type, value: &$data_type) {
                let key = $key_fn(key);
                e.storage().persistent().set(&key, value);
                bump_persistent(e, &key);
            }
        }
    };
}
