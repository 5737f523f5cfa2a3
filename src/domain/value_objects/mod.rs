mod key_prefix;
mod object_key;

pub use key_prefix::KeyPrefix;
pub use object_key::ObjectKey;
