mod meta;
pub use self::meta::{Envelope, Meta};
