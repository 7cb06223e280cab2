//! JSON text codec for [`OrderedMap`](crate::OrderedMap).

pub mod decoder;
pub mod encoder;
pub(crate) mod util;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;
