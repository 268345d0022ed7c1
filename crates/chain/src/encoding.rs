//! JSON wire form for chains.
//!
//! A chain travels as an array of flat block records:
//!
//! ```json
//! [{"blockNumber":0,"parentHash":null,"txnCount":1,"txns":[{"Alice":100}],"hash":"..."}]
//! ```
//!
//! Decoding only checks shape; [`ChainValidator`](crate::ChainValidator)
//! checks everything else.

use crate::replay::ChainError;
use microledger_core::Block;

/// Encode a chain as a compact JSON array of block records.
pub fn encode_chain(chain: &[Block]) -> String {
    serde_json::to_string(chain).expect("serialization should not fail")
}

/// Encode a chain as pretty-printed JSON.
pub fn encode_chain_pretty(chain: &[Block]) -> String {
    serde_json::to_string_pretty(chain).expect("serialization should not fail")
}

/// Decode a JSON array of block records.
pub fn decode_chain(input: &str) -> Result<Vec<Block>, ChainError> {
    Ok(serde_json::from_str(input)?)
}
