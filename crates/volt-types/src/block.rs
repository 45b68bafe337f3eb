//! Blocks and block headers.

use volt_crypto::sha256;
use volt_primitives::{Address, H256};

use crate::codec;
use crate::transaction::Transaction;

/// Header of a native block.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockHeader {
    /// Block height
    pub number: u64,
    /// Id of the parent block
    pub parent_id: H256,
    /// Merkle root over the block's transactions
    pub tx_root: H256,
    /// State root after applying the block
    pub state_root: H256,
    /// Producing witness
    pub witness: Address,
    /// Production timestamp, epoch milliseconds
    pub timestamp_ms: i64,
    /// Header format version
    pub version: u32,
}

/// A native block.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// Transactions in execution order
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Canonical block id: SHA-256 of the encoded header with the first
    /// eight bytes overwritten by the big-endian block height.
    pub fn id(&self) -> H256 {
        let mut bytes = *sha256(&codec::encode_header(&self.header)).as_bytes();
        bytes[..8].copy_from_slice(&self.header.number.to_be_bytes());
        H256::from_bytes(bytes)
    }

    /// Block height.
    pub fn number(&self) -> u64 {
        self.header.number
    }

    /// Production timestamp, epoch milliseconds.
    pub fn timestamp_ms(&self) -> i64 {
        self.header.timestamp_ms
    }

    /// Number of transactions in the block.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Serialized size in bytes.
    pub fn serialized_size(&self) -> usize {
        codec::encode_block(self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(number: u64) -> BlockHeader {
        BlockHeader {
            number,
            parent_id: H256::ZERO,
            tx_root: H256::ZERO,
            state_root: H256::ZERO,
            witness: Address::from_eth_bytes([0x07; 20]),
            timestamp_ms: 1_700_000_000_000,
            version: 1,
        }
    }

    // ==================== Id tests ====================

    #[test]
    fn test_id_embeds_height() {
        let block = Block {
            header: header(0x0102_0304),
            transactions: Vec::new(),
        };
        let id = block.id();
        assert_eq!(&id.as_bytes()[..8], &0x0102_0304u64.to_be_bytes());
    }

    #[test]
    fn test_id_depends_on_header() {
        let a = Block {
            header: header(9),
            transactions: Vec::new(),
        };
        let mut other = header(9);
        other.timestamp_ms += 3_000;
        let b = Block {
            header: other,
            transactions: Vec::new(),
        };
        assert_ne!(a.id(), b.id());
        // Same height keeps the embedded prefix equal even when ids differ.
        assert_eq!(&a.id().as_bytes()[..8], &b.id().as_bytes()[..8]);
    }

    #[test]
    fn test_accessors() {
        let block = Block {
            header: header(12),
            transactions: Vec::new(),
        };
        assert_eq!(block.number(), 12);
        assert_eq!(block.timestamp_ms(), 1_700_000_000_000);
        assert_eq!(block.transaction_count(), 0);
        assert!(block.serialized_size() > 0);
    }
}
