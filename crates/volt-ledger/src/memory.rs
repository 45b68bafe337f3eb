//! In-memory ledger backend.
//!
//! Backs the RPC test suites. Every mutator takes `&self` and goes through
//! one lock; [`MemoryLedger::view`] clones the state behind the lock, so a
//! view is a true snapshot and later mutations never show through it.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;
use volt_primitives::{Address, H256};
use volt_types::{
    Account, Block, ContractInfo, ContractPayload, SmartContract, Transaction, TransactionInfo,
    TriggerSmartContract,
};

use crate::error::{LedgerError, LedgerResult};
use crate::traits::{ConstantExecution, Cursor, LedgerBackend, LedgerView, TransactionCapsule};

/// Energy price a fresh [`MemoryLedger`] reports.
pub const DEFAULT_ENERGY_PRICE: u64 = 100;

/// Lifetime of a freshly built transaction, milliseconds.
const TRANSACTION_EXPIRATION_MS: i64 = 60_000;

#[derive(Clone, Default)]
struct ExecutionConfig {
    energy_used: u64,
    constant_results: Vec<Bytes>,
    error: Option<LedgerError>,
}

#[derive(Clone)]
struct MemoryState {
    blocks: BTreeMap<u64, Block>,
    block_ids: HashMap<H256, u64>,
    transactions: HashMap<H256, TransactionCapsule>,
    infos: HashMap<H256, TransactionInfo>,
    infos_by_block: BTreeMap<u64, Vec<TransactionInfo>>,
    accounts: HashMap<Address, Account>,
    contracts: HashMap<Address, SmartContract>,
    contract_infos: HashMap<Address, ContractInfo>,
    storage: HashMap<(Address, H256), H256>,
    energy_price: u64,
    energy_price_history: BTreeMap<i64, u64>,
    cursor: Cursor,
    witness_active: bool,
    coinbase: Option<Address>,
    active_connections: usize,
    peers: usize,
    sync_begin: u64,
    execution: ExecutionConfig,
    create_error: Option<LedgerError>,
}

impl Default for MemoryState {
    fn default() -> Self {
        MemoryState {
            blocks: BTreeMap::new(),
            block_ids: HashMap::new(),
            transactions: HashMap::new(),
            infos: HashMap::new(),
            infos_by_block: BTreeMap::new(),
            accounts: HashMap::new(),
            contracts: HashMap::new(),
            contract_infos: HashMap::new(),
            storage: HashMap::new(),
            energy_price: DEFAULT_ENERGY_PRICE,
            energy_price_history: BTreeMap::new(),
            cursor: Cursor::Head,
            witness_active: false,
            coinbase: None,
            active_connections: 0,
            peers: 0,
            sync_begin: 0,
            execution: ExecutionConfig::default(),
            create_error: None,
        }
    }
}

/// In-memory [`LedgerBackend`].
#[derive(Default)]
pub struct MemoryLedger {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryLedger {
    /// Create an empty ledger at the head role.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block and index its transactions as included.
    pub fn insert_block(&self, block: Block) {
        let mut state = self.state.write();
        let number = block.number();
        state.block_ids.insert(block.id(), number);
        for tx in &block.transactions {
            state.transactions.insert(
                tx.id(),
                TransactionCapsule {
                    transaction: tx.clone(),
                    block_number: Some(number),
                },
            );
        }
        state.blocks.insert(number, block);
    }

    /// Insert a transaction that has not been included in any block.
    pub fn insert_pending_transaction(&self, transaction: Transaction) {
        let mut state = self.state.write();
        state.transactions.insert(
            transaction.id(),
            TransactionCapsule {
                transaction,
                block_number: None,
            },
        );
    }

    /// Insert a transaction claiming inclusion at `number` without inserting
    /// the block itself. Models an index entry whose block is unavailable.
    pub fn insert_orphan_transaction(&self, transaction: Transaction, number: u64) {
        let mut state = self.state.write();
        state.transactions.insert(
            transaction.id(),
            TransactionCapsule {
                transaction,
                block_number: Some(number),
            },
        );
    }

    /// Insert an execution record, appending to its block's ordered list.
    pub fn insert_transaction_info(&self, info: TransactionInfo) {
        let mut state = self.state.write();
        state
            .infos_by_block
            .entry(info.block_number)
            .or_default()
            .push(info.clone());
        state.infos.insert(info.id, info);
    }

    /// Insert or replace an account.
    pub fn insert_account(&self, account: Account) {
        self.state.write().accounts.insert(account.address, account);
    }

    /// Insert or replace a deployed contract.
    pub fn insert_contract(&self, address: Address, contract: SmartContract) {
        self.state.write().contracts.insert(address, contract);
    }

    /// Insert or replace a contract's info record (runtime code).
    pub fn insert_contract_info(&self, address: Address, info: ContractInfo) {
        self.state.write().contract_infos.insert(address, info);
    }

    /// Set one storage slot.
    pub fn insert_storage(&self, address: Address, key: H256, value: H256) {
        self.state.write().storage.insert((address, key), value);
    }

    /// Set the current energy price.
    pub fn set_energy_price(&self, price: u64) {
        self.state.write().energy_price = price;
    }

    /// Record an energy price taking effect at `since_ms`.
    pub fn set_energy_price_since(&self, since_ms: i64, price: u64) {
        self.state.write().energy_price_history.insert(since_ms, price);
    }

    /// Set the operating role.
    pub fn set_cursor(&self, cursor: Cursor) {
        self.state.write().cursor = cursor;
    }

    /// Set whether the node produces blocks.
    pub fn set_witness_active(&self, active: bool) {
        self.state.write().witness_active = active;
    }

    /// Set the block-reward recipient.
    pub fn set_coinbase(&self, coinbase: Option<Address>) {
        self.state.write().coinbase = coinbase;
    }

    /// Set the active connection count.
    pub fn set_active_connections(&self, count: usize) {
        self.state.write().active_connections = count;
    }

    /// Set the known peer count.
    pub fn set_peer_count(&self, count: usize) {
        self.state.write().peers = count;
    }

    /// Set the height the current sync round started at.
    pub fn set_sync_begin_number(&self, number: u64) {
        self.state.write().sync_begin = number;
    }

    /// Configure the outcome of constant execution.
    pub fn set_constant_result(&self, energy_used: u64, constant_results: Vec<Bytes>) {
        let mut state = self.state.write();
        state.execution.energy_used = energy_used;
        state.execution.constant_results = constant_results;
        state.execution.error = None;
    }

    /// Make every execution entry point fail with `error`.
    pub fn fail_execution(&self, error: LedgerError) {
        self.state.write().execution.error = Some(error);
    }

    /// Make transaction construction fail with `error`.
    pub fn fail_create(&self, error: LedgerError) {
        self.state.write().create_error = Some(error);
    }
}

impl LedgerBackend for MemoryLedger {
    fn view(&self) -> Arc<dyn LedgerView> {
        Arc::new(MemoryView {
            state: self.state.read().clone(),
        })
    }

    fn cursor(&self) -> Cursor {
        self.state.read().cursor
    }

    fn is_witness_active(&self) -> bool {
        self.state.read().witness_active
    }

    fn coinbase(&self) -> Option<Address> {
        self.state.read().coinbase
    }

    fn active_connection_count(&self) -> usize {
        self.state.read().active_connections
    }

    fn peer_count(&self) -> usize {
        self.state.read().peers
    }

    fn sync_begin_number(&self) -> u64 {
        self.state.read().sync_begin
    }
}

/// Snapshot view over a cloned [`MemoryState`].
struct MemoryView {
    state: MemoryState,
}

impl LedgerView for MemoryView {
    fn block_by_id(&self, id: &H256) -> Option<Block> {
        let number = self.state.block_ids.get(id)?;
        self.state.blocks.get(number).cloned()
    }

    fn block_by_num(&self, number: u64) -> Option<Block> {
        self.state.blocks.get(&number).cloned()
    }

    fn head_block(&self) -> Option<Block> {
        self.state.blocks.values().next_back().cloned()
    }

    fn transaction_by_id(&self, id: &H256) -> Option<TransactionCapsule> {
        self.state.transactions.get(id).cloned()
    }

    fn transaction_info_by_id(&self, id: &H256) -> Option<TransactionInfo> {
        self.state.infos.get(id).cloned()
    }

    fn transaction_infos_by_block(&self, number: u64) -> Option<Vec<TransactionInfo>> {
        self.state.infos_by_block.get(&number).cloned()
    }

    fn account(&self, address: &Address) -> Option<Account> {
        self.state.accounts.get(address).cloned()
    }

    fn contract(&self, address: &Address) -> Option<SmartContract> {
        self.state.contracts.get(address).cloned()
    }

    fn contract_info(&self, address: &Address) -> Option<ContractInfo> {
        self.state.contract_infos.get(address).cloned()
    }

    fn storage_slot(&self, address: &Address, key: &H256) -> Option<H256> {
        self.state.storage.get(&(*address, *key)).copied()
    }

    fn energy_price(&self) -> u64 {
        self.state.energy_price
    }

    fn energy_price_at(&self, timestamp_ms: i64) -> u64 {
        self.state
            .energy_price_history
            .range(..=timestamp_ms)
            .next_back()
            .map(|(_, price)| *price)
            .unwrap_or(self.state.energy_price)
    }

    fn create_transaction(&self, contract: ContractPayload) -> LedgerResult<Transaction> {
        if let Some(error) = &self.state.create_error {
            return Err(error.clone());
        }
        let mut raw = volt_types::RawTransaction::unsigned(contract);
        if let Some(head) = self.head_block() {
            let number_bytes = head.number().to_be_bytes();
            raw.ref_block_bytes.copy_from_slice(&number_bytes[6..8]);
            raw.ref_block_hash
                .copy_from_slice(&head.id().as_bytes()[8..16]);
            raw.timestamp_ms = head.timestamp_ms();
            raw.expiration_ms = head.timestamp_ms() + TRANSACTION_EXPIRATION_MS;
        }
        Ok(Transaction::unsigned(raw))
    }

    fn trigger_constant_contract(
        &self,
        _trigger: &TriggerSmartContract,
        transaction: &Transaction,
    ) -> LedgerResult<ConstantExecution> {
        if let Some(error) = &self.state.execution.error {
            return Err(error.clone());
        }
        Ok(ConstantExecution {
            transaction: transaction.clone(),
            energy_used: self.state.execution.energy_used,
            constant_results: self.state.execution.constant_results.clone(),
        })
    }

    fn trigger_contract(
        &self,
        _trigger: &TriggerSmartContract,
        transaction: Transaction,
    ) -> LedgerResult<Transaction> {
        if let Some(error) = &self.state.execution.error {
            return Err(error.clone());
        }
        Ok(transaction)
    }
}
