// TxHandler - selects and commits a mutually consistent subset of a batch

use crate::handler::{FeeEvaluator, HandlerConfig, SelectionPolicy, TxValidator, ValidationError};
use crate::ledger::{UtxoPool, UtxoRef};
use crate::tx::Transaction;
use tracing::{debug, info, trace};

/// A candidate that was not committed by a `process` call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejected {
    /// Position of the candidate in the submitted batch
    pub position: usize,
    /// Why it is inadmissible against the final pool, or `None` when it is
    /// admissible but was never selected (non-positive fee under `MaxFee`)
    pub reason: Option<ValidationError>,
}

/// Outcome of a single `process` call
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    accepted: Vec<Transaction>,
    rejected: Vec<Rejected>,
    total_fees: i128,
    rounds: usize,
}

impl BatchReport {
    /// Committed transactions, in commit order
    pub fn accepted(&self) -> &[Transaction] {
        &self.accepted
    }

    /// Candidates left uncommitted, in batch order
    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }

    /// Sum of the fees of every committed transaction
    pub fn total_fees(&self) -> i128 {
        self.total_fees
    }

    /// Number of full scans over the batch, including the final one that
    /// found nothing left to commit
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Consume the report, keeping the committed transactions
    pub fn into_accepted(self) -> Vec<Transaction> {
        self.accepted
    }
}

/// Owns a pool of spendable outputs and settles batches of candidate
/// transactions against it.
///
/// The pool is copied from the caller's snapshot on construction and then
/// carried across `process` calls, each call continuing from the state the
/// previous one left.
///
/// Selection rescans the whole batch after every change, so a call costs
/// O(rounds × candidates × validation). Rounds are bounded by the number of
/// candidates plus one.
#[derive(Clone, Debug)]
pub struct TxHandler {
    pool: UtxoPool,
    config: HandlerConfig,
}

impl TxHandler {
    /// Create a handler over a private copy of `pool` using the default
    /// first-admissible policy
    pub fn new(pool: &UtxoPool) -> Self {
        Self::with_config(pool, HandlerConfig::default())
    }

    /// Create a handler with an explicit configuration
    pub fn with_config(pool: &UtxoPool, config: HandlerConfig) -> Self {
        Self {
            pool: pool.clone(),
            config,
        }
    }

    /// Create a handler using the max-fee greedy policy
    pub fn max_fee(pool: &UtxoPool) -> Self {
        Self::with_config(pool, HandlerConfig::new().with_policy(SelectionPolicy::MaxFee))
    }

    /// The configuration this handler was built with
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// The current pool
    pub fn utxo_pool(&self) -> &UtxoPool {
        &self.pool
    }

    /// Give up the handler and keep its pool
    pub fn into_utxo_pool(self) -> UtxoPool {
        self.pool
    }

    /// Whether `tx` is admissible against the current pool
    pub fn is_valid(&self, tx: &Transaction) -> bool {
        TxValidator::is_valid(tx, &self.pool)
    }

    /// Validate `tx` against the current pool, reporting the first violation
    pub fn validate(&self, tx: &Transaction) -> Result<(), ValidationError> {
        TxValidator::validate(tx, &self.pool)
    }

    /// Advisory fee of `tx` against the current pool
    pub fn fee(&self, tx: &Transaction) -> i128 {
        FeeEvaluator::fee(tx, &self.pool)
    }

    /// Commit a mutually valid subset of `candidates` and return it in
    /// commit order
    ///
    /// # Panics
    ///
    /// Panics before touching the pool if any candidate was never finalized
    /// or carries a hash that does not match its content.
    pub fn process(&mut self, candidates: &[Transaction]) -> Vec<Transaction> {
        self.process_with_report(candidates).into_accepted()
    }

    /// Like [`process`](Self::process), also reporting rejections, fees
    /// collected and the number of rounds
    ///
    /// Candidates are identified by their position in `candidates`: a
    /// position is never reconsidered once committed, while equal
    /// transactions at different positions are separate candidates.
    pub fn process_with_report(&mut self, candidates: &[Transaction]) -> BatchReport {
        if let Some(position) = candidates.iter().position(|tx| !tx.is_finalized()) {
            panic!("candidate {position} submitted without a hash matching its content");
        }

        let mut report = BatchReport::default();
        let mut committed = vec![false; candidates.len()];

        match self.config.policy {
            SelectionPolicy::FirstAdmissible => {
                self.select_first_admissible(candidates, &mut committed, &mut report)
            }
            SelectionPolicy::MaxFee => self.select_max_fee(candidates, &mut committed, &mut report),
        }

        report.rejected = candidates
            .iter()
            .enumerate()
            .filter(|(position, _)| !committed[*position])
            .map(|(position, tx)| Rejected {
                position,
                reason: self.validate(tx).err(),
            })
            .collect();

        info!(
            policy = %self.config.policy,
            candidates = candidates.len(),
            accepted = report.accepted.len(),
            rejected = report.rejected.len(),
            rounds = report.rounds,
            total_fees = %report.total_fees,
            "batch processed"
        );

        report
    }

    /// Full passes in batch order, committing each admissible candidate on
    /// sight, until a pass commits nothing
    fn select_first_admissible(
        &mut self,
        candidates: &[Transaction],
        committed: &mut [bool],
        report: &mut BatchReport,
    ) {
        loop {
            report.rounds += 1;
            let mut progressed = false;

            for (position, tx) in candidates.iter().enumerate() {
                if committed[position] {
                    continue;
                }
                match TxValidator::validate(tx, &self.pool) {
                    Ok(()) => {
                        let fee = FeeEvaluator::fee(tx, &self.pool);
                        self.commit(tx, fee, report);
                        committed[position] = true;
                        progressed = true;
                    }
                    Err(reason) => trace!(position, %reason, "candidate not admissible"),
                }
            }

            if !progressed {
                break;
            }
        }
    }

    /// Repeatedly commit the admissible candidate with the strictly greatest
    /// positive fee; ties go to the earliest position
    fn select_max_fee(
        &mut self,
        candidates: &[Transaction],
        committed: &mut [bool],
        report: &mut BatchReport,
    ) {
        loop {
            report.rounds += 1;
            let mut best: Option<(usize, i128)> = None;

            for (position, tx) in candidates.iter().enumerate() {
                if committed[position] {
                    continue;
                }
                if let Err(reason) = TxValidator::validate(tx, &self.pool) {
                    trace!(position, %reason, "candidate not admissible");
                    continue;
                }

                let fee = FeeEvaluator::fee(tx, &self.pool);
                trace!(position, %fee, "candidate admissible");
                if fee > best.map_or(0, |(_, best_fee)| best_fee) {
                    best = Some((position, fee));
                }
            }

            let Some((position, fee)) = best else {
                break;
            };
            self.commit(&candidates[position], fee, report);
            committed[position] = true;
        }
    }

    /// Consume the inputs of an already-validated transaction and publish
    /// its outputs under its content hash
    ///
    /// An output key may only be occupied by an identical output (an equal
    /// candidate committed earlier); anything else would destroy unspent
    /// value and panics before the pool is touched.
    fn commit(&mut self, tx: &Transaction, fee: i128, report: &mut BatchReport) {
        let hash = *tx.hash();
        for (index, output) in tx.outputs().iter().enumerate() {
            let utxo = UtxoRef::new(hash, index as u32);
            if let Some(existing) = self.pool.get_tx_output(&utxo) {
                assert!(
                    existing == output,
                    "commit of {hash} would overwrite unspent output {utxo}"
                );
            }
        }

        for input in tx.inputs() {
            self.pool.remove_utxo(&input.utxo_ref());
        }
        for (index, output) in tx.outputs().iter().enumerate() {
            self.pool.add_utxo(UtxoRef::new(hash, index as u32), output.clone());
        }

        debug!(
            tx = %hash,
            %fee,
            inputs = tx.num_inputs(),
            outputs = tx.num_outputs(),
            "committed transaction"
        );

        report.total_fees += fee;
        report.accepted.push(tx.clone());
    }
}
