//! Single-flight mint submission.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use mint_chain::writer::ChainWriter;
use mint_types::economics::MintRequest;
use mint_types::outcome::TransactionResult;
use mint_types::phase::MintPhase;

/// Dispatches phase-appropriate purchase calls and normalizes the outcome.
///
/// At most one submission is in flight per executor at any time. The
/// interface is expected to disable its trigger while a mint runs, but the
/// executor refuses re-entrant calls itself as a safety net - the second
/// caller gets a local rejection without the chain ever seeing it.
pub struct MintExecutor {
    writer: Arc<dyn ChainWriter>,
    in_flight: AtomicBool,
}

/// Releases the single-flight slot on every exit path.
struct InFlightSlot<'a>(&'a AtomicBool);

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl MintExecutor {
    pub fn new(writer: Arc<dyn ChainWriter>) -> Self {
        Self {
            writer,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit a purchase and always resolve to a terminal outcome.
    ///
    /// Closed phases are rejected before dispatch; errors from the chain
    /// call are caught here and never propagate past this boundary.
    pub async fn submit(&self, request: &MintRequest) -> TransactionResult {
        if request.phase.is_closed() {
            return TransactionResult::failure("The sale is not open");
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("rejecting re-entrant mint submission");
            return TransactionResult::failure("A mint is already in progress");
        }
        let _slot = InFlightSlot(&self.in_flight);

        let outcome = match request.phase {
            MintPhase::Airdrop => self.writer.submit_airdrop(request.quantity).await,
            MintPhase::Whitelist => self.writer.submit_whitelist_mint(request.quantity).await,
            MintPhase::PublicSale => self.writer.submit_public_mint(request.quantity).await,
            // Checked above; kept for exhaustiveness
            MintPhase::Paused | MintPhase::NotOpen => {
                return TransactionResult::failure("The sale is not open")
            }
        };

        match outcome {
            Ok(receipt) => TransactionResult {
                success: receipt.success,
                message: receipt.status,
            },
            Err(e) => {
                warn!("mint submission failed: {:#}", e);
                TransactionResult::failure(format!("Mint failed: {:#}", e))
            }
        }
    }
}
