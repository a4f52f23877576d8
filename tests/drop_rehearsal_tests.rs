//! End-to-end drop rehearsal: the controller driving the simulated chain
//! through a full sale lifecycle.

use std::sync::Arc;

use mint_chain::sim::{SimChainState, SimulatedChain};
use mint_chain::wallet::LocalWalletProvider;
use mint_controller::controller::MintController;
use mint_session::manager::WalletSessionManager;
use mint_session::store::MemorySessionStore;
use mint_settings::store::MemorySettingsStore;
use mint_types::phase::{MintPhase, PhaseFlags};

const WALLET: &str = "0x0000000000000000000000000000000000001337";

fn controller_over(chain: Arc<SimulatedChain>) -> MintController {
    let provider = Arc::new(LocalWalletProvider::new(WALLET));
    let sessions = Arc::new(WalletSessionManager::new(
        provider,
        Arc::new(MemorySessionStore::new()),
    ));
    MintController::new(
        chain.clone(),
        chain,
        sessions,
        Arc::new(MemorySettingsStore::new()),
    )
}

async fn connect(controller: &MintController, chain: &SimulatedChain) {
    let session = controller.sessions().connect().await;
    chain.set_active_wallet(session.address.as_deref());
    controller.refresh().await;
}

#[tokio::test]
async fn test_full_sale_lifecycle() {
    let chain = Arc::new(SimulatedChain::new(SimChainState::default()));
    let controller = controller_over(chain.clone());

    // Nothing asserted yet: closed, coming soon
    controller.bootstrap().await;
    assert_eq!(controller.phase(), MintPhase::NotOpen);
    assert_eq!(controller.status_label(), "Coming Soon");

    connect(&controller, &chain).await;

    // Whitelist opens: ceiling 2, whitelist pricing
    chain.set_flags(PhaseFlags {
        whitelist_active: true,
        ..PhaseFlags::default()
    });
    controller.refresh().await;
    assert_eq!(controller.phase(), MintPhase::Whitelist);
    assert_eq!(controller.economics().max_per_wallet, 2);

    // An over-ceiling ask is clamped, then fulfilled by the chain
    let result = controller.mint(10).await;
    assert!(result.success, "{}", result.message);
    controller.refresh().await;
    assert_eq!(controller.snapshot().supply.total_minted, 2);
    assert_eq!(controller.snapshot().supply.number_minted, 2);

    // Phase flips to public sale: higher ceiling, public pricing
    chain.set_flags(PhaseFlags {
        public_sale_active: true,
        ..PhaseFlags::default()
    });
    controller.refresh().await;
    assert_eq!(controller.phase(), MintPhase::PublicSale);
    assert_eq!(controller.economics().max_per_wallet, 5);
    assert_eq!(
        controller.economics().cost_per_unit_wei,
        80_000_000_000_000_000
    );

    let result = controller.mint(3).await;
    assert!(result.success);
    controller.refresh().await;
    assert_eq!(controller.snapshot().supply.total_minted, 5);

    // Operator pauses: submissions are rejected before reaching the chain
    chain.with_state_mut(|s| s.flags.paused = true);
    controller.refresh().await;
    assert_eq!(controller.phase(), MintPhase::Paused);
    let result = controller.mint(1).await;
    assert!(!result.success);
    controller.refresh().await;
    assert_eq!(controller.snapshot().supply.total_minted, 5);
}

#[tokio::test]
async fn test_near_sellout_is_refused_by_the_chain() {
    let mut state = SimChainState::default();
    state.flags.public_sale_active = true;
    state.max_supply = 100;
    state.total_minted = 98;
    let chain = Arc::new(SimulatedChain::new(state));
    let controller = controller_over(chain.clone());

    controller.bootstrap().await;
    connect(&controller, &chain).await;

    // The guard allows 5, but only 2 tokens remain; the chain refuses
    let result = controller.mint(5).await;
    assert!(!result.success);
    assert_eq!(result.message, "Only 2 token(s) left");

    let result = controller.mint(2).await;
    assert!(result.success);
    controller.refresh().await;
    assert!(controller.snapshot().supply.is_sold_out());
}

#[tokio::test]
async fn test_quantity_follows_ceiling_across_phase_flips() {
    let mut state = SimChainState::default();
    state.flags.public_sale_active = true;
    let chain = Arc::new(SimulatedChain::new(state));
    let controller = controller_over(chain.clone());

    controller.bootstrap().await;
    let mut quantity = controller.clamp_quantity(5);
    assert_eq!(quantity, 5);

    // Contract drops back to whitelist mid-session
    chain.set_flags(PhaseFlags {
        whitelist_active: true,
        ..PhaseFlags::default()
    });
    controller.refresh().await;
    quantity = controller.clamp_quantity(quantity);
    assert_eq!(quantity, 2);

    // Stepping at the new ceiling stays put
    assert_eq!(controller.increment_quantity(quantity), 2);
    assert_eq!(controller.decrement_quantity(1), 1);
}
