use dioxus::prelude::*;
use monad_dash_api::prelude::*;

use super::browser::{notify, prompt_symbol, LocalStore};

/// Re-reads balances, transaction count and NFT count for the connected wallet.
///
/// The three reads run independently; each publishes through its own request
/// token, so results for a wallet that has since changed are dropped.
pub fn refresh_account(mut session: Signal<DashboardSession>, config: &DashboardConfig) {
    let Some(address) = session.peek().wallet().address().copied() else {
        return;
    };
    let registry = session.peek().registry().clone();
    let rpc = RpcClient::new(config.rpc_url.clone());
    let nfts = NftClient::new(config.rpc_url.clone());

    let balances_token = session.write().begin_balances();
    let balances_rpc = rpc.clone();
    spawn(async move {
        let result = fetch_all(&balances_rpc, &registry, &address).await;
        session.write().finish_balances(balances_token, result);
    });

    let tx_token = session.write().begin_tx_count();
    spawn(async move {
        let result = rpc.transaction_count(&address).await;
        session.write().finish_tx_count(tx_token, result);
    });

    let nft_token = session.write().begin_nft_count();
    spawn(async move {
        let result = count_nfts(&nfts, &address).await;
        session.write().finish_nft_count(nft_token, result);
    });
}

/// Starts tracking the token at `contract`. The symbol is asked for, or read
/// from the contract when the prompt is left empty.
pub fn add_token(session: Signal<DashboardSession>, config: DashboardConfig, contract: String) {
    let contract = contract.trim().to_string();
    if contract.is_empty() {
        return;
    }

    if let Some(symbol) = prompt_symbol() {
        finish_add(session, &config, &symbol, &contract);
        return;
    }

    spawn(async move {
        let address = match parse_address(&contract) {
            Ok(address) => address,
            Err(e) => {
                notify(&format!("Could not add token: {}", e));
                return;
            }
        };
        let rpc = RpcClient::new(config.rpc_url.clone());
        match rpc.token_symbol(&address).await {
            Ok(symbol) => finish_add(session, &config, &symbol, &contract),
            Err(e) => {
                tracing::error!("symbol lookup failed: {}", e);
                notify("Please enter a token symbol.");
            }
        }
    });
}

fn finish_add(
    mut session: Signal<DashboardSession>,
    config: &DashboardConfig,
    symbol: &str,
    contract: &str,
) {
    let result = session.write().add_token(symbol, contract, &mut LocalStore);
    match result {
        Ok(()) => refresh_account(session, config),
        Err(e) => notify(&format!("Could not add token: {}", e)),
    }
}
