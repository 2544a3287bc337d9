//! Thin orchestration over the external node tool
//!
//! Each method builds a fixed sub-command, appends encoder output where the
//! grammar varies, runs it, and feeds stdout to the matching decoder.
//! Nothing here retries or reinterprets tool failures; stderr is surfaced
//! unmodified.

use std::{path::Path, sync::Arc};

use anyhow::{bail, Context, Result};
use stoa_codec::{
    aggregate_balance, encode_build_raw, encode_min_fee, encode_sign, parse_min_fee,
    parse_tx_id, parse_utxo_listing,
};
use stoa_common::{
    FileStore, Lovelace, ScriptRef, SignDescriptor, TxDescriptor, UtxoRecord, WalletInfo,
};
use tracing::{debug, info};

use crate::{CliConfig, CommandRunner};

pub struct NodeCli {
    config: CliConfig,
    runner: Arc<dyn CommandRunner>,
    files: Arc<dyn FileStore>,
}

impl NodeCli {
    pub fn new(
        config: CliConfig,
        runner: Arc<dyn CommandRunner>,
        files: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            config,
            runner,
            files,
        }
    }

    async fn run(&self, args: Vec<String>) -> Result<String> {
        let output = self.runner.run(&self.config.binary, &args).await?;
        if output.status != 0 {
            bail!(
                "{} exited with status {}: {}",
                self.config.binary,
                output.status,
                output.stderr.trim()
            );
        }
        Ok(output.stdout)
    }

    fn socket_args(&self) -> Vec<String> {
        match &self.config.socket_path {
            Some(path) => vec!["--socket-path".to_string(), path.display().to_string()],
            None => Vec::new(),
        }
    }

    /// Build an unsigned transaction body with `transaction build-raw`
    ///
    /// A descriptor without an era marker inherits the configured one.
    pub async fn build_raw(&self, tx: &TxDescriptor) -> Result<()> {
        let mut tx = tx.clone();
        if tx.era.is_none() {
            tx.era = self.config.era()?;
        }

        let mut args = vec!["transaction".to_string(), "build-raw".to_string()];
        args.extend(encode_build_raw(&tx, self.files.as_ref())?);
        self.run(args).await?;
        info!(out_file = %tx.out_file.display(), "built transaction body");
        Ok(())
    }

    /// Sign a built transaction body
    pub async fn sign(&self, sign: &SignDescriptor) -> Result<()> {
        let mut args = vec!["transaction".to_string(), "sign".to_string()];
        args.extend(encode_sign(sign)?);
        args.extend(self.config.network.args());
        self.run(args).await?;
        Ok(())
    }

    /// Submit a signed transaction
    pub async fn submit(&self, tx_file: &Path) -> Result<()> {
        let mut args = vec![
            "transaction".to_string(),
            "submit".to_string(),
            "--tx-file".to_string(),
            tx_file.display().to_string(),
        ];
        args.extend(self.config.network.args());
        args.extend(self.socket_args());
        self.run(args).await?;
        info!(tx_file = %tx_file.display(), "submitted transaction");
        Ok(())
    }

    /// List unspent outputs at an address
    pub async fn query_utxos(&self, address: &str) -> Result<Vec<UtxoRecord>> {
        let mut args = vec![
            "query".to_string(),
            "utxo".to_string(),
            "--address".to_string(),
            address.to_string(),
        ];
        args.extend(self.config.network.args());
        args.extend(self.socket_args());

        let listing = self.run(args).await?;
        let records = parse_utxo_listing(&listing)?;
        debug!(address, utxos = records.len(), "queried utxos");
        Ok(records)
    }

    /// Unspent outputs plus their aggregated balance
    pub async fn wallet_info(&self, address: &str) -> Result<WalletInfo> {
        let utxos = self.query_utxos(address).await?;
        let balance = aggregate_balance(&utxos);
        Ok(WalletInfo {
            address: address.to_string(),
            utxos,
            balance,
        })
    }

    /// Chain tip as reported by the tool, raw JSON
    pub async fn query_tip(&self) -> Result<String> {
        let mut args = vec!["query".to_string(), "tip".to_string()];
        args.extend(self.config.network.args());
        args.extend(self.socket_args());
        self.run(args).await
    }

    /// Write current protocol parameters to a file
    pub async fn query_protocol_parameters(&self, out_file: &Path) -> Result<()> {
        let mut args = vec!["query".to_string(), "protocol-parameters".to_string()];
        args.extend(self.config.network.args());
        args.extend(self.socket_args());
        args.push("--out-file".to_string());
        args.push(out_file.display().to_string());
        self.run(args).await?;
        Ok(())
    }

    /// Estimate the minimum fee for a built transaction body
    pub async fn calculate_min_fee(
        &self,
        tx_body_file: &Path,
        tx_in_count: usize,
        tx_out_count: usize,
        witness_count: usize,
        protocol_params_file: &Path,
    ) -> Result<Lovelace> {
        let mut args = vec![
            "transaction".to_string(),
            "calculate-min-fee".to_string(),
        ];
        args.extend(encode_min_fee(
            tx_body_file,
            tx_in_count,
            tx_out_count,
            witness_count,
            protocol_params_file,
        ));
        args.extend(self.config.network.args());

        let response = self.run(args).await?;
        Ok(parse_min_fee(&response)?)
    }

    /// Identifier of a built or signed transaction
    pub async fn tx_id(&self, tx_file: &Path) -> Result<String> {
        let args = vec![
            "transaction".to_string(),
            "txid".to_string(),
            "--tx-file".to_string(),
            tx_file.display().to_string(),
        ];
        let response = self.run(args).await?;
        let id = parse_tx_id(&response)?;
        // The tool prints a hex digest; anything else means we misread it
        hex::decode(&id).with_context(|| format!("tx id {id:?} is not hex"))?;
        Ok(id)
    }

    /// Policy id of a minting script, persisting inline content first
    pub async fn policy_id(&self, script: &ScriptRef) -> Result<String> {
        script.validate("policy script")?;
        self.files.write(&script.path, &script.content)?;

        let args = vec![
            "transaction".to_string(),
            "policyid".to_string(),
            "--script-file".to_string(),
            script.path.display().to_string(),
        ];
        let response = self.run(args).await?;
        Ok(parse_tx_id(&response)?)
    }

    /// Generate a payment key pair
    pub async fn generate_payment_keys(&self, vkey_file: &Path, skey_file: &Path) -> Result<()> {
        let args = vec![
            "address".to_string(),
            "key-gen".to_string(),
            "--verification-key-file".to_string(),
            vkey_file.display().to_string(),
            "--signing-key-file".to_string(),
            skey_file.display().to_string(),
        ];
        self.run(args).await?;
        Ok(())
    }

    /// Derive an address from a payment verification key
    pub async fn build_address(&self, vkey_file: &Path) -> Result<String> {
        let mut args = vec![
            "address".to_string(),
            "build".to_string(),
            "--payment-verification-key-file".to_string(),
            vkey_file.display().to_string(),
        ];
        args.extend(self.config.network.args());

        let response = self.run(args).await?;
        Ok(response.trim().to_string())
    }
}
