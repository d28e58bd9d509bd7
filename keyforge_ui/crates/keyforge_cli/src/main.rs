use clap::Parser;
use keyforge_core::{NoClipboard, OsKeyProvider, Session};
use serde_json::json;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keyforge", about = "Generate AES key material and a mode-appropriate IV")]
struct Args {
    /// Cipher mode: AES-CBC or AES-GCM.
    #[arg(long, default_value = "AES-GCM")]
    algorithm: String,

    /// Key length in bits: 128 or 256.
    #[arg(long, default_value = "256")]
    key_size: String,

    /// Emit the result as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let session = Session::new(Arc::new(OsKeyProvider), Arc::new(NoClipboard));
    session.set_algorithm(args.algorithm.trim())?;
    session.set_key_size(&args.key_size)?;
    session.generate().await;

    let snapshot = session.state();
    if let Some(message) = snapshot.last_error {
        anyhow::bail!("{message}");
    }
    let material = snapshot
        .material
        .ok_or_else(|| anyhow::anyhow!("generation finished without a result"))?;

    let params = session.params();
    if args.json {
        let out = json!({
            "algorithm": params.mode.id(),
            "keyBits": params.key_size.bits(),
            "key": material.key,
            "iv": material.iv,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Algorithm: {} ({}-bit key)", params.mode, params.key_size.bits());
        println!("Key: {}", material.key);
        println!("IV:  {}", material.iv);
    }

    Ok(())
}
