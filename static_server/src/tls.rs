use std::{fs::File, io::BufReader};

use anyhow::{Context, Result};
use rustls::pki_types::CertificateDer;
use rustls::server::ServerConfig;
use rustls_pemfile::{certs, private_key};

use crate::config::TlsFiles;

/// rustls server config from a PEM certificate chain and private key.
pub fn rustls_config(files: &TlsFiles) -> Result<ServerConfig> {
    // ── PEM → DER ───────────────────────────────────────────────────────────
    let mut r = BufReader::new(
        File::open(&files.cert).with_context(|| format!("open {}", files.cert.display()))?,
    );
    let chain: Vec<CertificateDer<'static>> = certs(&mut r).collect::<Result<_, _>>()?;

    let mut r = BufReader::new(
        File::open(&files.key).with_context(|| format!("open {}", files.key.display()))?,
    );
    let key = private_key(&mut r)?
        .with_context(|| format!("no private key in {}", files.key.display()))?;

    // ── no client auth ─────────────────────────────────────────────────────
    let cfg = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(chain, key)?;

    Ok(cfg)
}
