//! HTTP infrastructure — implements `Downloader` with `ureq` on a blocking
//! thread.
//!
//! The body is streamed into `<dest>.part` and renamed onto `dest` only once
//! complete, so an interrupted download never leaves a truncated archive
//! under the final name.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::Downloader;

const USER_AGENT: &str = concat!("labprep/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Default, Clone, Copy)]
pub struct UreqDownloader {
    show_progress: bool,
}

impl UreqDownloader {
    #[must_use]
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }
}

impl Downloader for UreqDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let url = url.to_owned();
        let dest = dest.to_path_buf();
        let show_progress = self.show_progress;
        tokio::task::spawn_blocking(move || fetch_to_file(&url, &dest, show_progress))
            .await
            .map_err(|e| anyhow::anyhow!("spawn_blocking panicked: {e}"))?
    }
}

fn fetch_to_file(url: &str, dest: &Path, show_progress: bool) -> Result<u64> {
    let response = match ureq::get(url).set("User-Agent", USER_AGENT).call() {
        Ok(r) => r,
        Err(ureq::Error::Status(code, _)) => anyhow::bail!("HTTP {code}"),
        Err(e) => return Err(anyhow::Error::new(e).context("request failed")),
    };

    let total = response
        .header("Content-Length")
        .and_then(|v| v.parse::<u64>().ok());
    let pb = make_progress_bar(show_progress, total);

    let partial = partial_path(dest);
    let written = match stream_body(response.into_reader(), &partial, &pb) {
        Ok(n) => n,
        Err(e) => {
            pb.abandon();
            std::fs::remove_file(&partial).ok();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    finish_download(&partial, dest)?;
    Ok(written)
}

/// Move the completed `partial` onto `dest`, removing it if that fails.
fn finish_download(partial: &Path, dest: &Path) -> Result<()> {
    std::fs::rename(partial, dest).map_err(|e| {
        std::fs::remove_file(partial).ok();
        anyhow::Error::new(e).context(format!("cannot move download to {}", dest.display()))
    })
}

fn stream_body(
    mut reader: impl Read,
    partial: &Path,
    pb: &indicatif::ProgressBar,
) -> Result<u64> {
    let mut file = std::fs::File::create(partial)
        .with_context(|| format!("cannot create {}", partial.display()))?;
    let mut buf = vec![0u8; 64 * 1024];
    let mut written = 0u64;
    loop {
        let n = reader.read(&mut buf).context("download interrupted")?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])
            .with_context(|| format!("cannot write {}", partial.display()))?;
        written += n as u64;
        pb.set_position(written);
    }
    file.flush()
        .with_context(|| format!("cannot write {}", partial.display()))?;
    Ok(written)
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

fn make_progress_bar(show: bool, total: Option<u64>) -> indicatif::ProgressBar {
    if !show {
        return indicatif::ProgressBar::hidden();
    }
    match total {
        Some(t) => crate::output::progress::bar(t, "Downloading"),
        None => crate::output::progress::spinner("Downloading"),
    }
}
