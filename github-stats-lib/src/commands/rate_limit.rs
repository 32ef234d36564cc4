use super::Host;
use super::common::{CommonArgs, Session};
use crate::Result;
use crate::client::{RateLimitStatus, RemoteClient};
use crate::reports::write_rate_limit;
use chrono::Local;
use clap::Parser;
use core::fmt::Write as _;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct RateLimitArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn show_rate_limit<H: Host>(host: &mut H, args: &RateLimitArgs) -> Result<()> {
    let session = Session::open(&args.common).await?;
    let status = session
        .client
        .rate_limit()
        .await
        .map_err(|e| e.into_app_err("retrieving the API rate limit"))?;

    let text = format_status(&status, session.use_colors_for_output())?;
    let _ = write!(host.output(), "{text}");
    Ok(())
}

fn format_status(status: &RateLimitStatus, use_colors: bool) -> Result<String> {
    let mut text = String::new();
    write_rate_limit(status, use_colors, &mut text)?;
    writeln!(text, "Resets at: {}", status.reset_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %Z"))?;
    Ok(text)
}
