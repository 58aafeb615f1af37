use anyhow::{Context, Result};
use structopt::StructOpt;

use domainscope::aggregate::Sources;
use domainscope::config::Opt;
use domainscope::initialization::{init_client, init_logger, init_resolver};
use domainscope::server::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::from_args();

    init_logger(opt.log_level.into()).context("Failed to initialize logger")?;

    let client = init_client(opt.adapter_timeout).context("Failed to initialize HTTP client")?;
    let resolver = init_resolver();

    let sources = Sources::new(client, resolver)
        .with_adapter_timeout(std::time::Duration::from_secs(opt.adapter_timeout));

    start_server(&opt.bind, opt.port, sources).await
}
