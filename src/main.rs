use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use pub_thr::args::{Args, Config};
use pub_thr::channel::ZmqChannel;
use pub_thr::publisher::ThroughputPublisher;

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = Builder::new();
    logger
        .filter_module(
            &env!("CARGO_PKG_NAME").replace('-', "_"),
            args.verbose.log_level_filter(),
        )
        .init();

    let config = Config::from(args);
    let channel = ZmqChannel::open()?;
    let publisher = ThroughputPublisher::connect(channel, config)?;

    match publisher.run()? {}
}
