// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use log::LevelFilter;
use lumen_tv::app::{self, Flags};

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("lumen_tv", LevelFilter::Info)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        init_logger();
    }

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        theme: args.opt_value_from_str("--theme").unwrap_or(None),
    };

    app::run(flags)
}
