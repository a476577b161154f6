use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use bitplane_hide::{
    cli::{Cli, Commands},
    handler::{handle_channels, handle_hide, handle_msb, handle_planes, handle_reveal},
};

/// 按 `-v` 出现的次数设置日志级别
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new().filter_level(level).format_timestamp(None).init();
}

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Reveal(args) => handle_reveal(args),
        Commands::Planes(args) => handle_planes(args),
        Commands::Msb(args) => handle_msb(args),
        Commands::Channels(args) => handle_channels(args),
    }
}
