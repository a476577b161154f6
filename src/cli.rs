//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_BIT_WIDTH;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 一款基于位平面的图像隐写工具：把一幅图像的高位藏进另一幅同尺寸图像的低位，或把它恢复出来。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于位平面的图像隐写工具：把一幅图像 (needle) 的高 n 位写入另一幅同尺寸图像 (stack) 的低 n 位，或从低位中恢复出被隐藏的图像。请使用无损格式 (如 PNG, BMP)。"
)]
pub struct Cli {
    /// 输出更多日志 (-v 为 info, -vv 为 debug)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 把 needle 图像的高 n 位隐藏到 stack 图像的低 n 位中。
    Hide(HideArgs),

    /// 提取图像的低 n 位并提升为高位，恢复被隐藏的图像。
    Reveal(RevealArgs),

    /// 把图像分解为 8 个位平面，每个位平面写出一幅图像。
    Planes(PlanesArgs),

    /// 只保留图像的高 n 位，预览 reveal 能恢复出的效果。
    Msb(MsbArgs),

    /// 按颜色通道拆分图像，每个通道写出一幅图像。
    Channels(ChannelsArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 载体图像的文件路径，其低位将被覆盖。
    #[arg(short, long)]
    pub stack: PathBuf,

    /// 要隐藏的图像的文件路径，尺寸与通道数必须与载体相同。
    #[arg(long)]
    pub needle: PathBuf,

    /// 结果图像的输出路径。默认为载体旁的 `doctored_<文件名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 每个采样使用的位数 (1-8)。
    #[arg(short = 'n', long = "bits", default_value_t = DEFAULT_BIT_WIDTH, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub bits: u8,

    /// 输出文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'reveal' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RevealArgs {
    /// 含有隐藏图像的文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复结果的输出路径。默认为 `revealed_<文件名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 隐藏时使用的位数 (1-8)。
    #[arg(short = 'n', long = "bits", default_value_t = DEFAULT_BIT_WIDTH, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub bits: u8,

    /// 输出文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'planes' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct PlanesArgs {
    /// 要分解的图像的文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 位平面图像的输出目录。默认为 `<文件名>_planes`。
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// 输出文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'msb' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct MsbArgs {
    #[arg(short, long)]
    pub image: PathBuf,

    /// 默认为 `msb_<文件名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 保留的高位数 (1-8)。
    #[arg(short = 'n', long = "bits", default_value_t = DEFAULT_BIT_WIDTH, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub bits: u8,

    #[arg(short, long)]
    pub force: bool,
}

/// 'channels' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ChannelsArgs {
    #[arg(short, long)]
    pub image: PathBuf,

    /// 默认为 `<文件名>_channels`。
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    #[arg(short, long)]
    pub force: bool,
}
