//! # 命令处理逻辑模块
//!
//! 包含处理各个子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::bits::BitWidth;
use crate::cli::{ChannelsArgs, HideArgs, MsbArgs, PlanesArgs, RevealArgs};
use crate::codec::{load_raster, save_raster};
use crate::constants::{
    BIT_PLANES, CHANNELS_DIR_SUFFIX, COLOR_CHANNEL_NAMES, DEFAULT_EXTENSION, HIDDEN_PREFIX, MSB_PREFIX,
    PLANES_DIR_SUFFIX, REVEALED_PREFIX,
};
use crate::raster::Raster;
use crate::steganography::{decompose, embed, extract, split_channels, truncate};
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 读取载体与待隐藏图像、检查两者形状一致、调用嵌入算法，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与位宽的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 位宽不在 1-8 之内。
/// * 无法读取或解码任一输入图像。
/// * 两幅图像的尺寸或通道数不同。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_file(&args.stack, HIDDEN_PREFIX));
    ensure_writable(&dest, args.force)?;

    let n: BitWidth = args.bits.try_into()?;
    info!(
        "stack = '{}', needle = '{}', using {} bit(s)",
        args.stack.display(),
        args.needle.display(),
        n
    );

    let stack = load_raster(&args.stack)?;
    let needle = load_raster(&args.needle)?;

    let hidden = embed(&stack, &needle, n).with_context(|| {
        format!(
            "Cannot hide {} inside {}. \nBoth images must have the same width, height and color channels.",
            args.needle.to_string_lossy().red().bold(),
            args.stack.to_string_lossy().red().bold()
        )
    })?;

    save_raster(&dest, &hidden)?;

    println!(
        "The image has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Reveal' 命令的执行逻辑。
///
/// 读取经过隐写的图像，提取低 n 位并提升为高位，将恢复的图像写入目标文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 位宽不在 1-8 之内。
/// * 无法读取输入图像或写入目标文件。
pub fn handle_reveal(args: RevealArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_file(&args.image, REVEALED_PREFIX));
    ensure_writable(&dest, args.force)?;

    let n: BitWidth = args.bits.try_into()?;
    info!("extracting {} bit(s) from '{}'", n, args.image.display());

    let source = load_raster(&args.image)?;
    save_raster(&dest, &extract(&source, n))?;

    println!(
        "The hidden image has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Planes' 命令的执行逻辑。
///
/// 把输入图像分解为 8 个位平面，依次写入 `bit_0.png` 到 `bit_7.png`。
/// 任何一个目标文件已存在 (且未指定 `--force`) 时，一个文件都不会写出。
pub fn handle_planes(args: PlanesArgs) -> Result<()> {
    let dir = args
        .dir
        .unwrap_or_else(|| default_dir(&args.image, PLANES_DIR_SUFFIX));

    let targets: Vec<PathBuf> = (0..BIT_PLANES)
        .map(|i| dir.join(format!("bit_{i}.{DEFAULT_EXTENSION}")))
        .collect();
    targets
        .iter()
        .try_for_each(|path| ensure_writable(path, args.force))?;

    let source = load_raster(&args.image)?;
    let planes = decompose(&source);

    write_all(&dir, targets.iter().zip(planes.iter()))?;

    println!(
        "All 8 bit planes have been saved in: {}",
        dir.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Msb' 命令的执行逻辑：只保留每个采样的高 n 位。
pub fn handle_msb(args: MsbArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_file(&args.image, MSB_PREFIX));
    ensure_writable(&dest, args.force)?;

    let n: BitWidth = args.bits.try_into()?;
    let source = load_raster(&args.image)?;
    save_raster(&dest, &truncate(&source, n))?;

    println!(
        "The upper {} bit(s) have been kept and saved: {}",
        n.to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Channels' 命令的执行逻辑：每个颜色通道写出一幅图像。
///
/// 通道数在解码后才能确定，因此覆盖检查在解码之后、写入之前进行。
pub fn handle_channels(args: ChannelsArgs) -> Result<()> {
    let dir = args
        .dir
        .unwrap_or_else(|| default_dir(&args.image, CHANNELS_DIR_SUFFIX));

    let source = load_raster(&args.image)?;
    let parts = split_channels(&source);

    let targets: Vec<PathBuf> = (0..parts.len())
        .map(|i| dir.join(format!("{}.{DEFAULT_EXTENSION}", channel_name(i, parts.len()))))
        .collect();
    targets
        .iter()
        .try_for_each(|path| ensure_writable(path, args.force))?;

    write_all(&dir, targets.iter().zip(parts.iter()))?;

    println!(
        "{} channel image(s) have been saved in: {}",
        parts.len().to_string().green().bold(),
        dir.to_string_lossy().green().bold()
    );

    Ok(())
}

fn channel_name(index: usize, count: usize) -> String {
    match count {
        1 => "gray".to_owned(),
        3 => COLOR_CHANNEL_NAMES[index].to_owned(),
        _ => format!("channel_{index}"),
    }
}

fn write_all<'a>(
    dir: &Path,
    mut outputs: impl Iterator<Item = (&'a PathBuf, &'a Raster)>,
) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| {
        format!(
            "Unable to create output directory: {}",
            dir.to_string_lossy().red().bold()
        )
    })?;

    outputs.try_for_each(|(path, raster)| {
        info!("writing {}", path.display());
        save_raster(path, raster)
    })
}

/// 检查输出路径是否可以写入。
///
/// # Errors
///
/// 文件已存在且 `force` 为 `false` 时返回错误。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// `dir/<prefix><stem>.png`，与输入文件位于同一目录。
fn default_file(input: &Path, prefix: &str) -> PathBuf {
    input.with_file_name(format!("{prefix}{}.{DEFAULT_EXTENSION}", file_stem(input)))
}

/// `dir/<stem><suffix>`，与输入文件位于同一目录。
fn default_dir(input: &Path, suffix: &str) -> PathBuf {
    input.with_file_name(format!("{}{suffix}", file_stem(input)))
}

fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned())
}
