//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `planes` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::bitstream::encoded_len;
use crate::cli::{HideArgs, PlanesArgs, RecoverArgs};
use crate::constants::{
    HIDDEN_IMAGE_PREFIX, PLANE_IMAGE_EXTENSION, PLANE_IMAGE_INFIX, RECOVERED_TEXT_PREFIX,
};
use crate::container;
use crate::planes::split_planes_with;
use crate::steganography::{capacity, embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、调用隐写核心函数把文本写入指定位平面，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与位平面选择的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 文本包含码点大于 255 的字符，或图像没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_hidden_path(&args.image));
    ensure_writable(&dest, args.force)?;

    let text = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let mut picture = container::open(&args.image)?;

    log::info!(
        "Hiding {} characters ({} bits) in {} plane, capacity {} bits",
        text.chars().count(),
        encoded_len(&text),
        args.plane,
        capacity(&picture)
    );

    embed(&mut picture, &text, args.plane)?;

    container::save(&picture, &dest)?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、从指定位平面中提取文本，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像中找不到结束标记，或标记前的数据不是整字节。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let text_path = args
        .text
        .clone()
        .unwrap_or_else(|| default_recovered_path(&args.image));
    ensure_writable(&text_path, args.force)?;

    let picture = container::open(&args.image)?;

    let text = extract(&picture, args.plane).with_context(|| {
        format!(
            "Failed to recover a message from the {} plane of '{}'",
            args.plane,
            args.image.to_string_lossy().red().bold()
        )
    })?;

    log::info!("Recovered {} characters", text.chars().count());

    fs::write(&text_path, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        text_path.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Planes' 命令的执行逻辑。
///
/// 把图像拆分为 R、G、B 三幅黑白位平面图像，并以 BMP 格式保存。
/// 所有输出路径都会先检查一遍，避免只写出部分文件。
pub fn handle_planes(args: PlanesArgs) -> Result<()> {
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| parent_dir(&args.image));

    let picture = container::open(&args.image)?;
    let planes = split_planes_with(&picture, args.plane);

    let outputs: Vec<_> = planes
        .iter()
        .map(|(channel, image)| (plane_path(&out_dir, &args.image, channel.suffix()), image))
        .collect();

    outputs
        .iter()
        .try_for_each(|(path, _)| ensure_writable(path, args.force))?;

    for (path, image) in &outputs {
        container::save(*image, path)?;
        println!(
            "The {} plane has been saved: {}",
            args.plane,
            path.to_string_lossy().green().bold()
        );
    }

    Ok(())
}

/// 默认的隐写结果路径：与输入图像同目录，文件名加上 `doctored_` 前缀。
pub fn default_hidden_path(image: &Path) -> PathBuf {
    let file_name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    parent_dir(image).join(format!("{HIDDEN_IMAGE_PREFIX}{file_name}"))
}

/// 默认的恢复文本路径：与图像同目录，`recovered_<主文件名>.txt`。
pub fn default_recovered_path(image: &Path) -> PathBuf {
    parent_dir(image).join(format!("{RECOVERED_TEXT_PREFIX}{}.txt", file_stem(image)))
}

fn plane_path(out_dir: &Path, image: &Path, suffix: &str) -> PathBuf {
    out_dir.join(format!(
        "{}{PLANE_IMAGE_INFIX}{suffix}.{PLANE_IMAGE_EXTENSION}",
        file_stem(image)
    ))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
